//! opencad-demo: renders the sample scenes to PPM files.
//!
//! Run: `opencad-demo --out-dir target/scenes`

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use opencad::prelude::*;

const BACKGROUND_COLOR: Color = Color::from_u32(0xFF20_2020);
const FOREGROUND_COLOR: Color = Color::from_u32(0xFF20_20FF);
const GREEN_COLOR: Color = Color::from_u32(0xFF20_FF20);
const RED_COLOR: Color = Color::from_u32(0xFFFF_3030);

/// Grid used by the checker and circle scenes.
const COLS: u32 = 8 * 2;
const ROWS: u32 = 6 * 2;

/// Render the sample scenes with the opencad rasterizer
#[derive(Parser, Debug)]
#[command(name = "opencad-demo")]
#[command(version)]
#[command(about = "Render checkerboard, circle, line and brick scenes to PPM", long_about = None)]
struct Cli {
    /// Directory the images are written to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Scenes to render (default: all)
    #[arg(short, long, value_enum)]
    scene: Vec<Scene>,

    /// Also write a PNG next to each PPM
    #[arg(long)]
    png: bool,

    /// Log every written file
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Scene {
    Checker,
    Circle,
    Lines,
    Brick,
}

impl Scene {
    const ALL: [Self; 4] = [Self::Checker, Self::Circle, Self::Lines, Self::Brick];

    const fn name(self) -> &'static str {
        match self {
            Self::Checker => "checker",
            Self::Circle => "circle",
            Self::Lines => "lines",
            Self::Brick => "brick",
        }
    }

    fn render(self, buf: &mut PixelBuffer) {
        match self {
            Self::Checker => checker(buf),
            Self::Circle => circles(buf),
            Self::Lines => lines(buf),
            Self::Brick => brick(buf),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let scenes = if cli.scene.is_empty() {
        Scene::ALL.to_vec()
    } else {
        cli.scene.clone()
    };

    let mut buf = PixelBuffer::new(cli.width, cli.height)
        .with_context(|| format!("could not allocate {}x{} buffer", cli.width, cli.height))?;

    for scene in scenes {
        scene.render(&mut buf);
        save(&buf, &cli.out_dir, scene.name(), cli.png)?;
    }

    Ok(())
}

fn save(buf: &PixelBuffer, dir: &Path, name: &str, png: bool) -> Result<()> {
    let path = dir.join(format!("{name}.ppm"));
    save_to_file(buf, &path).with_context(|| format!("could not save file {}", path.display()))?;
    info!(path = %path.display(), "saved");

    if png {
        let path = dir.join(format!("{name}.png"));
        PngEncoder::write_to_file(buf, &path)
            .with_context(|| format!("could not save file {}", path.display()))?;
        info!(path = %path.display(), "saved");
    }

    Ok(())
}

fn cell_size(buf: &PixelBuffer) -> (u32, u32) {
    ((buf.width() / COLS).max(1), (buf.height() / ROWS).max(1))
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn checker(buf: &mut PixelBuffer) {
    let (cell_w, cell_h) = cell_size(buf);
    fill(buf, BACKGROUND_COLOR);

    for row in 0..ROWS {
        for col in 0..COLS {
            let color = if (col + row) % 2 == 0 {
                FOREGROUND_COLOR
            } else {
                BACKGROUND_COLOR
            };
            Rect::new((col * cell_w) as i32, (row * cell_h) as i32, cell_w, cell_h).draw(buf, color);
        }
    }
}

fn circles(buf: &mut PixelBuffer) {
    let (cell_w, cell_h) = cell_size(buf);
    let radius = cell_w.min(cell_h) as f32;
    fill(buf, BACKGROUND_COLOR);

    for row in 0..ROWS {
        for col in 0..COLS {
            let u = col as f32 / COLS as f32;
            let v = row as f32 / ROWS as f32;
            let t = (u + v) / 2.0;

            let r = lerp((radius / 8.0).floor(), (radius / 2.0).floor(), t) as i32;
            Circle::new(
                (col * cell_w + cell_w / 2) as i32,
                (row * cell_h + cell_h / 2) as i32,
                r,
            )
            .draw(buf, FOREGROUND_COLOR);
        }
    }
}

fn lines(buf: &mut PixelBuffer) {
    let w = buf.width() as i32;
    let h = buf.height() as i32;
    fill(buf, BACKGROUND_COLOR);

    draw_line(buf, 0, 0, w, h, FOREGROUND_COLOR);
    draw_line(buf, w, 0, 0, h, FOREGROUND_COLOR);

    draw_line(buf, 0, 0, w / 4, h, GREEN_COLOR);
    draw_line(buf, w / 4, 0, 0, h, GREEN_COLOR);
    draw_line(buf, w, 0, w / 4 * 3, h, GREEN_COLOR);
    draw_line(buf, w / 4 * 3, 0, w, h, GREEN_COLOR);

    draw_line(buf, 0, h / 2, w, h / 2, RED_COLOR);
    draw_line(buf, w / 2, 0, w / 2, h, RED_COLOR);
}

fn brick(buf: &mut PixelBuffer) {
    fill(buf, Color::from_u32(0xFF00_0000));

    let edges = [
        // Front face
        (200, 400, 400, 400),
        (400, 400, 400, 300),
        (400, 300, 200, 300),
        (200, 300, 200, 400),
        // Top face
        (200, 300, 250, 250),
        (250, 250, 450, 250),
        // Right face
        (400, 400, 450, 350),
        (450, 350, 450, 250),
        (450, 250, 400, 300),
        (400, 300, 400, 400),
    ];
    for (x1, y1, x2, y2) in edges {
        Line::from_coords(x1, y1, x2, y2).draw(buf, Color::WHITE);
    }
}
