//! Output encoders (PPM, PNG) and the PPM reader.

mod png_encoder;
mod ppm;

pub use png_encoder::PngEncoder;
pub use ppm::{save_to_file, PpmDecoder, PpmEncoder, MAX_VALUE};
