/// Types partagés, codec des cellules et configuration de brailleprint.
///
/// This crate contains the dot-pattern codec, the bitmap type and the
/// traits shared by the glyph, render and app crates.

pub mod bitmap;
pub mod codec;
pub mod config;
pub mod error;
pub mod traits;

pub use bitmap::Bitmap;
pub use codec::{BrailleEncoder, DotPattern};
pub use config::{Config, FontConfig, PrinterConfig};
pub use error::CoreError;
pub use traits::{Decoder, Encoder, Font};

