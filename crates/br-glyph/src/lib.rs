pub mod decoder;
/// Glyph engine for brailleprint.
///
/// Rasterizes dot patterns into symbol bitmaps and reads them back.
pub mod font;
pub mod reader;
pub mod tree;

pub use decoder::BrailleDecoder;
pub use font::BrailleFont;
pub use reader::BrailleReader;
pub use tree::SymbolTree;
