/// Buffering and scanline output for brailleprint.
///
/// Bitmaps are queued in an index-linked [`OrderedBuffer`] and flattened
/// into one string per row by [`ScanlineBuffer`].

pub mod buffer;
pub mod list;
pub mod printer;

pub use buffer::ScanlineBuffer;
pub use list::{BufferNode, OrderedBuffer};
pub use printer::LinePrinter;
