use br_core::bitmap::Bitmap;

use crate::list::{BufferNode, OrderedBuffer};

/// Symbol written between adjacent cells.
const SPACING_SYMBOL: char = ' ';

/// Tampon de bitmaps aplati en scanlines imprimables.
///
/// Bitmaps are expected to come from one monospaced font: the row count of
/// the first element is used for every element.
///
/// # Example
/// ```
/// use br_core::Bitmap;
/// use br_render::buffer::ScanlineBuffer;
///
/// let mut buffer = ScanlineBuffer::new();
/// buffer.push(Bitmap::from_rows(&["o.", "..", ".."]));
/// buffer.push(Bitmap::from_rows(&["o.", "o.", ".."]));
/// let lines = buffer.render_scanlines(1).unwrap();
/// assert_eq!(lines, vec!["o. o.", ".. o.", ".. .."]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScanlineBuffer {
    list: OrderedBuffer<Bitmap>,
}

impl ScanlineBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of buffered cells.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Append a cell.
    pub fn push(&mut self, bitmap: Bitmap) {
        self.list.add_last(BufferNode::new(bitmap));
    }

    /// Remove and return the last cell.
    pub fn pop(&mut self) -> Option<Bitmap> {
        self.list.remove_last().map(BufferNode::into_value)
    }

    /// Insert a cell at `position` (clamped to the end).
    pub fn insert(&mut self, position: usize, bitmap: Bitmap) {
        self.list.insert(BufferNode::new(bitmap), position);
    }

    /// Remove and return the cell at `position` (clamped to the last cell).
    pub fn delete(&mut self, position: usize) -> Option<Bitmap> {
        self.list.remove(position).map(BufferNode::into_value)
    }

    /// Cell at `position`, `None` out of bounds.
    pub fn get(&self, position: usize) -> Option<&Bitmap> {
        self.list.get(position).map(BufferNode::value)
    }

    /// Drop every buffered cell.
    pub fn clear_buffer(&mut self) {
        self.list.clear();
    }

    /// Flatten the buffer into one string per bitmap row, cells separated by
    /// `spacing` spaces (none after the last cell).
    ///
    /// Returns `None` when the buffer is empty.
    #[must_use]
    pub fn render_scanlines(&self, spacing: usize) -> Option<Vec<String>> {
        let height = self.list.first()?.value().height();
        let gap: String = std::iter::repeat_n(SPACING_SYMBOL, spacing).collect();
        let last = self.list.len() - 1;

        let lines = (0..height)
            .map(|row| {
                let mut line = String::new();
                for (i, bitmap) in self.list.iter().enumerate() {
                    line.extend(bitmap.row(row));
                    if i < last {
                        line.push_str(&gap);
                    }
                }
                line
            })
            .collect();
        Some(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(rows: &[&str]) -> Bitmap {
        Bitmap::from_rows(rows)
    }

    #[test]
    fn empty_buffer_renders_nothing() {
        let mut buffer = ScanlineBuffer::new();
        assert_eq!(buffer.render_scanlines(1), None);
        assert_eq!(buffer.pop(), None);
        assert_eq!(buffer.delete(0), None);
    }

    #[test]
    fn two_cells_with_spacing() {
        let mut buffer = ScanlineBuffer::new();
        buffer.push(cell(&["o.", "..", ".."]));
        buffer.push(cell(&["o.", "o.", ".."]));
        let lines = buffer.render_scanlines(1).unwrap();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.chars().count() == 5));
        assert_eq!(lines[0], "o. o.");
        assert_eq!(lines[1], ".. o.");
    }

    #[test]
    fn single_cell_has_no_trailing_spacing() {
        let mut buffer = ScanlineBuffer::new();
        buffer.push(cell(&["o.", "..", ".."]));
        assert_eq!(buffer.render_scanlines(4).unwrap(), vec!["o.", "..", ".."]);
    }

    #[test]
    fn zero_spacing_concatenates() {
        let mut buffer = ScanlineBuffer::new();
        buffer.push(cell(&["ab", "cd", "ef"]));
        buffer.push(cell(&["gh", "ij", "kl"]));
        assert_eq!(buffer.render_scanlines(0).unwrap(), vec!["abgh", "cdij", "efkl"]);
    }

    #[test]
    fn positional_edits() {
        let mut buffer = ScanlineBuffer::new();
        buffer.push(cell(&["a"]));
        buffer.push(cell(&["c"]));
        buffer.insert(1, cell(&["b"]));
        buffer.insert(10, cell(&["d"]));
        assert_eq!(buffer.render_scanlines(0).unwrap(), vec!["abcd"]);

        assert_eq!(buffer.delete(1), Some(cell(&["b"])));
        assert_eq!(buffer.delete(10), Some(cell(&["d"])));
        assert_eq!(buffer.pop(), Some(cell(&["c"])));
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.get(0), Some(&cell(&["a"])));

        buffer.clear_buffer();
        assert!(buffer.is_empty());
        assert_eq!(buffer.render_scanlines(0), None);
    }
}
