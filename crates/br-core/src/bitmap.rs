/// Grille immuable de symboles d'une cellule rendue, row-major.
///
/// Produced once (by a font or a reader) and never mutated afterwards.
///
/// # Example
/// ```
/// use br_core::Bitmap;
/// let bitmap = Bitmap::from_rows(&["o.", "..", ".."]);
/// assert_eq!(bitmap.height(), 3);
/// assert_eq!(bitmap.width(), 2);
/// assert_eq!(bitmap.get(0, 0), Some('o'));
/// assert_eq!(bitmap.get(3, 0), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Bitmap {
    /// Flat array of symbols, row-major.
    cells: Vec<char>,
    height: usize,
    width: usize,
}

impl Bitmap {
    /// Build a bitmap by evaluating `f(row, col)` for every cell.
    ///
    /// # Example
    /// ```
    /// use br_core::Bitmap;
    /// let bitmap = Bitmap::from_fn(2, 3, |row, col| if row == col { '#' } else { ' ' });
    /// assert_eq!(bitmap.row_string(1), " # ");
    /// ```
    #[must_use]
    pub fn from_fn(height: usize, width: usize, mut f: impl FnMut(usize, usize) -> char) -> Self {
        let mut cells = Vec::with_capacity(height * width);
        for row in 0..height {
            for col in 0..width {
                cells.push(f(row, col));
            }
        }
        Self {
            cells,
            height,
            width,
        }
    }

    /// Build a bitmap from string rows. The width is taken from the first row;
    /// shorter rows are padded with `' '`, longer rows are cut.
    #[must_use]
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Self {
        let grid: Vec<Vec<char>> = rows.iter().map(|r| r.as_ref().chars().collect()).collect();
        let width = grid.first().map_or(0, Vec::len);
        Self::from_fn(grid.len(), width, |row, col| {
            grid[row].get(col).copied().unwrap_or(' ')
        })
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Symbol at (`row`, `col`), `None` out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.cells.get(row * self.width + col).copied()
    }

    /// Symbols of one row. Empty slice out of bounds.
    #[must_use]
    pub fn row(&self, row: usize) -> &[char] {
        if row >= self.height {
            return &[];
        }
        &self.cells[row * self.width..(row + 1) * self.width]
    }

    /// One row as an owned `String`.
    #[must_use]
    pub fn row_string(&self, row: usize) -> String {
        self.row(row).iter().collect()
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        (0..self.height).map(move |r| self.row(r))
    }
}
