use br_core::bitmap::Bitmap;
use br_core::codec::{CELL_COLUMNS, CELL_ROWS};
use br_core::error::CoreError;
use br_core::traits::Decoder;

/// Traduit des scanlines Braille en texte ASCII.
///
/// Each cell is `cell_width` columns wide (2 by default) followed by
/// `spacing` columns of separator. Only the top-left 3×2 region of a cell is
/// handed to the decoder, rows past the third are ignored.
///
/// # Example
/// ```
/// use br_core::BrailleEncoder;
/// use br_glyph::{BrailleDecoder, BrailleReader};
///
/// let reader = BrailleReader::new(BrailleDecoder::new(&BrailleEncoder));
/// let lines = ["o. o.", ".. o.", ".. .."];
/// assert_eq!(reader.translate(&lines, 'o', 1).unwrap(), "ab");
/// ```
#[derive(Debug)]
pub struct BrailleReader<D> {
    decoder: D,
    cell_width: usize,
}

impl<D: Decoder> BrailleReader<D> {
    #[must_use]
    pub fn new(decoder: D) -> Self {
        Self {
            decoder,
            cell_width: CELL_COLUMNS,
        }
    }

    /// Read cells rendered by a font wider than 2 columns. Values below 2
    /// are raised to 2.
    #[must_use]
    pub fn with_cell_width(mut self, cell_width: usize) -> Self {
        self.cell_width = cell_width.max(CELL_COLUMNS);
        self
    }

    /// Translate one Braille line (one scanline per row) into text.
    ///
    /// An empty slice yields an empty string.
    ///
    /// # Errors
    /// [`CoreError::MalformedScanlines`] when fewer than three scanlines are
    /// given or a cell runs past the end of a scanline; decoder errors
    /// ([`CoreError::UnmappedPattern`]) are propagated.
    pub fn translate<S: AsRef<str>>(
        &self,
        lines: &[S],
        dot_symbol: char,
        spacing: usize,
    ) -> Result<String, CoreError> {
        let Some(first) = lines.first() else {
            return Ok(String::new());
        };
        if lines.len() < CELL_ROWS {
            return Err(CoreError::MalformedScanlines {
                column: 0,
                reason: format!("{} scanline(s), {CELL_ROWS} attendues", lines.len()),
            });
        }

        let rows: Vec<Vec<char>> = lines[..CELL_ROWS]
            .iter()
            .map(|l| l.as_ref().chars().collect())
            .collect();
        let line_len = first.as_ref().chars().count();
        let step = self.cell_width + spacing;

        let mut text = String::with_capacity(line_len / step + 1);
        for column in (0..line_len).step_by(step) {
            let cell = extract_cell(&rows, column)?;
            log::trace!("Cellule à la colonne {column} : {cell:?}");
            text.push(self.decoder.decode_bitmap(&cell, dot_symbol)?);
        }
        Ok(text)
    }

    /// Translate printed output holding several Braille lines.
    ///
    /// Empty separator lines are dropped and the remaining scanlines are read
    /// in blocks of `line_height` (at least 3), one text line per block.
    ///
    /// # Errors
    /// Same as [`translate`](Self::translate) for the first failing block.
    pub fn translate_page<S: AsRef<str>>(
        &self,
        lines: &[S],
        line_height: usize,
        dot_symbol: char,
        spacing: usize,
    ) -> Result<Vec<String>, CoreError> {
        let scanlines: Vec<&str> = lines
            .iter()
            .map(AsRef::as_ref)
            .filter(|l| !l.is_empty())
            .collect();

        scanlines
            .chunks(line_height.max(CELL_ROWS))
            .enumerate()
            .map(|(n, block)| {
                self.translate(block, dot_symbol, spacing).inspect_err(|e| {
                    log::warn!("Ligne Braille {} illisible : {e}", n + 1);
                })
            })
            .collect()
    }
}

/// Cut the 3×2 data region starting at `column` out of the scanlines.
fn extract_cell(rows: &[Vec<char>], column: usize) -> Result<Bitmap, CoreError> {
    for (r, row) in rows.iter().enumerate() {
        if row.len() < column + CELL_COLUMNS {
            return Err(CoreError::MalformedScanlines {
                column,
                reason: format!("scanline {r} trop courte ({} caractères)", row.len()),
            });
        }
    }
    Ok(Bitmap::from_fn(CELL_ROWS, CELL_COLUMNS, |row, col| {
        rows[row][column + col]
    }))
}
