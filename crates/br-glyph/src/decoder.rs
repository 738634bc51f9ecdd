use br_core::bitmap::Bitmap;
use br_core::codec::{CELL_COLUMNS, CELL_ROWS, DotPattern};
use br_core::error::CoreError;
use br_core::traits::{Decoder, Encoder};

use crate::tree::SymbolTree;

/// Character returned for a blank cell.
const SPACE: char = ' ';

/// Décodeur bitmap → ASCII, adossé à un [`SymbolTree`].
///
/// # Example
/// ```
/// use br_core::{Bitmap, BrailleEncoder, Decoder};
/// use br_glyph::decoder::BrailleDecoder;
///
/// let decoder = BrailleDecoder::new(&BrailleEncoder);
/// let c = Bitmap::from_rows(&["oo", "..", ".."]);
/// assert_eq!(decoder.decode_bitmap(&c, 'o'), Ok('c'));
/// ```
#[derive(Debug)]
pub struct BrailleDecoder {
    tree: SymbolTree,
}

impl BrailleDecoder {
    /// Build the decoder and its search tree from `encoder`.
    #[must_use]
    pub fn new(encoder: &impl Encoder) -> Self {
        Self {
            tree: SymbolTree::from_encoder(encoder),
        }
    }

    /// The underlying search tree.
    #[must_use]
    pub fn tree(&self) -> &SymbolTree {
        &self.tree
    }
}

impl Decoder for BrailleDecoder {
    fn decode_bitmap(&self, bitmap: &Bitmap, dot_symbol: char) -> Result<char, CoreError> {
        let pattern = pattern_of(bitmap, dot_symbol)?;
        if pattern.is_blank() {
            return Ok(SPACE);
        }
        self.tree
            .lookup(pattern)
            .ok_or(CoreError::UnmappedPattern(pattern.bits()))
    }
}

/// Rebuild the dot pattern of a 3×2 bitmap.
///
/// Inverse of the rasterization scan: columns descending, rows descending,
/// shifting left and setting the low bit on every `dot_symbol`.
///
/// # Errors
/// [`CoreError::InvalidShape`] if the bitmap is not exactly 3×2.
pub fn pattern_of(bitmap: &Bitmap, dot_symbol: char) -> Result<DotPattern, CoreError> {
    if bitmap.height() != CELL_ROWS || bitmap.width() != CELL_COLUMNS {
        return Err(CoreError::InvalidShape {
            height: bitmap.height(),
            width: bitmap.width(),
        });
    }

    let mut bits = 0u8;
    for col in (0..CELL_COLUMNS).rev() {
        for row in (0..CELL_ROWS).rev() {
            bits <<= 1;
            if bitmap.get(row, col) == Some(dot_symbol) {
                bits |= 1;
            }
        }
    }
    Ok(DotPattern::from_bits_truncate(bits))
}
