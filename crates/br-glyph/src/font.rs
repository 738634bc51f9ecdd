use br_core::bitmap::Bitmap;
use br_core::codec::{ALPHABET_LEN, CELL_COLUMNS, CELL_ROWS, DotPattern, alphabet};
use br_core::config::FontConfig;
use br_core::traits::{Encoder, Font};

/// Fill symbol of the padding area outside the 3×2 dot region.
const PADDING: char = ' ';

/// Police Braille monospace, tous les bitmaps calculés à la construction.
///
/// # Example
/// ```
/// use br_core::{BrailleEncoder, FontConfig, Font};
/// use br_glyph::font::BrailleFont;
///
/// let font = BrailleFont::new(&FontConfig::default(), &BrailleEncoder);
/// assert_eq!(font.bitmap('a').row_string(0), "o.");
/// assert_eq!(font.bitmap('!').row_string(0), "..");
/// ```
#[derive(Clone, Debug)]
pub struct BrailleFont {
    height: usize,
    width: usize,
    dot_symbol: char,
    /// Bitmaps 'a'..='z', in alphabet order.
    letters: Vec<Bitmap>,
    /// Bitmap for every non-letter (space symbols only).
    whitespace: Bitmap,
}

impl BrailleFont {
    /// Build the font. Height below 3 and width below 2 are clamped with a
    /// warning, see [`FontConfig::clamped`].
    #[must_use]
    pub fn new(config: &FontConfig, encoder: &impl Encoder) -> Self {
        let FontConfig {
            height,
            width,
            dot_symbol,
            space_symbol,
        } = config.clone().clamped();

        let letters: Vec<Bitmap> = alphabet()
            .map(|letter| {
                rasterize(encoder.to_binary(letter), height, width, dot_symbol, space_symbol)
            })
            .collect();
        debug_assert_eq!(letters.len(), ALPHABET_LEN);

        let whitespace = rasterize(DotPattern::BLANK, height, width, dot_symbol, space_symbol);

        log::debug!("Police {height}×{width} construite ('{dot_symbol}' / '{space_symbol}')");

        Self {
            height,
            width,
            dot_symbol,
            letters,
            whitespace,
        }
    }

    /// Symbol used for raised dots.
    #[must_use]
    pub fn dot_symbol(&self) -> char {
        self.dot_symbol
    }

    /// The shared whitespace bitmap.
    #[must_use]
    pub fn whitespace(&self) -> &Bitmap {
        &self.whitespace
    }
}

impl Font for BrailleFont {
    fn bitmap(&self, character: char) -> &Bitmap {
        if character.is_ascii_lowercase() {
            &self.letters[(character as u8 - b'a') as usize]
        } else {
            &self.whitespace
        }
    }

    fn height(&self) -> usize {
        self.height
    }

    fn width(&self) -> usize {
        self.width
    }
}

/// Expand a pattern into a `height`×`width` bitmap.
///
/// Bit `col * 3 + row` of the pattern lands on (`row`, `col`): the low bit
/// on (row 0, col 0), then down the first column and down the second one.
/// Padding cells take no bit and hold a literal space.
#[must_use]
pub fn rasterize(
    pattern: DotPattern,
    height: usize,
    width: usize,
    dot_symbol: char,
    space_symbol: char,
) -> Bitmap {
    Bitmap::from_fn(height, width, |row, col| {
        if row >= CELL_ROWS || col >= CELL_COLUMNS {
            PADDING
        } else if pattern.is_raised(row, col) {
            dot_symbol
        } else {
            space_symbol
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use br_core::BrailleEncoder;

    fn font(height: usize, width: usize) -> BrailleFont {
        let config = FontConfig {
            height,
            width,
            dot_symbol: 'o',
            space_symbol: '.',
        };
        BrailleFont::new(&config, &BrailleEncoder)
    }

    #[test]
    fn letter_a_sets_top_left_only() {
        let font = font(3, 2);
        assert_eq!(*font.bitmap('a'), Bitmap::from_rows(&["o.", "..", ".."]));
    }

    #[test]
    fn letter_w_uses_both_columns() {
        // w = dots 2, 4, 5, 6
        let font = font(3, 2);
        assert_eq!(*font.bitmap('w'), Bitmap::from_rows(&[".o", "oo", ".o"]));
    }

    #[test]
    fn non_letters_share_the_whitespace_bitmap() {
        let font = font(3, 2);
        for c in [' ', 'A', '7', '?'] {
            assert!(std::ptr::eq(font.bitmap(c), font.whitespace()));
        }
        assert_eq!(*font.whitespace(), Bitmap::from_rows(&["..", "..", ".."]));
    }

    #[test]
    fn dot_symbol_survives_clamping() {
        let config = FontConfig {
            height: 0,
            width: 0,
            dot_symbol: '#',
            space_symbol: '_',
        };
        let font = BrailleFont::new(&config, &BrailleEncoder);
        assert_eq!(font.dot_symbol(), '#');
        assert_eq!(font.bitmap('a').row_string(0), "#_");
    }

    #[test]
    fn height_clamp_keeps_width() {
        let font = font(1, 2);
        assert_eq!(font.height(), 3);
        assert_eq!(font.width(), 2);
        assert_eq!(font.bitmap('l').height(), 3);
    }

    #[test]
    fn width_clamp_keeps_height() {
        let font = font(4, 0);
        assert_eq!(font.width(), 2);
        assert_eq!(font.height(), 4);
    }

    #[test]
    fn padding_is_literal_space() {
        let font = font(4, 3);
        let r = font.bitmap('r');
        // r = dots 1, 2, 3, 5
        assert_eq!(r.row_string(0), "o. ");
        assert_eq!(r.row_string(1), "oo ");
        assert_eq!(r.row_string(2), "o. ");
        assert_eq!(r.row_string(3), "   ");
        assert_eq!(font.whitespace().row_string(3), "   ");
    }

    #[test]
    fn taller_fonts_keep_the_dot_region_intact() {
        let small = font(3, 2);
        let tall = font(5, 2);
        for letter in 'a'..='z' {
            for row in 0..3 {
                assert_eq!(
                    small.bitmap(letter).row(row),
                    tall.bitmap(letter).row(row),
                    "{letter} row {row}"
                );
            }
        }
    }

    #[test]
    fn all_bitmaps_are_monospaced() {
        let font = font(4, 3);
        for letter in 'a'..='z' {
            let b = font.bitmap(letter);
            assert_eq!((b.height(), b.width()), (4, 3));
        }
    }
}
