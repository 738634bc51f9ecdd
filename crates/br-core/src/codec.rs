//! Codec lettre ↔ motif de points (cellule Braille 6 points).
//!
//! Bits activés (column-major, row-minor) :
//! +---+---+
//! | 0 | 3 |
//! +---+---+
//! | 1 | 4 |
//! +---+---+
//! | 2 | 5 |
//! +---+---+

use crate::error::CoreError;
use crate::traits::Encoder;

/// Rows of the dot region of a cell.
pub const CELL_ROWS: usize = 3;

/// Columns of the dot region of a cell.
pub const CELL_COLUMNS: usize = 2;

/// Number of letters covered by the codec ('a'..='z').
pub const ALPHABET_LEN: usize = 26;

const PATTERN_MASK: u8 = 0b11_1111;

/// Lookup table indexed by `letter - 'a'`.
const BRAILLE_LUT: [u8; ALPHABET_LEN] = [
    0b000_001, 0b000_011, 0b001_001, 0b011_001, 0b010_001, // a-e
    0b001_011, 0b011_011, 0b010_011, 0b001_010, 0b011_010, // f-j
    0b000_101, 0b000_111, 0b001_101, 0b011_101, 0b010_101, // k-o
    0b001_111, 0b011_111, 0b010_111, 0b001_110, 0b011_110, // p-t
    0b100_101, 0b100_111, 0b111_010, 0b101_101, 0b111_101, 0b110_101, // u-z
];

/// Motif 6 bits d'une cellule Braille.
///
/// Bit `col * 3 + row` represents the dot at (`row`, `col`). The value 0 is
/// the blank cell and is never mapped to a letter.
///
/// # Example
/// ```
/// use br_core::codec::DotPattern;
/// let p = DotPattern::from_bits_truncate(0b001_001);
/// assert!(p.is_raised(0, 0));
/// assert!(p.is_raised(0, 1));
/// assert!(!p.is_raised(1, 0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DotPattern(u8);

impl DotPattern {
    /// The blank cell.
    pub const BLANK: Self = Self(0);

    /// Build a pattern keeping only the six low bits.
    #[inline]
    #[must_use]
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & PATTERN_MASK)
    }

    /// Raw 6-bit value.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// `true` for the blank (space) cell.
    #[inline]
    #[must_use]
    pub const fn is_blank(self) -> bool {
        self.0 == 0
    }

    /// `true` if the dot at (`row`, `col`) is raised.
    ///
    /// Positions outside the 3×2 region are never raised.
    #[inline]
    #[must_use]
    pub const fn is_raised(self, row: usize, col: usize) -> bool {
        if row >= CELL_ROWS || col >= CELL_COLUMNS {
            return false;
        }
        (self.0 >> (col * CELL_ROWS + row)) & 1 == 1
    }
}

/// Encodeur ASCII → motif Braille, adossé à une table constante.
///
/// # Example
/// ```
/// use br_core::{BrailleEncoder, Encoder};
/// let encoder = BrailleEncoder;
/// assert_eq!(encoder.to_binary('a').bits(), 0b000_001);
/// assert_eq!(encoder.to_binary('z').bits(), 0b110_101);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct BrailleEncoder;

impl Encoder for BrailleEncoder {
    /// # Panics
    /// Panics if `letter` is outside `'a'..='z'` (lookup fault on the table).
    #[inline]
    fn to_binary(&self, letter: char) -> DotPattern {
        debug_assert!(letter.is_ascii_lowercase(), "letter outside 'a'..='z': {letter:?}");
        let index = (letter as u32).wrapping_sub('a' as u32) as usize;
        DotPattern(BRAILLE_LUT[index])
    }

    fn try_to_binary(&self, letter: char) -> Result<DotPattern, CoreError> {
        if letter.is_ascii_lowercase() {
            Ok(self.to_binary(letter))
        } else {
            Err(CoreError::UnsupportedLetter(letter))
        }
    }
}

/// Iterate the alphabet in insertion order ('a' → 'z').
pub fn alphabet() -> impl Iterator<Item = char> {
    'a'..='z'
}
