use crate::bitmap::Bitmap;
use crate::codec::DotPattern;
use crate::error::CoreError;

/// Encode une lettre ASCII en motif de points.
///
/// Implémenté par : `BrailleEncoder`.
///
/// # Example
/// ```
/// use br_core::traits::Encoder;
/// use br_core::codec::DotPattern;
/// use br_core::CoreError;
///
/// struct AllDots;
/// impl Encoder for AllDots {
///     fn to_binary(&self, _letter: char) -> DotPattern { DotPattern::from_bits_truncate(63) }
///     fn try_to_binary(&self, letter: char) -> Result<DotPattern, CoreError> { Ok(self.to_binary(letter)) }
/// }
/// assert_eq!(AllDots.to_binary('x').bits(), 63);
/// ```
pub trait Encoder {
    /// Motif de la lettre. Précondition : `letter` dans `'a'..='z'`.
    fn to_binary(&self, letter: char) -> DotPattern;

    /// Variante vérifiée de [`Encoder::to_binary`].
    ///
    /// # Errors
    /// Returns [`CoreError::UnsupportedLetter`] outside the alphabet.
    fn try_to_binary(&self, letter: char) -> Result<DotPattern, CoreError>;
}

/// Ensemble monospace de bitmaps imprimables.
///
/// Implémenté par : `BrailleFont`.
pub trait Font {
    /// Bitmap of `character`; anything outside the alphabet maps to the
    /// whitespace bitmap.
    fn bitmap(&self, character: char) -> &Bitmap;

    /// Rows of every bitmap of the font.
    fn height(&self) -> usize;

    /// Columns of every bitmap of the font.
    fn width(&self) -> usize;
}

/// Décode une cellule rendue en caractère ASCII.
///
/// Implémenté par : `BrailleDecoder`.
pub trait Decoder {
    /// Decode a 3×2 bitmap, `dot_symbol` marking raised dots.
    ///
    /// A blank cell decodes to `' '`.
    ///
    /// # Errors
    /// [`CoreError::InvalidShape`] for a bitmap that is not 3×2,
    /// [`CoreError::UnmappedPattern`] for a non-blank pattern without letter.
    fn decode_bitmap(&self, bitmap: &Bitmap, dot_symbol: char) -> Result<char, CoreError>;
}
