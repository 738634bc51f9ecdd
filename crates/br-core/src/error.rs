use thiserror::Error;

/// Errors originating from the codec, decoder and reader.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    /// Character outside the supported lowercase alphabet.
    #[error("Lettre non supportée : {0:?}")]
    UnsupportedLetter(char),

    /// Bitmap whose dimensions differ from the 3×2 decode shape.
    #[error("Forme de cellule invalide : {height}×{width} (attendu 3×2)")]
    InvalidShape {
        /// Rows of the rejected bitmap.
        height: usize,
        /// Columns of the rejected bitmap.
        width: usize,
    },

    /// Non-blank dot pattern with no letter attached.
    #[error("Motif sans lettre associée : {0:#08b}")]
    UnmappedPattern(u8),

    /// Scanlines too short or too few for the requested cell.
    #[error("Scanlines malformées à la colonne {column} : {reason}")]
    MalformedScanlines {
        /// Column of the first character of the failing cell.
        column: usize,
        /// What was missing.
        reason: String,
    },
}
