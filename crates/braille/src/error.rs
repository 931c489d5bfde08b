//! Error types for cell conversions.
//!
//! Every fallible operation in the crate returns [`BrailleError`]. Errors are
//! reported at the call that detects them and a failed construction never
//! yields a value.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, BrailleError>;

/// Failure of a Braille cell conversion.
///
/// The variants group into three kinds, see [`BrailleError::kind`]:
/// - malformed shape: the matrix does not have 3 or 4 rows of 2 dots each,
///   or a dot is not 0/1;
/// - out-of-range codepoint: outside U+2800..=U+28FF;
/// - wrong input kind: input the cell constructors cannot read as a cell,
///   including codepoints and characters outside the block.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrailleError {
    /// Matrix has a row count other than 3 or 4.
    #[error("braille matrix must have 3 or 4 rows, got {rows}")]
    InvalidRowCount {
        /// Number of rows supplied.
        rows: usize,
    },

    /// A matrix row does not hold exactly two dots.
    #[error("braille matrix row {row} must have 2 columns, got {columns}")]
    InvalidRowWidth {
        /// Zero-based row index.
        row: usize,
        /// Number of columns supplied for that row.
        columns: usize,
    },

    /// A dot value is neither 0 nor 1.
    #[error("dot at row {row}, column {column} must be 0 or 1, got {value}")]
    InvalidDot {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        column: usize,
        /// The rejected value.
        value: i128,
    },

    /// Codepoint lies outside the Braille Patterns block.
    #[error("U+{0:04X} is not a braille codepoint (expected U+2800..=U+28FF)")]
    InvalidCodepoint(u32),

    /// A cell was requested from a codepoint or character outside the
    /// Braille block.
    #[error("U+{0:04X} does not name a braille cell")]
    NotACell(u32),

    /// Text does not consist of exactly one character.
    #[error("expected a single braille character, got {length} characters")]
    InvalidLength {
        /// Number of characters in the text.
        length: usize,
    },

    /// Character at a given position in a cell sequence is not Braille.
    #[error(
        "invalid character '{character}' (U+{codepoint:04X}) at position {position}",
        codepoint = u32::from(*.character)
    )]
    InvalidCharacter {
        /// The rejected character.
        character: char,
        /// Character position in the text.
        position: usize,
    },
}

/// Coarse classification of a [`BrailleError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input is not a valid 3/4-row, 2-column matrix of 0/1 dots.
    MalformedShape,
    /// A supplied or derived codepoint is outside the Braille block.
    OutOfRange,
    /// Input cannot be interpreted as a cell at all.
    WrongInputKind,
}

impl BrailleError {
    /// Returns the kind of failure.
    ///
    /// # Example
    ///
    /// ```
    /// use braille::{codepoint_to_matrix, ErrorKind};
    ///
    /// let err = codepoint_to_matrix(0x2900).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::OutOfRange);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidRowCount { .. } | Self::InvalidRowWidth { .. } | Self::InvalidDot { .. } => {
                ErrorKind::MalformedShape
            }
            Self::InvalidCodepoint(_) => ErrorKind::OutOfRange,
            Self::NotACell(_) | Self::InvalidLength { .. } | Self::InvalidCharacter { .. } => {
                ErrorKind::WrongInputKind
            }
        }
    }
}
