//! 8-dot Braille cell codec.
//!
//! Converts between the three forms of a single Braille cell:
//!
//! - a codepoint in the Unicode Braille Patterns block (U+2800-U+28FF),
//! - the character at that codepoint,
//! - a 4-row by 2-column dot matrix.
//!
//! ```text
//! row 0: (dot 1, dot 4)
//! row 1: (dot 2, dot 5)
//! row 2: (dot 3, dot 6)
//! row 3: (dot 7, dot 8)
//! ```
//!
//! Dot `n` is bit `n - 1` of the offset from U+2800, so every one of the 256
//! dot combinations has exactly one codepoint.
//!
//! | Offset | Codepoint | Cell | Raised dots |
//! |--------|-----------|------|-------------|
//! | 0 | U+2800 | ⠀ | none |
//! | 1 | U+2801 | ⠁ | 1 |
//! | 17 | U+2811 | ⠑ | 1, 5 |
//! | 128 | U+2880 | ⢀ | 8 |
//! | 255 | U+28FF | ⣿ | 1-8 |
//!
//! # Example: Free Functions
//!
//! ```
//! use braille::{codepoint_to_matrix, matrix_to_char, matrix_to_codepoint};
//!
//! assert_eq!(matrix_to_codepoint(&[[1, 0], [0, 0], [0, 0], [0, 0]]).unwrap(), 0x2801);
//! assert_eq!(matrix_to_char(&[[1, 0], [0, 1], [0, 0]]).unwrap(), '⠑');
//! assert_eq!(codepoint_to_matrix(0x2880).unwrap(), [[0, 0], [0, 0], [0, 0], [0, 1]]);
//! ```
//!
//! # Example: Cell Value
//!
//! ```
//! use braille::{BrailleCell, Dot};
//!
//! let cell: BrailleCell = "⠑".parse().unwrap();
//! assert_eq!(cell.codepoint(), 0x2811);
//! assert_eq!(cell.to_ints(), [[1, 0], [0, 1], [0, 0], [0, 0]]);
//! assert!(cell.is_raised(Dot::D5));
//! assert_eq!(cell, BrailleCell::from_codepoint(0x2811).unwrap());
//! ```
//!
//! # Design Principles
//!
//! - **Pure**: no I/O, no logging, no shared state
//! - **Strict**: dots must be `0`/`1` or booleans; shapes must be 3x2 or 4x2
//! - **Immutable**: a [`BrailleCell`] is fixed at construction

// Constants of the cell and the Unicode block
pub mod constants;

// Error taxonomy
pub mod error;

// Dot numbering and bit order
pub mod dot;

// Normalized 4x2 matrix
pub mod matrix;

// Matrix/codepoint/character conversions
pub mod codec;

// The cell value type
pub mod cell;

// Strings of cells
pub mod sequence;

pub use cell::BrailleCell;
pub use codec::{
    char_to_bool_matrix, char_to_matrix, codepoint_to_bool_matrix, codepoint_to_matrix,
    matrix_to_char, matrix_to_codepoint, str_to_matrix,
};
pub use constants::{BRAILLE_BASE, BRAILLE_MAX};
pub use dot::Dot;
pub use error::{BrailleError, ErrorKind, Result};
pub use matrix::{DotMatrix, DotStyle, DotValue, StyledMatrix};
pub use sequence::{cells_to_string, parse_cells};

/// Prelude module for convenient imports.
///
/// ```
/// use braille::prelude::*;
///
/// assert_eq!(BrailleCell::from_offset(1).codepoint(), BRAILLE_BASE + 1);
/// ```
pub mod prelude {
    pub use crate::cell::BrailleCell;
    pub use crate::codec::{
        char_to_bool_matrix, char_to_matrix, codepoint_to_bool_matrix, codepoint_to_matrix,
        matrix_to_char, matrix_to_codepoint, str_to_matrix,
    };
    pub use crate::constants::{BRAILLE_BASE, BRAILLE_MAX};
    pub use crate::dot::Dot;
    pub use crate::error::{BrailleError, ErrorKind};
    pub use crate::matrix::{DotMatrix, DotStyle};
}
