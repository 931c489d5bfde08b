//! Conversions between dot matrices, codepoints and characters.
//!
//! All functions are pure and O(1). Matrix input goes through
//! [`DotMatrix::from_rows`], so the three-row shorthand is accepted
//! everywhere a matrix is.
//!
//! ```text
//!          codepoint
//!          ↗       ↘
//!   matrix    ⇄    character
//! ```

use crate::constants::{in_block, BRAILLE_BASE, COLUMNS, ROWS};
use crate::error::{BrailleError, Result};
use crate::matrix::{DotMatrix, DotValue};

/// Packs a normalized matrix into its codepoint.
///
/// # Errors
///
/// [`BrailleError::InvalidCodepoint`] if the packed value leaves the Braille
/// block. Packing eight bits cannot overflow the block, so this only fires
/// if the bit layout itself is broken.
pub fn encode(matrix: &DotMatrix) -> Result<u32> {
    let codepoint = BRAILLE_BASE + u32::from(matrix.to_bits());
    if in_block(codepoint) {
        Ok(codepoint)
    } else {
        Err(BrailleError::InvalidCodepoint(codepoint))
    }
}

/// Unpacks a codepoint into a normalized matrix.
///
/// # Errors
///
/// [`BrailleError::InvalidCodepoint`] unless `codepoint` is in
/// U+2800..=U+28FF.
pub fn decode(codepoint: u32) -> Result<DotMatrix> {
    let offset = offset_of(codepoint)?;
    Ok(DotMatrix::from_bits(offset))
}

/// Returns `codepoint - U+2800` for a codepoint in the Braille block.
///
/// # Errors
///
/// [`BrailleError::InvalidCodepoint`] outside the block.
pub fn offset_of(codepoint: u32) -> Result<u8> {
    if !in_block(codepoint) {
        return Err(BrailleError::InvalidCodepoint(codepoint));
    }
    u8::try_from(codepoint - BRAILLE_BASE).map_err(|_| BrailleError::InvalidCodepoint(codepoint))
}

/// Converts a dot matrix to its codepoint.
///
/// Accepts 4 rows, or 3 rows with an implicit empty fourth row.
///
/// # Errors
///
/// Any shape error from [`DotMatrix::from_rows`], or
/// [`BrailleError::InvalidCodepoint`] if packing leaves the block.
///
/// # Example
///
/// ```
/// use braille::matrix_to_codepoint;
///
/// assert_eq!(matrix_to_codepoint(&[[1, 0], [0, 0], [0, 0], [0, 0]]).unwrap(), 0x2801);
/// assert_eq!(matrix_to_codepoint(&[[0, 0], [0, 0], [0, 0], [0, 1]]).unwrap(), 0x2880);
/// assert_eq!(matrix_to_codepoint(&[[1, 0], [0, 0], [0, 0]]).unwrap(), 0x2801);
/// ```
pub fn matrix_to_codepoint<R, D>(matrix: &[R]) -> Result<u32>
where
    R: AsRef<[D]>,
    D: DotValue,
{
    encode(&DotMatrix::from_rows(matrix)?)
}

/// Converts a dot matrix to its Braille character.
///
/// # Errors
///
/// Same as [`matrix_to_codepoint`].
///
/// # Example
///
/// ```
/// use braille::matrix_to_char;
///
/// assert_eq!(matrix_to_char(&[[1, 0], [0, 0], [0, 0], [0, 0]]).unwrap(), '⠁');
/// assert_eq!(matrix_to_char(&[[true, true], [true, true], [true, true], [true, true]]).unwrap(), '⣿');
/// assert!(matrix_to_char(&[[0, 0], [0, 0]]).is_err());
/// ```
pub fn matrix_to_char<R, D>(matrix: &[R]) -> Result<char>
where
    R: AsRef<[D]>,
    D: DotValue,
{
    let codepoint = matrix_to_codepoint(matrix)?;
    char::from_u32(codepoint).ok_or(BrailleError::InvalidCodepoint(codepoint))
}

/// Converts a codepoint to a matrix of `0`/`1` dots.
///
/// # Errors
///
/// [`BrailleError::InvalidCodepoint`] unless `codepoint` is in
/// U+2800..=U+28FF.
///
/// # Example
///
/// ```
/// use braille::{codepoint_to_matrix, BrailleError};
///
/// assert_eq!(codepoint_to_matrix(0x2800).unwrap(), [[0, 0], [0, 0], [0, 0], [0, 0]]);
/// assert_eq!(codepoint_to_matrix(0x28FF).unwrap(), [[1, 1], [1, 1], [1, 1], [1, 1]]);
/// assert_eq!(codepoint_to_matrix(0x2900), Err(BrailleError::InvalidCodepoint(0x2900)));
/// ```
pub fn codepoint_to_matrix(codepoint: u32) -> Result<[[u8; COLUMNS]; ROWS]> {
    Ok(decode(codepoint)?.to_ints())
}

/// Converts a codepoint to a matrix of boolean dots.
///
/// # Errors
///
/// Same as [`codepoint_to_matrix`].
pub fn codepoint_to_bool_matrix(codepoint: u32) -> Result<[[bool; COLUMNS]; ROWS]> {
    Ok(decode(codepoint)?.to_bools())
}

/// Converts a Braille character to a matrix of `0`/`1` dots.
///
/// # Errors
///
/// [`BrailleError::InvalidCodepoint`] if `c` is not in the Braille block.
///
/// # Example
///
/// ```
/// use braille::char_to_matrix;
///
/// assert_eq!(char_to_matrix('⠑').unwrap(), [[1, 0], [0, 1], [0, 0], [0, 0]]);
/// assert!(char_to_matrix('A').is_err());
/// ```
pub fn char_to_matrix(c: char) -> Result<[[u8; COLUMNS]; ROWS]> {
    codepoint_to_matrix(u32::from(c))
}

/// Converts a Braille character to a matrix of boolean dots.
///
/// # Errors
///
/// Same as [`char_to_matrix`].
pub fn char_to_bool_matrix(c: char) -> Result<[[bool; COLUMNS]; ROWS]> {
    codepoint_to_bool_matrix(u32::from(c))
}

/// Converts text holding exactly one Braille character to a matrix.
///
/// # Errors
///
/// [`BrailleError::InvalidLength`] unless `text` is a single character, then
/// the errors of [`char_to_matrix`].
///
/// # Example
///
/// ```
/// use braille::{str_to_matrix, BrailleError};
///
/// assert_eq!(str_to_matrix("⠁").unwrap(), [[1, 0], [0, 0], [0, 0], [0, 0]]);
/// assert_eq!(str_to_matrix("⠁⠁"), Err(BrailleError::InvalidLength { length: 2 }));
/// ```
pub fn str_to_matrix(text: &str) -> Result<[[u8; COLUMNS]; ROWS]> {
    char_to_matrix(single_char(text)?)
}

/// Extracts the only character of `text`.
///
/// # Errors
///
/// [`BrailleError::InvalidLength`] if `text` is empty or holds more than one
/// character.
pub fn single_char(text: &str) -> Result<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(BrailleError::InvalidLength {
            length: text.chars().count(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BRAILLE_MAX;
    use crate::error::ErrorKind;

    #[test]
    fn test_worked_examples() {
        assert_eq!(
            matrix_to_codepoint(&[[1, 0], [0, 0], [0, 0], [0, 0]]).unwrap(),
            0x2801
        );
        assert_eq!(
            matrix_to_codepoint(&[[0, 0], [0, 0], [0, 0], [0, 1]]).unwrap(),
            0x2880
        );
    }

    #[test]
    fn test_each_dot_alone() {
        // dot n alone is bit n-1
        let cases: [([[u8; 2]; 4], u32); 8] = [
            ([[1, 0], [0, 0], [0, 0], [0, 0]], 0x2801),
            ([[0, 0], [1, 0], [0, 0], [0, 0]], 0x2802),
            ([[0, 0], [0, 0], [1, 0], [0, 0]], 0x2804),
            ([[0, 1], [0, 0], [0, 0], [0, 0]], 0x2808),
            ([[0, 0], [0, 1], [0, 0], [0, 0]], 0x2810),
            ([[0, 0], [0, 0], [0, 1], [0, 0]], 0x2820),
            ([[0, 0], [0, 0], [0, 0], [1, 0]], 0x2840),
            ([[0, 0], [0, 0], [0, 0], [0, 1]], 0x2880),
        ];
        for (matrix, codepoint) in cases {
            assert_eq!(matrix_to_codepoint(&matrix).unwrap(), codepoint);
            assert_eq!(codepoint_to_matrix(codepoint).unwrap(), matrix);
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(codepoint_to_matrix(0x2800).unwrap(), [[0, 0]; 4]);
        assert_eq!(codepoint_to_matrix(0x28FF).unwrap(), [[1, 1]; 4]);
        assert_eq!(codepoint_to_bool_matrix(0x2800).unwrap(), [[false; 2]; 4]);
        assert_eq!(codepoint_to_bool_matrix(0x28FF).unwrap(), [[true; 2]; 4]);
    }

    #[test]
    fn test_out_of_range() {
        for cp in [0x27FF, 0x2900, 0, 0x41, BRAILLE_BASE - 1, BRAILLE_MAX + 1] {
            let err = codepoint_to_matrix(cp).unwrap_err();
            assert_eq!(err, BrailleError::InvalidCodepoint(cp));
            assert_eq!(err.kind(), ErrorKind::OutOfRange);
        }
        assert!(char_to_matrix('A').is_err());
        assert!(char_to_bool_matrix('\u{27FF}').is_err());
    }

    #[test]
    fn test_malformed_shape() {
        let two = [[0u8, 0]; 2];
        let five = [[0u8, 0]; 5];
        assert_eq!(
            matrix_to_char(&two).unwrap_err().kind(),
            ErrorKind::MalformedShape
        );
        assert_eq!(
            matrix_to_char(&five).unwrap_err().kind(),
            ErrorKind::MalformedShape
        );
    }

    #[test]
    fn test_matrix_to_char() {
        assert_eq!(
            matrix_to_char(&[[0, 0], [0, 0], [0, 0], [0, 0]]).unwrap(),
            '\u{2800}'
        );
        assert_eq!(
            matrix_to_char(&[[1, 0], [0, 1], [0, 0], [0, 0]]).unwrap(),
            '⠑'
        );
    }

    #[test]
    fn test_single_char() {
        assert_eq!(single_char("⠁"), Ok('⠁'));
        assert_eq!(single_char(""), Err(BrailleError::InvalidLength { length: 0 }));
        assert_eq!(
            single_char("⠁⠃⠉"),
            Err(BrailleError::InvalidLength { length: 3 })
        );
    }

    #[test]
    fn test_str_to_matrix() {
        assert_eq!(
            str_to_matrix("\u{2880}").unwrap(),
            [[0, 0], [0, 0], [0, 0], [0, 1]]
        );
        assert_eq!(
            str_to_matrix("A"),
            Err(BrailleError::InvalidCodepoint(0x41))
        );
        assert_eq!(
            str_to_matrix("").unwrap_err().kind(),
            ErrorKind::WrongInputKind
        );
    }

    #[test]
    fn test_offset_of() {
        assert_eq!(offset_of(0x2800), Ok(0));
        assert_eq!(offset_of(0x28FF), Ok(255));
        assert!(offset_of(0x2900).is_err());
    }

    #[test]
    fn test_encode_decode_inverse() {
        for cp in BRAILLE_BASE..=BRAILLE_MAX {
            assert_eq!(encode(&decode(cp).unwrap()), Ok(cp));
        }
    }
}
