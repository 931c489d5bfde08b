//! Runs of Braille cells as plain strings.
//!
//! A Braille string is read one character per cell. No transliteration
//! happens here: a cell is a cell, whatever it may spell in a given code.

use crate::cell::BrailleCell;
use crate::error::{BrailleError, Result};

/// Parses every character of `text` as a cell.
///
/// # Errors
///
/// [`BrailleError::InvalidCharacter`] naming the first character outside the
/// Braille block and its position (in characters, not bytes).
///
/// # Example
///
/// ```
/// use braille::{parse_cells, BrailleError};
///
/// let cells = parse_cells("⠀⠁⠑⣿").unwrap();
/// assert_eq!(cells.len(), 4);
/// assert_eq!(cells[2].codepoint(), 0x2811);
///
/// assert_eq!(
///     parse_cells("⠁A⠁"),
///     Err(BrailleError::InvalidCharacter { character: 'A', position: 1 })
/// );
/// ```
pub fn parse_cells(text: &str) -> Result<Vec<BrailleCell>> {
    text.chars()
        .enumerate()
        .map(|(position, character)| {
            BrailleCell::from_char(character)
                .map_err(|_| BrailleError::InvalidCharacter { character, position })
        })
        .collect()
}

/// Renders cells back to a string.
///
/// # Example
///
/// ```
/// use braille::{cells_to_string, parse_cells};
///
/// let cells = parse_cells("⠓⠊").unwrap();
/// assert_eq!(cells_to_string(&cells), "⠓⠊");
/// ```
#[must_use]
pub fn cells_to_string(cells: &[BrailleCell]) -> String {
    cells.iter().map(BrailleCell::character).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_cells(""), Ok(Vec::new()));
    }

    #[test]
    fn test_parse_all_cells() {
        let text: String = BrailleCell::all().map(|c| c.character()).collect();
        let cells = parse_cells(&text).unwrap();
        assert_eq!(cells.len(), 256);
        for (offset, cell) in cells.iter().enumerate() {
            assert_eq!(usize::from(cell.offset()), offset);
        }
        assert_eq!(cells_to_string(&cells), text);
    }

    #[test]
    fn test_position_counts_characters() {
        // multi-byte prefix: position is a char index, not a byte index
        assert_eq!(
            parse_cells("⠁⠃ "),
            Err(BrailleError::InvalidCharacter {
                character: ' ',
                position: 2
            })
        );
    }
}
