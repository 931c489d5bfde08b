//! Constants of the 8-dot Braille cell and its Unicode block.
//!
//! The cell is a 4-row by 2-column raster, so every cell carries exactly
//! eight dots and the Braille Patterns block holds one codepoint for each of
//! the 2^8 dot combinations.

/// Unicode Braille base codepoint (U+2800).
///
/// The Braille Patterns block begins at this codepoint.
/// The blank cell (no raised dots) is U+2800 (BRAILLE PATTERN BLANK).
pub const BRAILLE_BASE: u32 = 0x2800;

/// Unicode Braille maximum codepoint (U+28FF), inclusive.
///
/// All eight dots raised maps to U+28FF (BRAILLE PATTERN DOTS-12345678).
pub const BRAILLE_MAX: u32 = 0x28FF;

/// Number of dots in a cell.
pub const DOTS: usize = 8;

/// Number of rows in a full dot matrix.
pub const ROWS: usize = 4;

/// Number of rows accepted by the six-dot shorthand.
///
/// The missing fourth row (dots 7 and 8) is read as all-zero.
pub const SHORTHAND_ROWS: usize = 3;

/// Number of columns in every row.
pub const COLUMNS: usize = 2;

/// Number of distinct cells (2^DOTS = 256).
pub const CELL_CARDINALITY: usize = 1 << DOTS;

/// Returns `true` if `codepoint` lies in the Braille Patterns block.
///
/// # Example
///
/// ```
/// use braille::constants::in_block;
///
/// assert!(in_block(0x2800));
/// assert!(in_block(0x28FF));
/// assert!(!in_block(0x27FF));
/// assert!(!in_block(0x2900));
/// ```
#[inline]
#[must_use]
pub const fn in_block(codepoint: u32) -> bool {
    codepoint >= BRAILLE_BASE && codepoint <= BRAILLE_MAX
}
