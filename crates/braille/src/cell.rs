//! The Braille cell value type.

use crate::codec::{self, single_char};
use crate::constants::{BRAILLE_BASE, COLUMNS, ROWS, SHORTHAND_ROWS};
use crate::dot::Dot;
use crate::error::{BrailleError, Result};
use crate::matrix::{DotMatrix, DotValue};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

/// A validated 8-dot Braille cell.
///
/// Holds the codepoint, the character and the dot matrix of one cell. All
/// three are computed once at construction and never change, so they always
/// agree. Every constructor either returns a complete cell or an error.
///
/// Equality, ordering and hashing use the codepoint.
///
/// # Example
///
/// ```
/// use braille::BrailleCell;
///
/// let a = BrailleCell::from_codepoint(0x2801).unwrap();
/// let b = BrailleCell::from_char('⠁').unwrap();
/// let c = BrailleCell::from_matrix(&[[1, 0], [0, 0], [0, 0], [0, 0]]).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(b, c);
/// assert_eq!(a.to_string(), "⠁");
/// ```
#[derive(Clone, Copy)]
pub struct BrailleCell {
    codepoint: u32,
    character: char,
    matrix: DotMatrix,
}

impl BrailleCell {
    /// The blank cell (U+2800, no dots).
    pub const BLANK: Self = Self::from_offset(0);

    /// The full cell (U+28FF, all eight dots).
    pub const FULL: Self = Self::from_offset(255);

    /// Creates a cell from its offset in the Braille block (0-255).
    ///
    /// Total: every offset names a cell.
    ///
    /// # Example
    ///
    /// ```
    /// use braille::BrailleCell;
    ///
    /// assert_eq!(BrailleCell::from_offset(17).character(), '⠑');
    /// ```
    #[must_use]
    pub const fn from_offset(offset: u8) -> Self {
        let codepoint = BRAILLE_BASE + offset as u32;
        // U+2800 + 0..=255 is always a scalar value; the fallback is unreachable.
        let character = match char::from_u32(codepoint) {
            Some(c) => c,
            None => '\u{2800}',
        };
        Self {
            codepoint,
            character,
            matrix: DotMatrix::from_bits(offset),
        }
    }

    /// Creates a cell from a codepoint.
    ///
    /// # Errors
    ///
    /// [`BrailleError::NotACell`] unless `codepoint` is in U+2800..=U+28FF.
    /// The free function [`crate::codepoint_to_matrix`] reports the same
    /// input as [`BrailleError::InvalidCodepoint`].
    ///
    /// # Example
    ///
    /// ```
    /// use braille::{BrailleCell, ErrorKind};
    ///
    /// assert!(BrailleCell::from_codepoint(0x2811).is_ok());
    /// let err = BrailleCell::from_codepoint(0x41).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::WrongInputKind);
    /// ```
    pub fn from_codepoint(codepoint: u32) -> Result<Self> {
        let offset = codec::offset_of(codepoint).map_err(|_| BrailleError::NotACell(codepoint))?;
        Ok(Self::from_offset(offset))
    }

    /// Creates a cell from a character.
    ///
    /// # Errors
    ///
    /// [`BrailleError::NotACell`] if `c` is not a Braille character.
    pub fn from_char(c: char) -> Result<Self> {
        Self::from_codepoint(u32::from(c))
    }

    /// Creates a cell from text holding exactly one Braille character.
    ///
    /// # Errors
    ///
    /// [`BrailleError::InvalidLength`] unless `text` is one character, or
    /// [`BrailleError::NotACell`] if that character is not Braille.
    ///
    /// # Example
    ///
    /// ```
    /// use braille::BrailleCell;
    ///
    /// assert!(BrailleCell::from_text("⠑").is_ok());
    /// assert!(BrailleCell::from_text("⠑⠑").is_err());
    /// assert!(BrailleCell::from_text("").is_err());
    /// ```
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_char(single_char(text)?)
    }

    /// Creates a cell from a 4-row matrix or 3-row shorthand.
    ///
    /// # Errors
    ///
    /// The shape errors of [`DotMatrix::from_rows`].
    pub fn from_matrix<R, D>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[D]>,
        D: DotValue,
    {
        Ok(Self::from_dot_matrix(DotMatrix::from_rows(rows)?))
    }

    /// Creates a cell from a normalized matrix.
    #[must_use]
    pub const fn from_dot_matrix(matrix: DotMatrix) -> Self {
        Self::from_offset(matrix.to_bits())
    }

    /// Returns the Unicode codepoint (U+2800-U+28FF).
    #[inline]
    #[must_use]
    pub const fn codepoint(&self) -> u32 {
        self.codepoint
    }

    /// Returns the Braille character.
    #[inline]
    #[must_use]
    pub const fn character(&self) -> char {
        self.character
    }

    /// Returns the dot matrix.
    #[inline]
    #[must_use]
    pub const fn matrix(&self) -> DotMatrix {
        self.matrix
    }

    /// Returns the matrix as `0`/`1` integers.
    #[must_use]
    pub fn to_ints(&self) -> [[u8; COLUMNS]; ROWS] {
        self.matrix.to_ints()
    }

    /// Returns the matrix as booleans.
    #[must_use]
    pub const fn to_bools(&self) -> [[bool; COLUMNS]; ROWS] {
        self.matrix.to_bools()
    }

    /// Returns the offset from U+2800 (0-255).
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> u8 {
        self.matrix.to_bits()
    }

    /// Returns the number of raised dots.
    ///
    /// # Example
    ///
    /// ```
    /// use braille::BrailleCell;
    ///
    /// assert_eq!(BrailleCell::BLANK.dot_count(), 0);
    /// assert_eq!(BrailleCell::from_char('⠑').unwrap().dot_count(), 2);
    /// assert_eq!(BrailleCell::FULL.dot_count(), 8);
    /// ```
    #[inline]
    #[must_use]
    pub const fn dot_count(&self) -> u8 {
        self.matrix.dot_count()
    }

    /// Returns `true` if `dot` is raised.
    #[inline]
    #[must_use]
    pub const fn is_raised(&self, dot: Dot) -> bool {
        self.matrix.is_raised(dot)
    }

    /// Iterates over the raised dots in dot-number order.
    ///
    /// # Example
    ///
    /// ```
    /// use braille::{BrailleCell, Dot};
    ///
    /// let cell = BrailleCell::from_char('⠑').unwrap();
    /// assert_eq!(cell.raised_dots().collect::<Vec<_>>(), vec![Dot::D1, Dot::D5]);
    /// ```
    pub fn raised_dots(&self) -> impl Iterator<Item = Dot> + '_ {
        Dot::all().filter(move |&dot| self.is_raised(dot))
    }

    /// Iterates over all 256 cells in codepoint order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=u8::MAX).map(Self::from_offset)
    }

    /// Returns `true` if this cell has the given codepoint.
    ///
    /// Out-of-range codepoints compare unequal.
    #[inline]
    #[must_use]
    pub const fn eq_codepoint(&self, codepoint: u32) -> bool {
        self.codepoint == codepoint
    }

    /// Returns `true` if this cell renders as `c`.
    #[inline]
    #[must_use]
    pub const fn eq_char(&self, c: char) -> bool {
        self.character == c
    }

    /// Compares against text holding a single character.
    ///
    /// # Errors
    ///
    /// [`BrailleError::InvalidLength`] unless `text` is exactly one
    /// character.
    ///
    /// # Example
    ///
    /// ```
    /// use braille::BrailleCell;
    ///
    /// let cell = BrailleCell::from_codepoint(0x2801).unwrap();
    /// assert_eq!(cell.eq_text("⠁"), Ok(true));
    /// assert_eq!(cell.eq_text("A"), Ok(false));
    /// assert!(cell.eq_text("⠁⠁").is_err());
    /// ```
    pub fn eq_text(&self, text: &str) -> Result<bool> {
        Ok(self.eq_char(single_char(text)?))
    }

    /// Compares against a 4-row matrix or 3-row shorthand.
    ///
    /// # Errors
    ///
    /// The shape errors of [`DotMatrix::from_rows`].
    ///
    /// # Example
    ///
    /// ```
    /// use braille::BrailleCell;
    ///
    /// let cell = BrailleCell::from_codepoint(0x2801).unwrap();
    /// assert_eq!(cell.eq_matrix(&[[1, 0], [0, 0], [0, 0]]), Ok(true));
    /// assert_eq!(cell.eq_matrix(&[[0, 1], [0, 0], [0, 0], [0, 0]]), Ok(false));
    /// assert!(cell.eq_matrix(&[[1, 0]]).is_err());
    /// ```
    pub fn eq_matrix<R, D>(&self, rows: &[R]) -> Result<bool>
    where
        R: AsRef<[D]>,
        D: DotValue,
    {
        Ok(self.matrix == DotMatrix::from_rows(rows)?)
    }
}

impl Default for BrailleCell {
    fn default() -> Self {
        Self::BLANK
    }
}

impl PartialEq for BrailleCell {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.codepoint == other.codepoint
    }
}

impl Eq for BrailleCell {}

impl PartialEq<u32> for BrailleCell {
    #[inline]
    fn eq(&self, other: &u32) -> bool {
        self.eq_codepoint(*other)
    }
}

impl PartialEq<char> for BrailleCell {
    #[inline]
    fn eq(&self, other: &char) -> bool {
        self.eq_char(*other)
    }
}

impl PartialEq<DotMatrix> for BrailleCell {
    #[inline]
    fn eq(&self, other: &DotMatrix) -> bool {
        self.matrix == *other
    }
}

impl Hash for BrailleCell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.codepoint.hash(state);
    }
}

impl PartialOrd for BrailleCell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BrailleCell {
    fn cmp(&self, other: &Self) -> Ordering {
        self.codepoint.cmp(&other.codepoint)
    }
}

impl From<u8> for BrailleCell {
    #[inline]
    fn from(offset: u8) -> Self {
        Self::from_offset(offset)
    }
}

impl From<DotMatrix> for BrailleCell {
    #[inline]
    fn from(matrix: DotMatrix) -> Self {
        Self::from_dot_matrix(matrix)
    }
}

impl TryFrom<u32> for BrailleCell {
    type Error = BrailleError;

    fn try_from(codepoint: u32) -> Result<Self> {
        Self::from_codepoint(codepoint)
    }
}

impl TryFrom<char> for BrailleCell {
    type Error = BrailleError;

    fn try_from(c: char) -> Result<Self> {
        Self::from_char(c)
    }
}

impl TryFrom<&str> for BrailleCell {
    type Error = BrailleError;

    fn try_from(text: &str) -> Result<Self> {
        Self::from_text(text)
    }
}

impl TryFrom<&[[u8; COLUMNS]]> for BrailleCell {
    type Error = BrailleError;

    fn try_from(rows: &[[u8; COLUMNS]]) -> Result<Self> {
        Self::from_matrix(rows)
    }
}

impl TryFrom<[[u8; COLUMNS]; ROWS]> for BrailleCell {
    type Error = BrailleError;

    fn try_from(rows: [[u8; COLUMNS]; ROWS]) -> Result<Self> {
        Self::from_matrix(&rows)
    }
}

impl TryFrom<[[u8; COLUMNS]; SHORTHAND_ROWS]> for BrailleCell {
    type Error = BrailleError;

    fn try_from(rows: [[u8; COLUMNS]; SHORTHAND_ROWS]) -> Result<Self> {
        Self::from_matrix(&rows)
    }
}

impl FromStr for BrailleCell {
    type Err = BrailleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_text(s)
    }
}

impl From<BrailleCell> for u32 {
    #[inline]
    fn from(cell: BrailleCell) -> Self {
        cell.codepoint
    }
}

impl From<BrailleCell> for char {
    #[inline]
    fn from(cell: BrailleCell) -> Self {
        cell.character
    }
}

impl From<BrailleCell> for DotMatrix {
    #[inline]
    fn from(cell: BrailleCell) -> Self {
        cell.matrix
    }
}

impl fmt::Debug for BrailleCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BrailleCell(U+{:04X}, {})", self.codepoint, self.character)
    }
}

impl fmt::Display for BrailleCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.character)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for BrailleCell {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_char(self.character)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BrailleCell {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let c = <char as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_char(c).map_err(serde::de::Error::custom)
    }
}
