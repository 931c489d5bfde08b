//! The 4x2 dot matrix of a Braille cell.
//!
//! [`DotMatrix`] is the normalized form: always four rows of two dots. Caller
//! input is read through [`DotMatrix::from_rows`], which validates the shape,
//! accepts the three-row six-dot shorthand, and never touches the caller's
//! data.
//!
//! # Dot values
//!
//! Input dots may be booleans or integers. Integers are strict: only `0` and
//! `1` are accepted, anything else is [`BrailleError::InvalidDot`]. There is no
//! truthy/falsy coercion of other values.

use crate::constants::{COLUMNS, DOTS, ROWS, SHORTHAND_ROWS};
use crate::dot::{Dot, BIT_POSITIONS};
use crate::error::{BrailleError, Result};

/// A value usable as a single dot of matrix input.
///
/// Implemented for `bool` and the primitive integer types.
pub trait DotValue: Copy {
    /// Returns the dot state, or `None` if the value is not a valid dot.
    fn to_dot(self) -> Option<bool>;

    /// Returns the value for error reporting.
    fn raw(self) -> i128;
}

impl DotValue for bool {
    #[inline]
    fn to_dot(self) -> Option<bool> {
        Some(self)
    }

    #[inline]
    fn raw(self) -> i128 {
        i128::from(self)
    }
}

macro_rules! impl_dot_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl DotValue for $t {
                #[inline]
                fn to_dot(self) -> Option<bool> {
                    match self {
                        0 => Some(false),
                        1 => Some(true),
                        _ => None,
                    }
                }

                #[inline]
                fn raw(self) -> i128 {
                    // lossless: every implementing type is at most 64 bits
                    self as i128
                }
            }
        )*
    };
}

impl_dot_value!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// How dots are presented when a matrix is handed back to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DotStyle {
    /// Dots as `0`/`1` integers.
    #[default]
    Integer,
    /// Dots as `false`/`true`.
    Boolean,
}

/// A matrix in a chosen [`DotStyle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyledMatrix {
    /// Integer rows.
    Integer([[u8; COLUMNS]; ROWS]),
    /// Boolean rows.
    Boolean([[bool; COLUMNS]; ROWS]),
}

impl StyledMatrix {
    /// Returns the rows as `0`/`1` integers regardless of style.
    #[must_use]
    pub fn to_ints(&self) -> [[u8; COLUMNS]; ROWS] {
        match self {
            Self::Integer(rows) => *rows,
            Self::Boolean(rows) => rows.map(|row| row.map(u8::from)),
        }
    }
}

/// A normalized 4-row by 2-column Braille dot matrix.
///
/// ```text
/// row 0: (dot 1, dot 4)
/// row 1: (dot 2, dot 5)
/// row 2: (dot 3, dot 6)
/// row 3: (dot 7, dot 8)
/// ```
///
/// # Example
///
/// ```
/// use braille::DotMatrix;
///
/// let m = DotMatrix::from_rows(&[[1, 0], [0, 0], [0, 0]]).unwrap();
/// assert_eq!(m.to_ints(), [[1, 0], [0, 0], [0, 0], [0, 0]]);
/// assert_eq!(m.to_bits(), 0b0000_0001);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DotMatrix([[bool; COLUMNS]; ROWS]);

impl DotMatrix {
    /// No raised dots.
    pub const BLANK: Self = Self([[false; COLUMNS]; ROWS]);

    /// All eight dots raised.
    pub const FULL: Self = Self([[true; COLUMNS]; ROWS]);

    /// Wraps four rows of boolean dots.
    #[inline]
    #[must_use]
    pub const fn new(rows: [[bool; COLUMNS]; ROWS]) -> Self {
        Self(rows)
    }

    /// Validates and normalizes caller-supplied rows.
    ///
    /// Three rows are read as the six-dot shorthand and padded with an
    /// all-zero fourth row. The input is not modified.
    ///
    /// # Errors
    ///
    /// - [`BrailleError::InvalidRowCount`] unless there are 3 or 4 rows.
    /// - [`BrailleError::InvalidRowWidth`] if a row does not have 2 dots.
    /// - [`BrailleError::InvalidDot`] if a dot is not `0`, `1` or a bool.
    ///
    /// # Example
    ///
    /// ```
    /// use braille::{BrailleError, DotMatrix};
    ///
    /// let rows = vec![vec![true, false], vec![false, true], vec![false, false]];
    /// let m = DotMatrix::from_rows(&rows).unwrap();
    /// assert_eq!(rows.len(), 3);
    /// assert_eq!(m.rows()[3], [false, false]);
    ///
    /// assert_eq!(
    ///     DotMatrix::from_rows(&[[0, 0], [0, 0]]),
    ///     Err(BrailleError::InvalidRowCount { rows: 2 })
    /// );
    /// ```
    pub fn from_rows<R, D>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[D]>,
        D: DotValue,
    {
        if rows.len() != ROWS && rows.len() != SHORTHAND_ROWS {
            return Err(BrailleError::InvalidRowCount { rows: rows.len() });
        }

        let mut dots = [[false; COLUMNS]; ROWS];
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != COLUMNS {
                return Err(BrailleError::InvalidRowWidth {
                    row: r,
                    columns: row.len(),
                });
            }
            for (c, &value) in row.iter().enumerate() {
                dots[r][c] = value.to_dot().ok_or(BrailleError::InvalidDot {
                    row: r,
                    column: c,
                    value: value.raw(),
                })?;
            }
        }
        Ok(Self(dots))
    }

    /// Unpacks an offset (codepoint minus U+2800) into a matrix.
    ///
    /// Bit `i` of `bits` becomes dot `i + 1`.
    ///
    /// # Example
    ///
    /// ```
    /// use braille::DotMatrix;
    ///
    /// assert_eq!(DotMatrix::from_bits(0x80).to_ints(), [[0, 0], [0, 0], [0, 0], [0, 1]]);
    /// ```
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        let mut dots = [[false; COLUMNS]; ROWS];
        let mut i = 0;
        while i < DOTS {
            let (row, column) = BIT_POSITIONS[i];
            dots[row][column] = bits & (1 << i) != 0;
            i += 1;
        }
        Self(dots)
    }

    /// Packs the matrix into its offset from U+2800.
    ///
    /// `value = Σ dot(i + 1) << i` for `i` in `0..8`.
    #[must_use]
    pub const fn to_bits(&self) -> u8 {
        let mut value = 0u8;
        let mut i = 0;
        while i < DOTS {
            let (row, column) = BIT_POSITIONS[i];
            if self.0[row][column] {
                value |= 1 << i;
            }
            i += 1;
        }
        value
    }

    /// Returns the rows as booleans.
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> [[bool; COLUMNS]; ROWS] {
        self.0
    }

    /// Returns the rows as `0`/`1` integers.
    #[must_use]
    pub fn to_ints(&self) -> [[u8; COLUMNS]; ROWS] {
        self.0.map(|row| row.map(u8::from))
    }

    /// Returns the rows as booleans (alias of [`DotMatrix::rows`]).
    #[inline]
    #[must_use]
    pub const fn to_bools(&self) -> [[bool; COLUMNS]; ROWS] {
        self.0
    }

    /// Returns the rows in the requested style.
    ///
    /// # Example
    ///
    /// ```
    /// use braille::{DotMatrix, DotStyle, StyledMatrix};
    ///
    /// let m = DotMatrix::from_bits(1);
    /// assert_eq!(
    ///     m.styled(DotStyle::Boolean),
    ///     StyledMatrix::Boolean([[true, false], [false, false], [false, false], [false, false]])
    /// );
    /// ```
    #[must_use]
    pub fn styled(&self, style: DotStyle) -> StyledMatrix {
        match style {
            DotStyle::Integer => StyledMatrix::Integer(self.to_ints()),
            DotStyle::Boolean => StyledMatrix::Boolean(self.to_bools()),
        }
    }

    /// Returns the dot at `(row, column)`, or `None` outside the matrix.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<bool> {
        self.0.get(row)?.get(column).copied()
    }

    /// Returns `true` if `dot` is raised.
    #[inline]
    #[must_use]
    pub const fn is_raised(&self, dot: Dot) -> bool {
        let (row, column) = dot.position();
        self.0[row][column]
    }

    /// Returns a copy with `dot` set to `raised`.
    ///
    /// # Example
    ///
    /// ```
    /// use braille::{Dot, DotMatrix};
    ///
    /// let m = DotMatrix::BLANK.with_dot(Dot::D8, true);
    /// assert_eq!(m.to_bits(), 0x80);
    /// assert_eq!(DotMatrix::BLANK.to_bits(), 0);
    /// ```
    #[must_use]
    pub const fn with_dot(self, dot: Dot, raised: bool) -> Self {
        let (row, column) = dot.position();
        let mut dots = self.0;
        dots[row][column] = raised;
        Self(dots)
    }

    /// Returns the number of raised dots.
    #[inline]
    #[must_use]
    pub const fn dot_count(&self) -> u8 {
        self.to_bits().count_ones() as u8
    }

    /// Returns `true` if the fourth row (dots 7 and 8) is empty, i.e. the
    /// cell is expressible in six-dot notation.
    #[inline]
    #[must_use]
    pub const fn is_six_dot(&self) -> bool {
        !self.0[3][0] && !self.0[3][1]
    }
}

impl From<[[bool; COLUMNS]; ROWS]> for DotMatrix {
    #[inline]
    fn from(rows: [[bool; COLUMNS]; ROWS]) -> Self {
        Self(rows)
    }
}

impl From<DotMatrix> for [[bool; COLUMNS]; ROWS] {
    #[inline]
    fn from(matrix: DotMatrix) -> Self {
        matrix.0
    }
}

impl From<DotMatrix> for [[u8; COLUMNS]; ROWS] {
    #[inline]
    fn from(matrix: DotMatrix) -> Self {
        matrix.to_ints()
    }
}

impl TryFrom<[[u8; COLUMNS]; ROWS]> for DotMatrix {
    type Error = BrailleError;

    fn try_from(rows: [[u8; COLUMNS]; ROWS]) -> Result<Self> {
        Self::from_rows(&rows)
    }
}

impl TryFrom<[[u8; COLUMNS]; SHORTHAND_ROWS]> for DotMatrix {
    type Error = BrailleError;

    fn try_from(rows: [[u8; COLUMNS]; SHORTHAND_ROWS]) -> Result<Self> {
        Self::from_rows(&rows)
    }
}
