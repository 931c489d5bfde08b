//! Dot numbering and the dot-to-bit order.
//!
//! The 8-dot cell numbers its dots column-wise for the first three rows and
//! then adds dots 7 and 8 on a fourth row. Dot `n` is bit `n - 1` of the
//! offset from U+2800:
//!
//! ```text
//! Dot Pattern:    Bit Mapping:
//! ┌───┬───┐       ┌───┬───┐
//! │ 1 │ 4 │       │ 0 │ 3 │
//! │ 2 │ 5 │       │ 1 │ 4 │
//! │ 3 │ 6 │       │ 2 │ 5 │
//! │ 7 │ 8 │       │ 6 │ 7 │
//! └───┴───┘       └───┴───┘
//! ```
//!
//! This order is not row-major. It is the order used by the Unicode Braille
//! Patterns block and must be reproduced exactly.

use crate::constants::DOTS;
use core::fmt;

/// One of the eight dot positions of a Braille cell.
///
/// # Example
///
/// ```
/// use braille::Dot;
///
/// assert_eq!(Dot::D1.bit(), 0);
/// assert_eq!(Dot::D4.position(), (0, 1));
/// assert_eq!(Dot::D7.position(), (3, 0));
/// assert_eq!(Dot::from_number(8), Some(Dot::D8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Dot {
    /// Dot 1, row 0 left.
    D1 = 1,
    /// Dot 2, row 1 left.
    D2 = 2,
    /// Dot 3, row 2 left.
    D3 = 3,
    /// Dot 4, row 0 right.
    D4 = 4,
    /// Dot 5, row 1 right.
    D5 = 5,
    /// Dot 6, row 2 right.
    D6 = 6,
    /// Dot 7, row 3 left.
    D7 = 7,
    /// Dot 8, row 3 right.
    D8 = 8,
}

/// All dots in bit order (bit 0 first).
pub const BIT_ORDER: [Dot; DOTS] = [
    Dot::D1,
    Dot::D2,
    Dot::D3,
    Dot::D4,
    Dot::D5,
    Dot::D6,
    Dot::D7,
    Dot::D8,
];

/// `(row, column)` of each bit, indexed by bit.
pub const BIT_POSITIONS: [(usize, usize); DOTS] = [
    (0, 0), // dot 1
    (1, 0), // dot 2
    (2, 0), // dot 3
    (0, 1), // dot 4
    (1, 1), // dot 5
    (2, 1), // dot 6
    (3, 0), // dot 7
    (3, 1), // dot 8
];

impl Dot {
    /// Returns the dot number (1-8).
    #[inline]
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Returns the bit index (0-7) of this dot in the codepoint offset.
    #[inline]
    #[must_use]
    pub const fn bit(self) -> u8 {
        self as u8 - 1
    }

    /// Returns the single-bit mask of this dot.
    ///
    /// # Example
    ///
    /// ```
    /// use braille::Dot;
    ///
    /// assert_eq!(Dot::D1.mask(), 0b0000_0001);
    /// assert_eq!(Dot::D8.mask(), 0b1000_0000);
    /// ```
    #[inline]
    #[must_use]
    pub const fn mask(self) -> u8 {
        1 << self.bit()
    }

    /// Returns `(row, column)` of this dot in the 4x2 matrix.
    #[inline]
    #[must_use]
    pub const fn position(self) -> (usize, usize) {
        BIT_POSITIONS[self.bit() as usize]
    }

    /// Looks up a dot by its number.
    ///
    /// Returns `None` outside 1-8.
    #[must_use]
    pub const fn from_number(n: u8) -> Option<Self> {
        match n {
            1..=8 => Some(BIT_ORDER[(n - 1) as usize]),
            _ => None,
        }
    }

    /// Looks up the dot at `(row, column)`.
    ///
    /// Returns `None` if the position is outside the 4x2 matrix.
    ///
    /// # Example
    ///
    /// ```
    /// use braille::Dot;
    ///
    /// assert_eq!(Dot::at(1, 1), Some(Dot::D5));
    /// assert_eq!(Dot::at(3, 1), Some(Dot::D8));
    /// assert_eq!(Dot::at(4, 0), None);
    /// ```
    #[must_use]
    pub const fn at(row: usize, column: usize) -> Option<Self> {
        match (row, column) {
            (0..=2, 0) => Some(BIT_ORDER[row]),
            (0..=2, 1) => Some(BIT_ORDER[row + 3]),
            (3, 0) => Some(Self::D7),
            (3, 1) => Some(Self::D8),
            _ => None,
        }
    }

    /// Iterates over all eight dots in bit order.
    pub fn all() -> impl Iterator<Item = Self> {
        BIT_ORDER.into_iter()
    }
}

impl fmt::Display for Dot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dot {}", self.number())
    }
}
