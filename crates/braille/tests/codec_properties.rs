//! Property-based tests for the codec.
//!
//! Uses proptest to drive arbitrary matrices and codepoints through the
//! conversions.

use braille::{
    codepoint_to_matrix, matrix_to_codepoint, BrailleCell, BrailleError, Dot, DotMatrix,
    BRAILLE_BASE, BRAILLE_MAX,
};
use proptest::prelude::*;

fn any_matrix() -> impl Strategy<Value = [[u8; 2]; 4]> {
    prop::array::uniform4(prop::array::uniform2(0u8..=1))
}

// =============================================================================
// Packing
// =============================================================================

proptest! {
    /// Packed value always lands in the block
    #[test]
    fn prop_packing_is_total(matrix in any_matrix()) {
        let cp = matrix_to_codepoint(&matrix).unwrap();
        prop_assert!((BRAILLE_BASE..=BRAILLE_MAX).contains(&cp));
    }

    /// matrix -> codepoint -> matrix is the identity
    #[test]
    fn prop_matrix_roundtrip(matrix in any_matrix()) {
        let cp = matrix_to_codepoint(&matrix).unwrap();
        prop_assert_eq!(codepoint_to_matrix(cp).unwrap(), matrix);
    }

    /// Each raised dot contributes exactly its own bit
    #[test]
    fn prop_bits_are_independent(matrix in any_matrix()) {
        let cp = matrix_to_codepoint(&matrix).unwrap();
        let expected: u32 = Dot::all()
            .filter(|dot| {
                let (row, column) = dot.position();
                matrix[row][column] == 1
            })
            .map(|dot| u32::from(dot.mask()))
            .sum();
        prop_assert_eq!(cp - BRAILLE_BASE, expected);
    }
}

// =============================================================================
// Validation
// =============================================================================

proptest! {
    /// Anything outside the block is rejected with the offending codepoint
    #[test]
    fn prop_out_of_block_rejected(cp in any::<u32>().prop_filter("outside block", |cp| {
        !(BRAILLE_BASE..=BRAILLE_MAX).contains(cp)
    })) {
        prop_assert_eq!(codepoint_to_matrix(cp), Err(BrailleError::InvalidCodepoint(cp)));
        prop_assert_eq!(BrailleCell::from_codepoint(cp), Err(BrailleError::NotACell(cp)));
    }

    /// Only 3 or 4 rows are accepted
    #[test]
    fn prop_row_count_checked(rows in 0usize..12) {
        let matrix = vec![[0u8, 1]; rows];
        let result = DotMatrix::from_rows(&matrix);
        if rows == 3 || rows == 4 {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(result, Err(BrailleError::InvalidRowCount { rows }));
        }
    }

    /// Integer dots other than 0 and 1 are rejected
    #[test]
    fn prop_non_binary_dot_rejected(value in 2i32..1000, row in 0usize..4, column in 0usize..2) {
        let mut matrix = [[0i32; 2]; 4];
        matrix[row][column] = value;
        prop_assert_eq!(
            matrix_to_codepoint(&matrix),
            Err(BrailleError::InvalidDot { row, column, value: i128::from(value) })
        );
    }
}

// =============================================================================
// Cell value
// =============================================================================

proptest! {
    /// Equality and ordering follow the codepoint
    #[test]
    fn prop_cell_order_follows_codepoint(a in any::<u8>(), b in any::<u8>()) {
        let ca = BrailleCell::from_offset(a);
        let cb = BrailleCell::from_offset(b);
        prop_assert_eq!(ca == cb, a == b);
        prop_assert_eq!(ca.cmp(&cb), ca.codepoint().cmp(&cb.codepoint()));
    }

    /// dot_count is the number of raised dots in the matrix
    #[test]
    fn prop_dot_count(offset in any::<u8>()) {
        let cell = BrailleCell::from_offset(offset);
        let raised = cell.to_bools().iter().flatten().filter(|&&d| d).count();
        prop_assert_eq!(usize::from(cell.dot_count()), raised);
        prop_assert_eq!(cell.raised_dots().count(), raised);
    }
}
