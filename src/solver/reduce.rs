//! Row/column reduction.
//!
//! Subtracts each row's minimum from that row, then each column's minimum
//! (of the row-reduced matrix) from that column. The result is
//! non-negative and has at least one zero in every row and column.
//!
//! Reduction shifts every complete assignment by the same constant, so
//! it never changes which assignment is optimal.

use crate::models::CostMatrix;

/// Returns the row- then column-reduced copy of `matrix`.
///
/// # Complexity
/// O(rows * cols)
pub fn reduce(matrix: &CostMatrix) -> CostMatrix {
    reduce_with_offset(matrix).0
}

/// Sum of all row and column minima subtracted by [`reduce`].
///
/// For a square matrix, any complete assignment's cost on the reduced
/// matrix equals its original cost minus this offset.
pub fn reduction_offset(matrix: &CostMatrix) -> f64 {
    reduce_with_offset(matrix).1
}

fn reduce_with_offset(matrix: &CostMatrix) -> (CostMatrix, f64) {
    let mut reduced = matrix.clone();
    let mut offset = 0.0;

    for i in 0..reduced.rows() {
        let min = row_min(&reduced, i);
        offset += min;
        for j in 0..reduced.cols() {
            reduced.set(i, j, reduced.get(i, j) - min);
        }
    }

    for j in 0..reduced.cols() {
        let min = (0..reduced.rows())
            .map(|i| reduced.get(i, j))
            .fold(f64::INFINITY, f64::min);
        offset += min;
        for i in 0..reduced.rows() {
            reduced.set(i, j, reduced.get(i, j) - min);
        }
    }

    (reduced, offset)
}

fn row_min(matrix: &CostMatrix, row: usize) -> f64 {
    matrix.row(row).iter().copied().fold(f64::INFINITY, f64::min)
}
