//! Square padding for rectangular matrices.

use crate::models::CostMatrix;

/// A square matrix plus the dimensions of the real block it embeds.
#[derive(Debug, Clone, PartialEq)]
pub struct PaddedMatrix {
    /// Square matrix; cells outside the top-left `rows` x `cols` block are zero.
    pub matrix: CostMatrix,
    /// Original row count.
    pub rows: usize,
    /// Original column count.
    pub cols: usize,
}

impl PaddedMatrix {
    /// Side length of the square matrix.
    pub fn size(&self) -> usize {
        self.matrix.rows()
    }

    /// Whether `(row, col)` lies in the original block.
    pub fn is_real(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }
}

/// Embeds `matrix` in the top-left of a zero-filled square of side
/// `max(rows, cols)`.
///
/// Every complete assignment covers the dummy rows (or columns) exactly
/// once at zero cost, so padding never changes which real cells are
/// optimal.
pub fn pad_to_square(matrix: &CostMatrix) -> PaddedMatrix {
    let (rows, cols) = (matrix.rows(), matrix.cols());
    if rows == cols {
        return PaddedMatrix {
            matrix: matrix.clone(),
            rows,
            cols,
        };
    }

    let size = rows.max(cols);
    let mut square = CostMatrix::filled(size, size, 0.0);
    for (i, row) in matrix.iter_rows().enumerate() {
        for (j, &cost) in row.iter().enumerate() {
            square.set(i, j, cost);
        }
    }

    PaddedMatrix {
        matrix: square,
        rows,
        cols,
    }
}
