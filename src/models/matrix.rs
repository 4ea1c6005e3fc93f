//! Cost matrix model.
//!
//! A rectangular grid of non-negative real costs. Rows are workers,
//! columns are jobs. Entry `(i, j)` is the cost of giving job `j` to
//! worker `i`.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::AssignmentError;
use crate::solver::NegativeCostPolicy;
use crate::validation::{validate_costs, validate_matrix};

/// A dense, row-major cost matrix.
///
/// Always at least 1x1 with uniform row length and finite entries.
/// Serializes as nested arrays. Deserialization checks shape and
/// finiteness but not sign; the sign policy is applied by
/// [`HungarianSolver::from_matrix`](crate::solver::HungarianSolver::from_matrix).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct CostMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl CostMatrix {
    /// Builds a matrix from rows, rejecting negative entries.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, AssignmentError> {
        Self::from_rows_with_policy(rows, NegativeCostPolicy::Reject)
    }

    /// Builds a matrix from rows under the given negative-cost policy.
    ///
    /// The policy only affects validation; entries are stored as given.
    pub fn from_rows_with_policy(
        rows: &[Vec<f64>],
        policy: NegativeCostPolicy,
    ) -> Result<Self, AssignmentError> {
        if let Err(mut errors) = validate_costs(rows, policy) {
            return Err(errors.swap_remove(0));
        }
        let cols = rows[0].len();
        let data = rows.iter().flat_map(|r| r.iter().copied()).collect();
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// A `rows` x `cols` matrix filled with `value`.
    ///
    /// Callers inside the crate guarantee non-zero dimensions.
    pub(crate) fn filled(rows: usize, cols: usize, value: f64) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    /// A random matrix with uniform costs in `[0, max_cost)`.
    ///
    /// Dimensions of zero are raised to one. The generated cells go through
    /// the same value checks as [`CostMatrix::from_rows`], so a NaN, infinite
    /// or negative `max_cost` is an error.
    pub fn random<R: Rng>(
        rows: usize,
        cols: usize,
        max_cost: f64,
        rng: &mut R,
    ) -> Result<Self, AssignmentError> {
        let rows = rows.max(1);
        let cols = cols.max(1);
        let data = (0..rows * cols)
            .map(|_| rng.random::<f64>() * max_cost)
            .collect();
        let matrix = Self { rows, cols, data };
        if let Err(mut errors) = validate_matrix(&matrix, NegativeCostPolicy::Reject) {
            return Err(errors.swap_remove(0));
        }
        Ok(matrix)
    }

    /// Number of rows (workers).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (jobs).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether rows == cols.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Entry at `(row, col)`.
    ///
    /// # Panics
    /// If either index is out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.rows && col < self.cols, "index out of range");
        self.data[row * self.cols + col]
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    /// One row as a slice.
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Iterates over rows.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.cols)
    }

    /// Smallest entry in the matrix.
    pub fn min_value(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Copy with `offset` subtracted from every entry.
    pub(crate) fn shifted(&self, offset: f64) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|v| v - offset).collect(),
        }
    }

    /// Converts back to nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.iter_rows().map(|r| r.to_vec()).collect()
    }
}

impl TryFrom<Vec<Vec<f64>>> for CostMatrix {
    type Error = AssignmentError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows_with_policy(&rows, NegativeCostPolicy::Offset)
    }
}

impl From<CostMatrix> for Vec<Vec<f64>> {
    fn from(matrix: CostMatrix) -> Self {
        matrix.to_rows()
    }
}
