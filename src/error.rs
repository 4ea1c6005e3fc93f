//! Error types for assignment problems.
//!
//! All errors are precondition failures detected before solving.
//! Once a [`CostMatrix`](crate::models::CostMatrix) has been built, the
//! solver itself cannot fail.

use thiserror::Error;

/// Why a cost matrix has an unusable shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeIssue {
    /// The matrix has no rows.
    NoRows,
    /// The first row has no columns.
    NoColumns,
    /// A row's length differs from the first row's.
    JaggedRow {
        /// Offending row index.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
}

impl std::fmt::Display for ShapeIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeIssue::NoRows => write!(f, "matrix has no rows"),
            ShapeIssue::NoColumns => write!(f, "matrix has no columns"),
            ShapeIssue::JaggedRow {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} columns, expected {expected}"),
        }
    }
}

/// Errors raised while constructing an assignment problem.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssignmentError {
    /// Zero rows, zero columns, or rows of differing length.
    #[error("invalid matrix shape: {reason}")]
    InvalidMatrixShape { reason: ShapeIssue },
    /// A negative entry under [`NegativeCostPolicy::Reject`](crate::solver::NegativeCostPolicy::Reject).
    #[error("negative cost {value} at ({row}, {col}); use NegativeCostPolicy::Offset to normalize")]
    NegativeCost { row: usize, col: usize, value: f64 },
    /// A NaN or infinite entry.
    #[error("non-finite cost at ({row}, {col})")]
    NonFiniteCost { row: usize, col: usize },
    /// Finite costs whose spread overflows f64 once shifted and padded.
    #[error("cost range [{min}, {max}] is too wide to solve in f64")]
    CostRangeOverflow { min: f64, max: f64 },
}

impl AssignmentError {
    pub(crate) fn shape(reason: ShapeIssue) -> Self {
        Self::InvalidMatrixShape { reason }
    }
}
