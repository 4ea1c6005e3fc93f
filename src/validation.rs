//! Input validation for assignment problems.
//!
//! Checks a nested-array cost matrix before it is padded or reduced.
//! Detects:
//! - Empty input (no rows, or no columns)
//! - Jagged rows
//! - NaN or infinite entries
//! - Negative entries (unless the policy allows offsetting them)
//! - Cost ranges too wide for the solver's f64 arithmetic
//!
//! Shape problems are reported before value problems: a jagged matrix has no
//! well-defined cell grid to inspect.

use crate::error::{AssignmentError, ShapeIssue};
use crate::models::CostMatrix;
use crate::solver::NegativeCostPolicy;

/// Validation result.
pub type ValidationResult = Result<(), Vec<AssignmentError>>;

/// Validates a cost matrix given as rows.
///
/// Checks:
/// 1. At least one row
/// 2. At least one column
/// 3. Every row has the first row's length
/// 4. Every entry is finite
/// 5. No entry is negative, under [`NegativeCostPolicy::Reject`]
/// 6. The spread `max - min`, scaled by the padded side, is finite
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_costs(rows: &[Vec<f64>], policy: NegativeCostPolicy) -> ValidationResult {
    let mut errors = Vec::new();

    let Some(first) = rows.first() else {
        return Err(vec![AssignmentError::shape(ShapeIssue::NoRows)]);
    };
    if first.is_empty() {
        return Err(vec![AssignmentError::shape(ShapeIssue::NoColumns)]);
    }

    let expected = first.len();
    for (row, values) in rows.iter().enumerate() {
        if values.len() != expected {
            errors.push(AssignmentError::shape(ShapeIssue::JaggedRow {
                row,
                expected,
                found: values.len(),
            }));
        }
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    check_values(rows.iter().map(Vec::as_slice), rows.len().max(expected), policy)
}

/// Validates the values of an already-shaped matrix.
///
/// Runs checks 4-6 of [`validate_costs`]; shape holds by construction.
pub fn validate_matrix(matrix: &CostMatrix, policy: NegativeCostPolicy) -> ValidationResult {
    check_values(
        matrix.iter_rows(),
        matrix.rows().max(matrix.cols()),
        policy,
    )
}

/// Per-cell checks, then the range check once every cell is usable.
///
/// `size` is the side of the padded square the engine will run on.
fn check_values<'a>(
    rows: impl Iterator<Item = &'a [f64]>,
    size: usize,
    policy: NegativeCostPolicy,
) -> ValidationResult {
    let mut errors = Vec::new();
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for (row, values) in rows.enumerate() {
        for (col, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                errors.push(AssignmentError::NonFiniteCost { row, col });
                continue;
            }
            if value < 0.0 && policy == NegativeCostPolicy::Reject {
                errors.push(AssignmentError::NegativeCost { row, col, value });
            }
            min = min.min(value);
            max = max.max(value);
        }
    }

    // Potentials and slacks stay within `size` spans of the range.
    if errors.is_empty() && !((max - min) * size as f64).is_finite() {
        errors.push(AssignmentError::CostRangeOverflow { min, max });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
