//! Hungarian solver entry point.
//!
//! Ties the pipeline together: validate, normalize negatives, pad to
//! square, reduce, run the engine, extract.

use log::{debug, trace};

use super::config::SolverConfig;
use super::engine::solve_square;
use super::extract::extract;
use super::observer::{NoopObserver, SolveObserver};
use super::pad::{pad_to_square, PaddedMatrix};
use super::reduce::reduce;
use crate::error::AssignmentError;
use crate::models::{AssignmentResult, CostMatrix};
use crate::validation::validate_matrix;

/// A prepared assignment problem.
///
/// Padding and reduction happen at construction. [`solve`](Self::solve)
/// borrows the solver immutably, so repeated calls return identical
/// results.
///
/// # Example
///
/// ```
/// use u_assign::solver::HungarianSolver;
///
/// let solver = HungarianSolver::new(&[
///     vec![4.0, 1.0, 3.0],
///     vec![2.0, 0.0, 5.0],
///     vec![3.0, 2.0, 2.0],
/// ])
/// .unwrap();
///
/// let result = solver.solve();
/// assert_eq!(result.assignment, vec![Some(1), Some(0), Some(2)]);
/// assert_eq!(result.total_cost, 5.0);
/// ```
#[derive(Debug, Clone)]
pub struct HungarianSolver {
    original: CostMatrix,
    padded: PaddedMatrix,
    reduced: CostMatrix,
    config: SolverConfig,
}

impl HungarianSolver {
    /// Builds a solver from rows with the default configuration.
    pub fn new(rows: &[Vec<f64>]) -> Result<Self, AssignmentError> {
        Self::with_config(rows, SolverConfig::default())
    }

    /// Builds a solver from rows with the given configuration.
    pub fn with_config(rows: &[Vec<f64>], config: SolverConfig) -> Result<Self, AssignmentError> {
        let original = CostMatrix::from_rows_with_policy(rows, config.negative_costs)?;
        Ok(Self::prepare(original, config))
    }

    /// Builds a solver from an existing matrix.
    ///
    /// A matrix built under [`NegativeCostPolicy::Offset`](super::NegativeCostPolicy::Offset)
    /// may hold negative entries; they are rejected here unless `config`
    /// allows them too. Finiteness and cost range are re-checked as well.
    pub fn from_matrix(matrix: CostMatrix, config: SolverConfig) -> Result<Self, AssignmentError> {
        if let Err(mut errors) = validate_matrix(&matrix, config.negative_costs) {
            return Err(errors.swap_remove(0));
        }
        Ok(Self::prepare(matrix, config))
    }

    fn prepare(original: CostMatrix, config: SolverConfig) -> Self {
        let min = original.min_value();
        let padded = if min < 0.0 {
            debug!("offsetting costs by {min} to remove negative entries");
            pad_to_square(&original.shifted(min))
        } else {
            pad_to_square(&original)
        };
        let reduced = reduce(&padded.matrix);

        Self {
            original,
            padded,
            reduced,
            config,
        }
    }

    /// The caller's matrix, before padding or normalization.
    pub fn original(&self) -> &CostMatrix {
        &self.original
    }

    /// The padded, row/column-reduced matrix the engine runs on.
    pub fn reduced_matrix(&self) -> &CostMatrix {
        &self.reduced
    }

    /// Side length of the padded square matrix.
    pub fn padded_size(&self) -> usize {
        self.padded.size()
    }

    /// Configuration used at construction.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves the problem.
    pub fn solve(&self) -> AssignmentResult {
        self.solve_with(&NoopObserver)
    }

    /// Solves the problem, reporting progress to `observer`.
    pub fn solve_with<O: SolveObserver + ?Sized>(&self, observer: &O) -> AssignmentResult {
        debug!(
            "solving {}x{} assignment (padded to {n}x{n})",
            self.padded.rows,
            self.padded.cols,
            n = self.padded.size()
        );
        observer.on_reduced(&self.reduced);
        let solution = solve_square(&self.reduced, observer);
        trace!("dual objective on reduced matrix: {}", solution.dual_objective());
        let result = extract(&solution, &self.padded, &self.original);
        debug!(
            "matched {} pairs, total cost {}",
            result.matched_count(),
            result.total_cost
        );
        result
    }
}

/// Validates, builds and solves in one call with the default configuration.
///
/// # Example
///
/// ```
/// let result = u_assign::solve_costs(&[vec![25.0, 40.0, 35.0], vec![40.0, 60.0, 35.0]]).unwrap();
/// assert_eq!(result.total_cost, 60.0);
/// ```
pub fn solve_costs(rows: &[Vec<f64>]) -> Result<AssignmentResult, AssignmentError> {
    Ok(HungarianSolver::new(rows)?.solve())
}
