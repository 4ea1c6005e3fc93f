//! Hungarian (Kuhn-Munkres) assignment solver.
//!
//! # Pipeline
//!
//! 1. **Validate** the input rows (shape, finiteness, sign).
//! 2. **Normalize** negatives by the global minimum, if the policy allows.
//! 3. **Pad** to a square with zero-cost dummy rows or columns.
//! 4. **Reduce** rows, then columns, by their minima.
//! 5. **Solve** with the primal-dual engine, one worker at a time.
//! 6. **Extract** the assignment, matching matrix and cost over real cells.
//!
//! # Usage
//!
//! ```
//! use u_assign::solver::HungarianSolver;
//!
//! let solver = HungarianSolver::new(&[
//!     vec![82.0, 83.0, 69.0, 92.0],
//!     vec![77.0, 37.0, 49.0, 92.0],
//!     vec![11.0, 69.0, 5.0, 86.0],
//!     vec![8.0, 9.0, 98.0, 23.0],
//! ])
//! .unwrap();
//! assert_eq!(solver.solve().total_cost, 140.0);
//! ```
//!
//! # Complexity
//! O(n^3) time and O(n^2) memory, n = max(rows, cols).
//!
//! # References
//!
//! - Kuhn (1955), "The Hungarian Method for the Assignment Problem"
//! - Munkres (1957), "Algorithms for the Assignment and Transportation Problems"
//! - Burkard, Dell'Amico & Martello (2012), "Assignment Problems", Ch. 4

mod config;
mod engine;
mod extract;
mod hungarian;
mod observer;
mod pad;
mod reduce;

pub use config::{NegativeCostPolicy, SolverConfig};
pub use hungarian::{solve_costs, HungarianSolver};
pub use observer::{NoopObserver, SolveObserver};
pub use pad::{pad_to_square, PaddedMatrix};
pub use reduce::{reduce, reduction_offset};
