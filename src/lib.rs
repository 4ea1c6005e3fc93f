//! Linear assignment for the U-Engine ecosystem.
//!
//! Given an n x m matrix of costs pairing workers (rows) with jobs
//! (columns), finds a one-to-one assignment covering the smaller dimension
//! at minimum total cost.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `CostMatrix`, `AssignmentResult`
//! - **`solver`**: Padding, reduction, the primal-dual engine, extraction
//! - **`validation`**: Input checks (empty, jagged, non-finite, negative)
//!
//! # Scope
//!
//! Minimization only; negate costs to maximize. Each solve owns its state,
//! so independent solves may run on separate threads.
//!
//! # References
//!
//! - Kuhn (1955), "The Hungarian Method for the Assignment Problem"
//! - Burkard, Dell'Amico & Martello (2012), "Assignment Problems"

pub mod error;
pub mod models;
pub mod solver;
pub mod validation;

#[cfg(test)]
mod test_utils;

pub use error::{AssignmentError, ShapeIssue};
pub use models::{AssignmentResult, CostMatrix};
pub use solver::{solve_costs, HungarianSolver, SolverConfig};
