//! Assignment domain models.
//!
//! Provides the data types that cross the solver boundary: the cost
//! matrix handed in, and the assignment handed back.
//!
//! # Domain Mappings
//!
//! | u-assign | Tracking | Staffing | Logistics |
//! |----------|----------|----------|-----------|
//! | Worker (row) | Track | Employee | Vehicle |
//! | Job (column) | Detection | Shift | Delivery |
//! | Cost | Distance | Preference penalty | Travel time |

mod matrix;
mod solution;

pub use matrix::CostMatrix;
pub use solution::AssignmentResult;
