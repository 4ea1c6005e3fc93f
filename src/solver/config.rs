//! Solver configuration.

use serde::{Deserialize, Serialize};

/// How negative entries in the input are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NegativeCostPolicy {
    /// Reject the matrix with [`AssignmentError::NegativeCost`](crate::AssignmentError::NegativeCost).
    #[default]
    Reject,
    /// Subtract the global minimum from every entry before solving.
    ///
    /// Every feasible assignment shifts by the same amount, so the optimum
    /// is unchanged. Reported totals use the original costs.
    Offset,
}

/// Solver options.
///
/// # Example
///
/// ```
/// use u_assign::solver::{NegativeCostPolicy, SolverConfig};
///
/// let config = SolverConfig::default().with_negative_costs(NegativeCostPolicy::Offset);
/// assert_eq!(config.negative_costs, NegativeCostPolicy::Offset);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Negative entry handling.
    pub negative_costs: NegativeCostPolicy,
}

impl SolverConfig {
    /// Sets the negative-cost policy.
    pub fn with_negative_costs(mut self, policy: NegativeCostPolicy) -> Self {
        self.negative_costs = policy;
        self
    }
}
