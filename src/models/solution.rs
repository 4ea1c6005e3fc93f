//! Assignment (solution) model.
//!
//! The outcome of a solve, expressed in the caller's original
//! (unpadded, unreduced) indices and costs.

use serde::{Deserialize, Serialize};

/// A solved assignment.
///
/// When there are more workers than jobs, the surplus workers stay
/// unmatched (`None`). Otherwise every worker holds exactly one job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentResult {
    /// Job per worker (length = original row count).
    pub assignment: Vec<Option<usize>>,
    /// 0/1 matching matrix of original dimensions.
    pub matching: Vec<Vec<u8>>,
    /// Sum of original costs over matched cells.
    pub total_cost: f64,
}

impl AssignmentResult {
    /// Job assigned to `worker`, if any.
    pub fn job_for(&self, worker: usize) -> Option<usize> {
        self.assignment.get(worker).copied().flatten()
    }

    /// Worker holding `job`, if any.
    pub fn worker_for(&self, job: usize) -> Option<usize> {
        self.assignment.iter().position(|&j| j == Some(job))
    }

    /// Matched `(worker, job)` pairs in worker order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.assignment
            .iter()
            .enumerate()
            .filter_map(|(worker, job)| job.map(|j| (worker, j)))
    }

    /// Number of matched workers.
    pub fn matched_count(&self) -> usize {
        self.assignment.iter().filter(|j| j.is_some()).count()
    }

    /// Whether every worker is matched.
    pub fn is_complete(&self) -> bool {
        self.assignment.iter().all(Option::is_some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AssignmentResult {
        // 3 workers, 2 jobs: worker 1 left over
        AssignmentResult {
            assignment: vec![Some(1), None, Some(0)],
            matching: vec![vec![0, 1], vec![0, 0], vec![1, 0]],
            total_cost: 7.0,
        }
    }

    #[test]
    fn test_queries() {
        let r = sample();
        assert_eq!(r.job_for(0), Some(1));
        assert_eq!(r.job_for(1), None);
        assert_eq!(r.job_for(9), None);
        assert_eq!(r.worker_for(0), Some(2));
        assert_eq!(r.worker_for(5), None);
    }

    #[test]
    fn test_pairs_and_counts() {
        let r = sample();
        assert_eq!(r.pairs().collect::<Vec<_>>(), vec![(0, 1), (2, 0)]);
        assert_eq!(r.matched_count(), 2);
        assert!(!r.is_complete());
    }

    #[test]
    fn test_json_shape() {
        let r = sample();
        let value = serde_json::to_value(&r).unwrap();
        assert_eq!(value["assignment"], serde_json::json!([1, null, 0]));
        assert_eq!(value["matching"][2], serde_json::json!([1, 0]));
        let back: AssignmentResult = serde_json::from_value(value).unwrap();
        assert_eq!(back, r);
    }
}
