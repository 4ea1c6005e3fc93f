//! Result extraction.
//!
//! Maps a permutation over the padded square matrix back to the caller's
//! dimensions, dropping every pair that touches a dummy row or column.

use super::engine::SquareSolution;
use super::pad::PaddedMatrix;
use crate::models::{AssignmentResult, CostMatrix};

/// Builds the public result from a square solution.
///
/// `original` supplies the costs summed into `total_cost`; it must have
/// the padded matrix's original dimensions.
pub(crate) fn extract(
    solution: &SquareSolution,
    padded: &PaddedMatrix,
    original: &CostMatrix,
) -> AssignmentResult {
    debug_assert_eq!((original.rows(), original.cols()), (padded.rows, padded.cols));

    let mut assignment = vec![None; padded.rows];
    let mut matching = vec![vec![0u8; padded.cols]; padded.rows];
    let mut total_cost = 0.0;

    for (job, &worker) in solution.worker_by_job.iter().enumerate() {
        if !padded.is_real(worker, job) {
            continue;
        }
        assignment[worker] = Some(job);
        matching[worker][job] = 1;
        total_cost += original.get(worker, job);
    }

    AssignmentResult {
        assignment,
        matching,
        total_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::pad::pad_to_square;

    fn solution(worker_by_job: Vec<usize>) -> SquareSolution {
        let n = worker_by_job.len();
        SquareSolution {
            worker_by_job,
            row_potentials: vec![0.0; n],
            col_potentials: vec![0.0; n],
        }
    }

    #[test]
    fn test_square_extraction() {
        let m = CostMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let padded = pad_to_square(&m);
        let r = extract(&solution(vec![1, 0]), &padded, &m);
        assert_eq!(r.assignment, vec![Some(1), Some(0)]);
        assert_eq!(r.matching, vec![vec![0, 1], vec![1, 0]]);
        assert_eq!(r.total_cost, 5.0);
    }

    #[test]
    fn test_dummy_rows_skipped() {
        // 1 worker, 3 jobs: rows 1 and 2 are dummies.
        let m = CostMatrix::from_rows(&[vec![7.0, 8.0, 9.0]]).unwrap();
        let padded = pad_to_square(&m);
        let r = extract(&solution(vec![2, 0, 1]), &padded, &m);
        assert_eq!(r.assignment, vec![Some(1)]);
        assert_eq!(r.matching, vec![vec![0, 1, 0]]);
        assert_eq!(r.total_cost, 8.0);
    }

    #[test]
    fn test_dummy_columns_leave_workers_unmatched() {
        // 3 workers, 1 job: columns 1 and 2 are dummies.
        let m = CostMatrix::from_rows(&[vec![4.0], vec![5.0], vec![6.0]]).unwrap();
        let padded = pad_to_square(&m);
        let r = extract(&solution(vec![1, 0, 2]), &padded, &m);
        assert_eq!(r.assignment, vec![None, Some(0), None]);
        assert_eq!(r.matching, vec![vec![0], vec![1], vec![0]]);
        assert_eq!(r.total_cost, 5.0);
    }
}
