//! Primal-dual assignment engine over a square matrix.
//!
//! # Algorithm
//!
//! Workers are inserted one at a time. For each new worker, an alternating
//! tree is grown from a sentinel job 0 (held by the new worker) by a
//! Dijkstra-like relaxation over reduced slacks
//! `cost(i, j) - u[i] - v[j]`. Each pass adds the unvisited job with the
//! smallest slack and moves the potentials by that slack, keeping
//! `cost(i, j) >= u[i] + v[j]` everywhere with equality along the tree.
//! The search stops on reaching an unassigned job; the path back to the
//! sentinel is then flipped, which grows the matching by one pair.
//!
//! All internal arrays are 1-based with index 0 as the sentinel.
//!
//! # Complexity
//! O(n) per pass, at most n passes per worker, n workers: O(n^3).
//!
//! # Reference
//! Kuhn (1955), "The Hungarian Method for the Assignment Problem";
//! Jonker & Volgenant (1987), shortest augmenting path formulation.

use log::trace;

use super::observer::SolveObserver;
use crate::models::CostMatrix;

/// A complete permutation over a square matrix, with its dual certificate.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareSolution {
    /// Worker (row) assigned to each job (column), 0-based.
    pub worker_by_job: Vec<usize>,
    /// Worker potentials `u`, 0-based.
    pub row_potentials: Vec<f64>,
    /// Job potentials `v`, 0-based.
    pub col_potentials: Vec<f64>,
}

impl SquareSolution {
    /// Sum of all potentials. Equals the optimal cost at termination.
    pub fn dual_objective(&self) -> f64 {
        self.row_potentials.iter().sum::<f64>() + self.col_potentials.iter().sum::<f64>()
    }
}

/// Mutable state owned by one solve.
struct Labels {
    u: Vec<f64>,
    v: Vec<f64>,
    /// Worker per job; 0 = unassigned.
    assignment: Vec<usize>,
    /// Predecessor job on the current alternating path.
    path: Vec<usize>,
}

/// Solves the assignment problem on a square, non-negative matrix.
///
/// Ties between equal slacks go to the lowest job index.
///
/// The caller passes a square matrix whose values passed
/// [`validate_matrix`](crate::validation::validate_matrix); every slack is
/// then finite and each pass reaches a job.
pub(crate) fn solve_square<O: SolveObserver + ?Sized>(
    costs: &CostMatrix,
    observer: &O,
) -> SquareSolution {
    debug_assert!(costs.is_square(), "engine requires a square matrix");
    let n = costs.rows();

    let mut labels = Labels {
        u: vec![0.0; n + 1],
        v: vec![0.0; n + 1],
        assignment: vec![0; n + 1],
        path: vec![0; n + 1],
    };

    for worker in 1..=n {
        observer.on_worker_start(worker);
        let free_job = grow_tree(costs, worker, &mut labels, observer);
        let path_len = augment_path(&mut labels, free_job);
        trace!("worker {worker}: augmented through {path_len} jobs, ending at job {free_job}");
        observer.on_augmented(worker, path_len);
    }

    SquareSolution {
        worker_by_job: labels.assignment[1..].iter().map(|&w| w - 1).collect(),
        row_potentials: labels.u[1..].to_vec(),
        col_potentials: labels.v[1..].to_vec(),
    }
}

/// Grows the alternating tree for `worker` until an unassigned job is
/// reached. Returns that job.
fn grow_tree<O: SolveObserver + ?Sized>(
    costs: &CostMatrix,
    worker: usize,
    labels: &mut Labels,
    observer: &O,
) -> usize {
    let n = costs.rows();
    let mut visited = vec![false; n + 1];
    let mut min_slack = vec![f64::INFINITY; n + 1];

    labels.assignment[0] = worker;
    let mut job = 0;

    loop {
        visited[job] = true;
        let current = labels.assignment[job];
        let mut delta = f64::INFINITY;
        let mut next_job = 0;

        for j in 1..=n {
            if visited[j] {
                continue;
            }
            let slack = costs.get(current - 1, j - 1) - labels.u[current] - labels.v[j];
            if slack < min_slack[j] {
                min_slack[j] = slack;
                labels.path[j] = job;
            }
            if min_slack[j] < delta {
                delta = min_slack[j];
                next_job = j;
            }
        }

        // A non-finite slack would leave `next_job` at the sentinel forever.
        assert!(
            next_job != 0 && delta.is_finite(),
            "no finite slack from worker {current}; costs must be finite"
        );

        update_labels(labels, &visited, &mut min_slack, delta);
        observer.on_labels_updated(worker, delta);

        job = next_job;
        if labels.assignment[job] == 0 {
            return job;
        }
    }
}

/// Moves potentials by `delta`: jobs in the tree (and their workers)
/// absorb it; jobs outside the tree get their slack reduced instead.
fn update_labels(labels: &mut Labels, visited: &[bool], min_slack: &mut [f64], delta: f64) {
    for (job, &in_tree) in visited.iter().enumerate() {
        if in_tree {
            labels.u[labels.assignment[job]] += delta;
            labels.v[job] -= delta;
        } else {
            min_slack[job] -= delta;
        }
    }
}

/// Flips the alternating path ending at `job` back to the sentinel.
/// Returns the number of jobs reassigned.
fn augment_path(labels: &mut Labels, mut job: usize) -> usize {
    let mut len = 0;
    while job != 0 {
        let prev = labels.path[job];
        labels.assignment[job] = labels.assignment[prev];
        job = prev;
        len += 1;
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::observer::NoopObserver;
    use crate::test_utils::brute_force_min;
    use std::cell::RefCell;

    fn matrix(rows: &[Vec<f64>]) -> CostMatrix {
        CostMatrix::from_rows(rows).unwrap()
    }

    fn cost_of(costs: &CostMatrix, sol: &SquareSolution) -> f64 {
        sol.worker_by_job
            .iter()
            .enumerate()
            .map(|(job, &worker)| costs.get(worker, job))
            .sum()
    }

    fn assert_permutation(sol: &SquareSolution, n: usize) {
        let mut seen = vec![false; n];
        for &w in &sol.worker_by_job {
            assert!(w < n);
            assert!(!seen[w], "worker {w} assigned twice");
            seen[w] = true;
        }
    }

    #[test]
    fn test_small_assignment() {
        let costs = matrix(&[
            vec![4.0, 1.0, 3.0],
            vec![2.0, 0.0, 5.0],
            vec![3.0, 2.0, 2.0],
        ]);
        let sol = solve_square(&costs, &NoopObserver);
        assert_permutation(&sol, 3);
        assert_eq!(cost_of(&costs, &sol), 5.0);
    }

    #[test]
    fn test_four_by_four() {
        let rows = vec![
            vec![82.0, 83.0, 69.0, 92.0],
            vec![77.0, 37.0, 49.0, 92.0],
            vec![11.0, 69.0, 5.0, 86.0],
            vec![8.0, 9.0, 98.0, 23.0],
        ];
        let costs = matrix(&rows);
        let sol = solve_square(&costs, &NoopObserver);
        assert_permutation(&sol, 4);
        assert_eq!(cost_of(&costs, &sol), 140.0);
        assert_eq!(brute_force_min(&rows), 140.0);
        // The optimal permutation is its own inverse.
        assert_eq!(sol.worker_by_job, vec![2, 1, 0, 3]);
    }

    #[test]
    fn test_dual_feasible_and_tight() {
        let costs = matrix(&[
            vec![7.0, 53.0, 183.0, 439.0],
            vec![497.0, 383.0, 563.0, 79.0],
            vec![627.0, 343.0, 773.0, 959.0],
            vec![447.0, 283.0, 463.0, 29.0],
        ]);
        let sol = solve_square(&costs, &NoopObserver);
        let (u, v) = (&sol.row_potentials, &sol.col_potentials);
        for i in 0..4 {
            for j in 0..4 {
                assert!(costs.get(i, j) >= u[i] + v[j] - 1e-9);
            }
        }
        for (job, &worker) in sol.worker_by_job.iter().enumerate() {
            assert!((costs.get(worker, job) - u[worker] - v[job]).abs() < 1e-9);
        }
        assert!((sol.dual_objective() - cost_of(&costs, &sol)).abs() < 1e-9);
    }

    #[test]
    fn test_all_equal_costs() {
        let costs = CostMatrix::filled(4, 4, 3.0);
        let sol = solve_square(&costs, &NoopObserver);
        assert_permutation(&sol, 4);
        assert_eq!(cost_of(&costs, &sol), 12.0);
    }

    #[test]
    #[should_panic(expected = "no finite slack")]
    fn test_non_finite_costs_panic_instead_of_spinning() {
        let costs = CostMatrix::filled(2, 2, f64::NAN);
        solve_square(&costs, &NoopObserver);
    }

    #[test]
    fn test_single_cell() {
        let costs = matrix(&[vec![9.0]]);
        let sol = solve_square(&costs, &NoopObserver);
        assert_eq!(sol.worker_by_job, vec![0]);
        assert_eq!(sol.dual_objective(), 9.0);
    }

    #[test]
    fn test_fractional_costs() {
        let rows = vec![
            vec![0.5, 0.25, 0.75],
            vec![0.125, 0.625, 0.5],
            vec![0.875, 0.375, 0.0625],
        ];
        let costs = matrix(&rows);
        let sol = solve_square(&costs, &NoopObserver);
        assert!((cost_of(&costs, &sol) - brute_force_min(&rows)).abs() < 1e-12);
    }

    #[derive(Default)]
    struct Recorder {
        started: RefCell<Vec<usize>>,
        augmented: RefCell<Vec<(usize, usize)>>,
        updates: RefCell<usize>,
    }

    impl SolveObserver for Recorder {
        fn on_worker_start(&self, worker: usize) {
            self.started.borrow_mut().push(worker);
        }

        fn on_labels_updated(&self, _worker: usize, delta: f64) {
            assert!(delta >= 0.0);
            *self.updates.borrow_mut() += 1;
        }

        fn on_augmented(&self, worker: usize, path_len: usize) {
            self.augmented.borrow_mut().push((worker, path_len));
        }
    }

    #[test]
    fn test_observer_sees_every_worker() {
        let costs = matrix(&[
            vec![4.0, 1.0, 3.0],
            vec![2.0, 0.0, 5.0],
            vec![3.0, 2.0, 2.0],
        ]);
        let recorder = Recorder::default();
        solve_square(&costs, &recorder);

        assert_eq!(*recorder.started.borrow(), vec![1, 2, 3]);
        let augmented = recorder.augmented.borrow();
        assert_eq!(augmented.len(), 3);
        assert!(augmented.iter().all(|&(_, len)| len >= 1));
        assert!(*recorder.updates.borrow() >= 3);
    }
}
