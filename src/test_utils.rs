//! Shared helpers for tests.

/// Minimum total cost over all one-to-one matchings that cover the
/// smaller dimension, by exhaustive search.
pub(crate) fn brute_force_min(rows: &[Vec<f64>]) -> f64 {
    let r = rows.len();
    let c = rows[0].len();
    if r > c {
        let transposed: Vec<Vec<f64>> = (0..c)
            .map(|j| rows.iter().map(|row| row[j]).collect())
            .collect();
        return brute_force_min(&transposed);
    }
    let mut used = vec![false; c];
    search(rows, 0, &mut used)
}

fn search(rows: &[Vec<f64>], row: usize, used: &mut [bool]) -> f64 {
    if row == rows.len() {
        return 0.0;
    }
    let mut best = f64::INFINITY;
    for col in 0..used.len() {
        if used[col] {
            continue;
        }
        used[col] = true;
        best = best.min(rows[row][col] + search(rows, row + 1, used));
        used[col] = false;
    }
    best
}
