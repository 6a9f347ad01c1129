//! Batch solving of independent assignment problems.

use super::matrix::CostMatrix;
use super::solver::{AssignmentResult, AssignmentSolver};
use super::types::AssignError;

/// Solves a batch of independent assignment problems.
///
/// Each matrix is solved exactly as by [`AssignmentSolver::solve`]; results
/// come back in input order. The solver keeps no state between calls, so
/// with the `parallel` feature enabled the batch fans out across the rayon
/// thread pool. Returns an error if any matrix contains a non-finite cost.
///
/// # Examples
///
/// ```
/// use u_assign::assignment::{solve_batch, CostMatrix};
///
/// let problems = vec![
///     CostMatrix::from_rows(vec![vec![1.0, 2.0], vec![2.0, 1.0]]).unwrap(),
///     CostMatrix::zeros(2, 3),
/// ];
///
/// let results = solve_batch(&problems).unwrap();
/// assert_eq!(results[0].total_cost, 2.0);
/// assert_eq!(results[1].matched_count(), 2);
/// ```
pub fn solve_batch(matrices: &[CostMatrix]) -> Result<Vec<AssignmentResult>, AssignError> {
    solve_batch_impl(matrices)
}

#[cfg(feature = "parallel")]
fn solve_batch_impl(matrices: &[CostMatrix]) -> Result<Vec<AssignmentResult>, AssignError> {
    use rayon::prelude::*;

    matrices.par_iter().map(AssignmentSolver::solve).collect()
}

#[cfg(not(feature = "parallel"))]
fn solve_batch_impl(matrices: &[CostMatrix]) -> Result<Vec<AssignmentResult>, AssignError> {
    matrices.iter().map(AssignmentSolver::solve).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_matches_individual_solves() {
        let problems = vec![
            CostMatrix::from_rows(vec![vec![9.0, 2.5, 7.1], vec![6.2, 4.8, 3.0]]).unwrap(),
            CostMatrix::from_fn(4, 4, |w, j| (w * 4 + j) as f64),
            CostMatrix::zeros(0, 2),
        ];

        let batch = solve_batch(&problems).unwrap();

        assert_eq!(batch.len(), 3);
        for (matrix, result) in problems.iter().zip(&batch) {
            assert_eq!(result, &AssignmentSolver::solve(matrix).unwrap());
        }
    }

    #[test]
    fn test_batch_empty() {
        assert_eq!(solve_batch(&[]).unwrap(), vec![]);
    }

    #[test]
    fn test_batch_propagates_error() {
        let problems = vec![
            CostMatrix::zeros(2, 2),
            CostMatrix::from_rows(vec![vec![1.0, f64::INFINITY]]).unwrap(),
        ];

        assert!(matches!(
            solve_batch(&problems).unwrap_err(),
            AssignError::NonFiniteCost { worker: 0, job: 1, .. }
        ));
    }
}
