//! Dense cost matrix container.

use super::types::AssignError;

/// Owned, row-major dense cost matrix.
///
/// Maps `(worker, job)` pairs to a real-valued cost. Dimensions are
/// independent; either side may be larger, and either may be zero. The
/// matrix is the sole input to [`AssignmentSolver`](super::AssignmentSolver)
/// and is never mutated by it.
///
/// # Examples
///
/// ```
/// use u_assign::assignment::CostMatrix;
///
/// let costs = CostMatrix::from_rows(vec![
///     vec![4.0, 1.0, 3.0],
///     vec![2.0, 0.0, 5.0],
/// ])
/// .unwrap();
///
/// assert_eq!(costs.workers(), 2);
/// assert_eq!(costs.jobs(), 3);
/// assert_eq!(costs.at(1, 2), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostMatrix {
    workers: usize,
    jobs: usize,
    data: Vec<f64>,
}

impl CostMatrix {
    /// Builds a matrix from nested rows (one inner `Vec` per worker).
    ///
    /// All rows must have the same length; a ragged input is rejected with
    /// [`AssignError::ShapeMismatch`]. An empty outer `Vec` yields a 0×0
    /// matrix.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, AssignError> {
        let workers = rows.len();
        let jobs = rows.first().map_or(0, |r| r.len());
        let mut data = Vec::with_capacity(workers * jobs);
        for row in &rows {
            if row.len() != jobs {
                return Err(AssignError::ShapeMismatch {
                    expected: jobs,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            workers,
            jobs,
            data,
        })
    }

    /// Builds a matrix from a flat row-major buffer.
    ///
    /// `data.len()` must equal `workers * jobs`.
    pub fn from_flat(workers: usize, jobs: usize, data: Vec<f64>) -> Result<Self, AssignError> {
        if data.len() != workers * jobs {
            return Err(AssignError::ShapeMismatch {
                expected: workers * jobs,
                found: data.len(),
            });
        }
        Ok(Self {
            workers,
            jobs,
            data,
        })
    }

    /// Builds a matrix by evaluating `f(worker, job)` for every cell.
    pub fn from_fn(workers: usize, jobs: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(workers * jobs);
        for worker in 0..workers {
            for job in 0..jobs {
                data.push(f(worker, job));
            }
        }
        Self {
            workers,
            jobs,
            data,
        }
    }

    /// Builds an all-zero matrix.
    pub fn zeros(workers: usize, jobs: usize) -> Self {
        Self {
            workers,
            jobs,
            data: vec![0.0; workers * jobs],
        }
    }

    /// Number of workers (rows).
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Number of jobs (columns).
    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// Whether either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.workers == 0 || self.jobs == 0
    }

    /// Cost of pairing `worker` with `job`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds. Use [`get`](Self::get) for a
    /// checked lookup.
    pub fn at(&self, worker: usize, job: usize) -> f64 {
        assert!(worker < self.workers && job < self.jobs);
        self.data[worker * self.jobs + job]
    }

    /// Checked cost lookup.
    pub fn get(&self, worker: usize, job: usize) -> Option<f64> {
        if worker < self.workers && job < self.jobs {
            Some(self.data[worker * self.jobs + job])
        } else {
            None
        }
    }

    /// One worker's costs across all jobs.
    pub fn row(&self, worker: usize) -> &[f64] {
        let start = worker * self.jobs;
        &self.data[start..start + self.jobs]
    }

    /// Largest absolute cost in the matrix, `0.0` when empty.
    ///
    /// The solver derives its padding sentinel from this bound.
    pub fn max_abs_cost(&self) -> f64 {
        self.data.iter().fold(0.0, |acc, c| acc.max(c.abs()))
    }

    /// The transposed matrix (workers and jobs swapped).
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.jobs, self.workers, |worker, job| self.at(job, worker))
    }

    /// Rejects any non-finite cost.
    ///
    /// The padding sentinel is only guaranteed to dominate real costs when
    /// every input is finite, so the solver calls this before running.
    pub fn validate(&self) -> Result<(), AssignError> {
        for worker in 0..self.workers {
            for job in 0..self.jobs {
                let value = self.at(worker, job);
                if !value.is_finite() {
                    return Err(AssignError::NonFiniteCost { worker, job, value });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_basic() {
        let m = CostMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.workers(), 2);
        assert_eq!(m.jobs(), 2);
        assert_eq!(m.at(0, 0), 1.0);
        assert_eq!(m.at(1, 1), 4.0);
        assert_eq!(m.row(1), &[3.0, 4.0]);
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = CostMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            AssignError::ShapeMismatch {
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_from_rows_empty() {
        let m = CostMatrix::from_rows(vec![]).unwrap();
        assert_eq!(m.workers(), 0);
        assert_eq!(m.jobs(), 0);
        assert!(m.is_empty());
    }

    #[test]
    fn test_from_flat_length_mismatch() {
        let err = CostMatrix::from_flat(2, 3, vec![0.0; 5]).unwrap_err();
        assert_eq!(
            err,
            AssignError::ShapeMismatch {
                expected: 6,
                found: 5
            }
        );
    }

    #[test]
    fn test_from_fn() {
        let m = CostMatrix::from_fn(3, 2, |w, j| (w * 10 + j) as f64);
        assert_eq!(m.at(2, 1), 21.0);
        assert_eq!(m.at(0, 0), 0.0);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let m = CostMatrix::zeros(2, 2);
        assert_eq!(m.get(1, 1), Some(0.0));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 2), None);
    }

    #[test]
    fn test_max_abs_cost_with_negatives() {
        let m = CostMatrix::from_rows(vec![vec![-7.5, 2.0], vec![3.0, 1.0]]).unwrap();
        assert_eq!(m.max_abs_cost(), 7.5);
    }

    #[test]
    fn test_max_abs_cost_empty() {
        assert_eq!(CostMatrix::zeros(0, 4).max_abs_cost(), 0.0);
    }

    #[test]
    fn test_transpose() {
        let m = CostMatrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let t = m.transpose();
        assert_eq!(t.workers(), 3);
        assert_eq!(t.jobs(), 2);
        assert_eq!(t.at(2, 0), 3.0);
        assert_eq!(t.at(1, 1), 5.0);
    }

    #[test]
    fn test_validate_rejects_nan() {
        let m = CostMatrix::from_rows(vec![vec![1.0, f64::NAN], vec![2.0, 3.0]]).unwrap();
        match m.validate().unwrap_err() {
            AssignError::NonFiniteCost { worker, job, value } => {
                assert_eq!((worker, job), (0, 1));
                assert!(value.is_nan());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_infinity() {
        let m = CostMatrix::from_rows(vec![vec![1.0], vec![f64::INFINITY]]).unwrap();
        assert!(matches!(
            m.validate().unwrap_err(),
            AssignError::NonFiniteCost { worker: 1, job: 0, .. }
        ));
    }

    #[test]
    fn test_validate_ok() {
        assert!(CostMatrix::zeros(3, 3).validate().is_ok());
    }
}
