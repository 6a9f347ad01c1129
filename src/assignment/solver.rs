//! Kuhn-Munkres solver core.
//!
//! [`AssignmentSolver`] runs the primal-dual Hungarian algorithm: one outer
//! iteration per padded row, each growing the matching by one along a
//! shortest augmenting path found by Dijkstra-like relaxation over reduced
//! costs `a[i][j] - u[i] - v[j]`.

use super::matrix::CostMatrix;
use super::types::AssignError;

/// Explicit "no worker" marker in the internal matching vector.
const UNMATCHED: usize = usize::MAX;

/// Result of solving one assignment problem.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignmentResult {
    /// Minimum achievable total cost, summed over matched pairs inside the
    /// original rectangle. `0.0` for degenerate inputs.
    pub total_cost: f64,

    /// Worker matched to each job, if any. Length equals the job count.
    pub assignment: Vec<Option<usize>>,
}

impl AssignmentResult {
    fn empty(jobs: usize) -> Self {
        Self {
            total_cost: 0.0,
            assignment: vec![None; jobs],
        }
    }

    /// Matched `(worker, job)` pairs in job order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.assignment
            .iter()
            .enumerate()
            .filter_map(|(job, worker)| worker.map(|w| (w, job)))
    }

    /// Number of matched pairs. Equals `min(workers, jobs)` whenever both
    /// dimensions are non-zero.
    pub fn matched_count(&self) -> usize {
        self.assignment.iter().filter(|w| w.is_some()).count()
    }

    /// Worker matched to `job`, `None` when unassigned or out of range.
    pub fn worker_of(&self, job: usize) -> Option<usize> {
        self.assignment.get(job).copied().flatten()
    }

    /// Jobs left without a worker, in index order.
    pub fn unassigned_jobs(&self) -> impl Iterator<Item = usize> + '_ {
        self.assignment
            .iter()
            .enumerate()
            .filter_map(|(job, worker)| worker.is_none().then_some(job))
    }
}

/// Executes the Hungarian algorithm on a dense cost matrix.
///
/// The solver is deterministic (ties broken toward the lowest job index),
/// keeps no state between calls, and owns all working memory for the
/// duration of a single [`solve`](Self::solve).
///
/// # Examples
///
/// ```
/// use u_assign::assignment::{AssignmentSolver, CostMatrix};
///
/// let costs = CostMatrix::from_rows(vec![
///     vec![4.0, 1.0],
///     vec![2.0, 3.0],
/// ])
/// .unwrap();
///
/// let result = AssignmentSolver::solve(&costs).unwrap();
/// assert_eq!(result.total_cost, 3.0);
/// assert_eq!(result.assignment, vec![Some(1), Some(0)]);
/// ```
pub struct AssignmentSolver;

impl AssignmentSolver {
    /// Finds a minimum-cost matching of the smaller side of `matrix`.
    ///
    /// Rectangular inputs are handled by implicitly padding to an N×N square
    /// (N = max of the two dimensions) with a forbidden-pairing cost derived
    /// from the input, strictly larger than any achievable real total, so a
    /// padded cell is never preferred while a real cell is available.
    ///
    /// # Errors
    ///
    /// [`AssignError::NonFiniteCost`] if any cost is NaN or infinite.
    /// Degenerate inputs (zero workers or zero jobs) are not errors and
    /// yield a zero-cost, all-unassigned result.
    pub fn solve(matrix: &CostMatrix) -> Result<AssignmentResult, AssignError> {
        matrix.validate()?;

        let n = matrix.workers();
        let m = matrix.jobs();
        if n == 0 || m == 0 {
            return Ok(AssignmentResult::empty(m));
        }

        let size = n.max(m);
        let pad = matrix.max_abs_cost() * size as f64 + 1.0;
        let cost = |worker: usize, job: usize| -> f64 {
            if worker < n && job < m {
                matrix.at(worker, job)
            } else {
                pad
            }
        };

        // Slot `size` is the virtual job anchoring each alternating tree.
        let root = size;

        // Potentials keep u[i] + v[j] <= a[i][j] at all times; matched edges
        // are tight.
        let mut u = vec![0.0_f64; size];
        let mut v = vec![0.0_f64; size + 1];
        let mut matched = vec![UNMATCHED; size + 1];

        // Scratch for the augmenting-path search, reset (not reallocated)
        // once per outer iteration.
        let mut minv = vec![f64::INFINITY; size + 1];
        let mut way = vec![root; size + 1];
        let mut used = vec![false; size + 1];

        for worker in 0..size {
            matched[root] = worker;
            minv.fill(f64::INFINITY);
            used.fill(false);
            let mut j0 = root;

            // Grow the frontier until it reaches an unmatched job. Each pass
            // absorbs one job, so this runs at most `size` times.
            loop {
                used[j0] = true;
                let i0 = matched[j0];
                let mut delta = f64::INFINITY;
                let mut j1 = root;

                for job in 0..size {
                    if used[job] {
                        continue;
                    }
                    let reduced = cost(i0, job) - u[i0] - v[job];
                    if reduced < minv[job] {
                        minv[job] = reduced;
                        way[job] = j0;
                    }
                    if minv[job] < delta {
                        delta = minv[job];
                        j1 = job;
                    }
                }

                // Shift potentials by the minimum slack: frontier edges stay
                // tight, remaining slacks shrink by delta.
                for job in 0..=size {
                    if used[job] {
                        u[matched[job]] += delta;
                        v[job] -= delta;
                    } else {
                        minv[job] -= delta;
                    }
                }

                j0 = j1;
                if matched[j0] == UNMATCHED {
                    break;
                }
            }

            // Unwind: rewire the alternating path back to the root, shifting
            // every displaced worker one edge along it.
            while j0 != root {
                let j1 = way[j0];
                matched[j0] = matched[j1];
                j0 = j1;
            }
        }

        // Recover the real result, discarding padded rows and columns.
        let mut assignment = vec![None; m];
        let mut total_cost = 0.0;
        for (job, slot) in assignment.iter_mut().enumerate() {
            let worker = matched[job];
            if worker < n {
                *slot = Some(worker);
                total_cost += matrix.at(worker, job);
            }
        }

        Ok(AssignmentResult {
            total_cost,
            assignment,
        })
    }
}
