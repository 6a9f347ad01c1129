//! Rectangular linear assignment solver.
//!
//! Solves the classical assignment problem: given `n` workers and `m` jobs
//! with a real-valued cost for every worker-job pair, find a matching that
//! pairs each job with at most one worker (and each worker with at most one
//! job) minimizing total cost. When `n != m` the smaller side is matched
//! optimally and the rest is left unassigned.
//!
//! - **[`CostMatrix`](assignment::CostMatrix)**: owned, bounds-checked dense
//!   cost container built from nested rows, a flat buffer, or a closure.
//! - **[`AssignmentSolver`](assignment::AssignmentSolver)**: Kuhn-Munkres
//!   (Hungarian) algorithm in its O(N³) primal-dual form, with per-row
//!   augmenting-path search and lazy slack updates.
//! - **[`AssignmentResult`](assignment::AssignmentResult)**: total cost plus
//!   a job-indexed `Option<worker>` mapping with matching helpers.
//! - **Batch solving**: [`solve_batch`](assignment::solve_batch) runs many
//!   independent problems in one call; with the `parallel` feature the batch
//!   fans out across threads via rayon.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` derives on the matrix, result, and
//!   error types.
//! - `parallel`: rayon-backed batch solving. The per-call algorithm itself is
//!   single-threaded and owns all of its working state, so concurrent calls
//!   on separate matrices are already safe without this feature.
//!
//! # Architecture
//!
//! The solver is one tightly-coupled numerical procedure; all working state
//! is owned by a single call and released on every exit path. There are no
//! domain-specific concepts here. Schedulers, trackers and dispatch layers
//! build on top by supplying a cost matrix and consuming the result.

pub mod assignment;
