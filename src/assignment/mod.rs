//! Kuhn-Munkres (Hungarian) assignment solving.
//!
//! The solver runs the O(N³) primal-dual formulation of the Hungarian
//! algorithm on a square matrix obtained by implicitly padding the smaller
//! dimension with a forbidden-pairing cost. Each of the N outer iterations
//! inserts one row via a Dijkstra-like shortest augmenting path over reduced
//! costs, then shifts the displaced rows one edge along that path. Dual
//! potentials certify optimality through complementary slackness.
//!
//! # References
//!
//! - Kuhn, H. W. (1955). "The Hungarian Method for the Assignment Problem",
//!   *Naval Research Logistics Quarterly* 2, 83-97.
//! - Munkres, J. (1957). "Algorithms for the Assignment and Transportation
//!   Problems", *Journal of the SIAM* 5(1), 32-38.
//! - Jonker & Volgenant (1987), "A Shortest Augmenting Path Algorithm for
//!   Dense and Sparse Linear Assignment Problems"

mod batch;
mod matrix;
mod solver;
mod types;

pub use batch::solve_batch;
pub use matrix::CostMatrix;
pub use solver::{AssignmentResult, AssignmentSolver};
pub use types::AssignError;
