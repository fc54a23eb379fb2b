#![no_std]
#![deny(
    warnings,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]
#![forbid(unsafe_code)]

//! Optimal assignment on square cost matrices with the Kuhn-Munkres (Hungarian) algorithm, and a
//! subtour-elimination search for the traveling salesman problem built on top of it.
//!
//! ```
//! use assignment::{AssignmentSolver, CostMatrix, DefaultSolver};
//!
//! let costs = CostMatrix::new(vec![vec![4, 1, 3], vec![2, 0, 5], vec![3, 2, 2]]).unwrap();
//! let solution = DefaultSolver::new().solve(&costs).unwrap();
//! assert_eq!(solution.assignment(), &[(0, 1), (1, 0), (2, 2)]);
//! assert_eq!(solution.cost(), 5);
//! ```

extern crate alloc;

mod algo;
pub mod cost;
pub mod cover;
pub mod error;
pub mod impls;
pub mod marks;
pub mod matrix;
pub mod solution;
pub mod tsp;

pub use crate::cost::Cost;
pub use crate::error::Error;
pub use crate::impls::default::DefaultSolver;
pub use crate::matrix::CostMatrix;
pub use crate::solution::{Pair, Solution, Stats};
pub use crate::tsp::{SubtourElimination, Tour};

/// A solver for the (square, minimum-cost) assignment problem.
pub trait AssignmentSolver {
    type Cost;
    type Error;

    /// Returns a minimum-cost perfect matching between the rows and columns of `costs`. Either a
    /// complete optimal assignment is returned or an error, never a partial result.
    fn solve(
        &mut self,
        costs: &CostMatrix<Self::Cost>,
    ) -> Result<Solution<Self::Cost>, Self::Error>;

    /// Verifies that `solution` is a valid assignment for `costs`.
    fn check(
        &self,
        costs: &CostMatrix<Self::Cost>,
        solution: &Solution<Self::Cost>,
    ) -> Result<(), Self::Error>;
}
