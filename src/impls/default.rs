use alloc::format;
use alloc::vec;
use core::marker::PhantomData;

use crate::algo::munkres;
use crate::cost::Cost;
use crate::error::Error;
use crate::matrix::CostMatrix;
use crate::solution::Solution;
use crate::AssignmentSolver;

/// Kuhn-Munkres assignment solver.
#[derive(Clone, Debug)]
pub struct DefaultSolver<C> {
    iteration_limit: Option<usize>,
    _phantom: PhantomData<C>,
}

impl<C> Default for DefaultSolver<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> DefaultSolver<C> {
    pub fn new() -> Self {
        Self {
            iteration_limit: None,
            _phantom: Default::default(),
        }
    }

    /// Caps the number of coverage tests. The solver never needs more than `n + 1`, so a larger
    /// limit has no effect.
    pub fn with_iteration_limit(mut self, limit: usize) -> Self {
        self.iteration_limit = Some(limit);
        self
    }
}

impl<C: Cost> AssignmentSolver for DefaultSolver<C> {
    type Cost = C;
    type Error = Error;

    fn solve(&mut self, costs: &CostMatrix<C>) -> Result<Solution<C>, Self::Error> {
        let (assignment, stats) = munkres::solve(costs, self.iteration_limit)?;

        // the working copy has been transformed, so the total comes from the original costs
        let cost = costs.cost_of(&assignment)?;

        log::info!("----------------------------------");
        log::info!("     Dimension = {}", costs.dim());
        log::info!("    Total cost = {cost}");
        log::info!("    Iterations = {}", stats.iterations);
        log::info!("   Adjustments = {}", stats.adjustments);
        log::info!(" Augmentations = {}", stats.augmentations);

        Ok(Solution::new(assignment, cost, stats))
    }

    fn check(&self, costs: &CostMatrix<C>, solution: &Solution<C>) -> Result<(), Self::Error> {
        let dim = costs.dim();
        let assignment = solution.assignment();
        if assignment.len() != dim {
            return Err(Error::InvalidSolution(format!(
                "{} pairs for dimension {dim}",
                assignment.len()
            )));
        }

        let mut rows = vec![false; dim];
        let mut cols = vec![false; dim];
        for &(row, col) in assignment {
            if row >= dim || col >= dim {
                return Err(Error::InvalidSolution(format!(
                    "({row}, {col}) lies outside the matrix"
                )));
            }
            if core::mem::replace(&mut rows[row], true) {
                return Err(Error::InvalidSolution(format!("row {row} assigned twice")));
            }
            if core::mem::replace(&mut cols[col], true) {
                return Err(Error::InvalidSolution(format!("column {col} assigned twice")));
            }
            if costs.get(row, col).is_forbidden() {
                return Err(Error::InvalidSolution(format!(
                    "({row}, {col}) is a forbidden pairing"
                )));
            }
        }

        let total = costs.cost_of(assignment)?;
        if total != solution.cost() {
            return Err(Error::InvalidSolution(format!(
                "reported cost {} differs from actual cost {total}",
                solution.cost()
            )));
        }

        log::debug!("solution of dimension {dim} checked, cost {total}");
        Ok(())
    }
}
