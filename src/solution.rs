use alloc::vec::Vec;

use serde::Serialize;

use crate::cost::Cost;
use crate::matrix::CostMatrix;

/// Counters collected while running the solver. Useful for diagnostics only.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Number of coverage tests, i.e. major iterations.
    pub iterations: usize,
    /// Number of cost adjustments.
    pub adjustments: usize,
    /// Number of augmenting paths applied.
    pub augmentations: usize,
}

/// An optimal assignment together with its total cost.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Solution<C> {
    assignment: Vec<(usize, usize)>,
    cost: C,
    stats: Stats,
}

impl<C: Copy> Solution<C> {
    pub(crate) fn new(assignment: Vec<(usize, usize)>, cost: C, stats: Stats) -> Self {
        Self {
            assignment,
            cost,
            stats,
        }
    }

    /// The `(row, col)` pairs in row order.
    pub fn assignment(&self) -> &[(usize, usize)] {
        &self.assignment
    }

    /// Total of the original costs over the assignment.
    pub fn cost(&self) -> C {
        self.cost
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn iterations(&self) -> usize {
        self.stats.iterations
    }

    /// Column assigned to `row`.
    pub fn col_of(&self, row: usize) -> Option<usize> {
        self.assignment
            .iter()
            .find_map(|&(r, c)| (r == row).then_some(c))
    }

    /// Reporting records, one per pair, with the cost taken from `costs`.
    pub fn pairs<'a>(&'a self, costs: &'a CostMatrix<C>) -> impl Iterator<Item = Pair<C>> + 'a
    where
        C: Cost,
    {
        self.assignment.iter().map(move |&(row, col)| Pair {
            row,
            col,
            cost: costs.get(row, col),
        })
    }
}

/// A single assigned cell, as written to reports.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Pair<C> {
    pub row: usize,
    pub col: usize,
    pub cost: C,
}
