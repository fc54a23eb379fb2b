use alloc::vec::Vec;

use itertools::iproduct;

use crate::cost::Cost;
use crate::cover::Coverage;
use crate::error::Error;
use crate::marks::MarkGrid;
use crate::matrix::CostMatrix;
use crate::solution::Stats;

pub(crate) type Cell = (usize, usize);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Step {
    Reduce,
    StarZeros,
    CoverColumns,
    FindPrime,
    Augment(Cell),
    AdjustCosts,
    Done,
}

/// Working state of one Kuhn-Munkres run: reduced costs, marks and coverage.
///
/// Forbidden cells keep their value throughout. They never become zero and are skipped by both
/// reduction and cost adjustment.
pub(crate) struct Munkres<C> {
    dim: usize,
    costs: Vec<C>,
    marks: MarkGrid,
    cover: Coverage,
    path: Vec<Cell>,
    stats: Stats,
    iteration_limit: usize,
    adjustments_in_search: usize,
}

/// Runs the solver on `matrix` and returns the starred cells in row order.
pub(crate) fn solve<C: Cost>(
    matrix: &CostMatrix<C>,
    iteration_limit: Option<usize>,
) -> Result<(Vec<Cell>, Stats), Error> {
    Munkres::new(matrix, iteration_limit).run()
}

fn min_of<C: Cost>(costs: impl Iterator<Item = C>) -> Option<C> {
    costs
        .filter(|c| !c.is_forbidden())
        .reduce(|min, c| if c < min { c } else { min })
}

impl<C: Cost> Munkres<C> {
    pub(crate) fn new(matrix: &CostMatrix<C>, iteration_limit: Option<usize>) -> Self {
        let dim = matrix.dim();
        // every augmentation is followed by one coverage test, plus the initial one
        let max_iterations = dim + 1;
        Self {
            dim,
            costs: matrix.clone().into_cells(),
            marks: MarkGrid::new(dim),
            cover: Coverage::new(dim),
            path: Vec::with_capacity(2 * dim),
            stats: Stats::default(),
            iteration_limit: iteration_limit.map_or(max_iterations, |l| l.min(max_iterations)),
            adjustments_in_search: 0,
        }
    }

    pub(crate) fn run(mut self) -> Result<(Vec<Cell>, Stats), Error> {
        let mut step = Step::Reduce;
        loop {
            log::trace!("{step:?}");
            step = match step {
                Step::Reduce => self.reduce()?,
                Step::StarZeros => self.star_zeros(),
                Step::CoverColumns => self.cover_columns()?,
                Step::FindPrime => self.find_prime(),
                Step::Augment(origin) => self.augment(origin)?,
                Step::AdjustCosts => self.adjust_costs()?,
                Step::Done => break,
            };
        }

        Ok((self.marks.stars().collect(), self.stats))
    }

    fn cost(&self, row: usize, col: usize) -> C {
        self.costs[row * self.dim + col]
    }

    fn cells(&self) -> impl Iterator<Item = Cell> {
        iproduct!(0..self.dim, 0..self.dim)
    }

    /// Subtracts each row's minimum from the row.
    fn reduce(&mut self) -> Result<Step, Error> {
        for (row, entries) in self.costs.chunks_mut(self.dim).enumerate() {
            let min = min_of(entries.iter().copied()).ok_or_else(|| {
                log::debug!("row {row} has no allowed pairing");
                Error::Infeasible
            })?;
            for c in entries.iter_mut().filter(|c| !c.is_forbidden()) {
                *c = c.try_sub(min).ok_or(Error::ArithmeticOverflow)?;
            }
        }
        Ok(Step::StarZeros)
    }

    /// Greedily stars independent zeros in row-major order.
    fn star_zeros(&mut self) -> Step {
        for (row, col) in self.cells() {
            if self.cost(row, col).is_zero()
                && self.marks.star_in_row(row).is_none()
                && self.marks.star_in_col(col).is_none()
            {
                self.marks.star(row, col);
            }
        }
        self.cover.clear();
        Step::CoverColumns
    }

    fn cover_columns(&mut self) -> Result<Step, Error> {
        self.stats.iterations += 1;
        if self.stats.iterations > self.iteration_limit {
            return Err(Error::IterationLimit(self.iteration_limit));
        }

        for col in 0..self.dim {
            if self.marks.star_in_col(col).is_some() {
                self.cover.cover_col(col);
            }
        }

        let covered = self.cover.covered_cols();
        log::debug!(
            "iteration {}: {covered} of {} columns covered",
            self.stats.iterations,
            self.dim
        );
        if covered >= self.dim {
            Ok(Step::Done)
        } else {
            self.adjustments_in_search = 0;
            Ok(Step::FindPrime)
        }
    }

    /// First zero whose row and column are both uncovered, scanning row-major.
    fn find_uncovered_zero(&self) -> Option<Cell> {
        self.cells()
            .find(|&(row, col)| self.cover.is_uncovered(row, col) && self.cost(row, col).is_zero())
    }

    fn find_prime(&mut self) -> Step {
        loop {
            let Some((row, col)) = self.find_uncovered_zero() else {
                return Step::AdjustCosts;
            };

            self.marks.prime(row, col);
            match self.marks.star_in_row(row) {
                Some(star_col) => {
                    self.cover.cover_row(row);
                    self.cover.uncover_col(star_col);
                }
                None => return Step::Augment((row, col)),
            }
        }
    }

    /// Flips stars and primes along the alternating path starting at `origin`.
    fn augment(&mut self, origin: Cell) -> Result<Step, Error> {
        self.path.clear();
        self.path.push(origin);

        let mut col = origin.1;
        while let Some(row) = self.marks.star_in_col(col) {
            self.path.push((row, col));
            col = self.marks.prime_in_row(row).ok_or(Error::BrokenInvariant(
                "starred row on the augmenting path has no prime",
            ))?;
            self.path.push((row, col));

            if self.path.len() > 2 * self.dim {
                return Err(Error::BrokenInvariant(
                    "augmenting path longer than twice the dimension",
                ));
            }
        }

        // primes sit at even positions of the path, stars at odd ones
        for &(row, col) in self.path.iter().skip(1).step_by(2) {
            self.marks.unstar(row, col);
        }
        for &(row, col) in self.path.iter().step_by(2) {
            self.marks.star(row, col);
        }

        self.marks.clear_primes();
        self.cover.clear();
        self.stats.augmentations += 1;
        log::debug!(
            "augmented along {} cells, {} stars",
            self.path.len(),
            self.marks.star_count()
        );

        Ok(Step::CoverColumns)
    }

    /// Moves the smallest uncovered cost from the doubly uncovered cells onto the doubly covered
    /// ones.
    fn adjust_costs(&mut self) -> Result<Step, Error> {
        self.adjustments_in_search += 1;
        if self.adjustments_in_search > self.dim {
            return Err(Error::BrokenInvariant(
                "cost adjustment exposed no usable zero",
            ));
        }

        let min = min_of(
            self.cells()
                .filter(|&(row, col)| self.cover.is_uncovered(row, col))
                .map(|(row, col)| self.cost(row, col)),
        )
        .ok_or_else(|| {
            log::debug!("every uncovered cell is forbidden");
            Error::Infeasible
        })?;
        log::debug!("adjusting costs by {min}");

        for (row, col) in self.cells() {
            let cost = self.cost(row, col);
            if cost.is_forbidden() {
                continue;
            }

            let adjusted = match (
                self.cover.is_row_covered(row),
                self.cover.is_col_covered(col),
            ) {
                (true, true) => cost.try_add(min),
                (false, false) => cost.try_sub(min),
                _ => continue,
            };
            self.costs[row * self.dim + col] = adjusted.ok_or(Error::ArithmeticOverflow)?;
        }

        self.stats.adjustments += 1;
        Ok(Step::FindPrime)
    }
}
