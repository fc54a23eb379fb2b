use alloc::vec::Vec;
use core::ops::Index;

use serde::{Deserialize, Serialize};

use crate::cost::Cost;
use crate::error::Error;

/// A square matrix of costs, stored row-major.
///
/// Construction validates the shape and every entry, so a `CostMatrix` in hand is always square,
/// non-empty and free of inadmissible values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<Vec<C>>",
    into = "Vec<Vec<C>>",
    bound(
        serialize = "C: Clone + Serialize",
        deserialize = "C: Cost + Deserialize<'de>"
    )
)]
pub struct CostMatrix<C> {
    dim: usize,
    cells: Vec<C>,
}

impl<C: Cost> CostMatrix<C> {
    pub fn new(rows: Vec<Vec<C>>) -> Result<Self, Error> {
        let dim = rows.len();
        if dim == 0 {
            return Err(Error::EmptyMatrix);
        }

        let mut cells = Vec::with_capacity(dim * dim);
        for (row, entries) in rows.into_iter().enumerate() {
            if entries.len() != dim {
                return Err(Error::NonSquareMatrix {
                    row,
                    len: entries.len(),
                    expected: dim,
                });
            }
            if let Some(col) = entries.iter().position(|c| !c.is_admissible()) {
                return Err(Error::InadmissibleCost { row, col });
            }
            cells.extend(entries);
        }

        Ok(Self { dim, cells })
    }

    /// Number of rows (and columns).
    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn get(&self, row: usize, col: usize) -> C {
        self.cells[row * self.dim + col]
    }

    pub fn row(&self, row: usize) -> &[C] {
        &self.cells[row * self.dim..(row + 1) * self.dim]
    }

    /// The rows in order, each as a slice.
    pub fn rows(&self) -> impl Iterator<Item = &[C]> + '_ {
        self.cells.chunks(self.dim)
    }

    /// Marks the pairing of `row` and `col` as forbidden.
    pub fn forbid(&mut self, row: usize, col: usize) {
        self.cells[row * self.dim + col] = C::forbidden();
    }

    /// Sums the entries at the given cells.
    pub fn cost_of<'a, I>(&self, cells: I) -> Result<C, Error>
    where
        I: IntoIterator<Item = &'a (usize, usize)>,
    {
        cells.into_iter().try_fold(C::zero(), |acc, &(row, col)| {
            acc.try_add(self.get(row, col))
                .ok_or(Error::ArithmeticOverflow)
        })
    }

    pub(crate) fn into_cells(self) -> Vec<C> {
        self.cells
    }
}

impl<C> Index<(usize, usize)> for CostMatrix<C> {
    type Output = C;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.cells[row * self.dim + col]
    }
}

impl<C: Cost> TryFrom<Vec<Vec<C>>> for CostMatrix<C> {
    type Error = Error;

    fn try_from(rows: Vec<Vec<C>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl<C> From<CostMatrix<C>> for Vec<Vec<C>> {
    fn from(m: CostMatrix<C>) -> Self {
        let dim = m.dim;
        let mut cells = m.cells.into_iter();
        (0..dim)
            .map(|_| cells.by_ref().take(dim).collect())
            .collect()
    }
}
