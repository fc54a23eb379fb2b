use alloc::vec;
use alloc::vec::Vec;

/// State of a single cell in the mark grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Mark {
    #[default]
    None,
    /// Part of the current (partial) assignment.
    Starred,
    /// Candidate found during the current augmenting-path search.
    Primed,
}

/// The n×n grid of marks together with per-row and per-column indices of the starred cells and a
/// per-row index of the primed cell.
///
/// At most one star lives in any row or column, and at most one prime in any row, so each index
/// holds a single `Option`.
#[derive(Clone, Debug)]
pub struct MarkGrid {
    dim: usize,
    cells: Vec<Mark>,
    star_in_row: Vec<Option<usize>>,
    star_in_col: Vec<Option<usize>>,
    prime_in_row: Vec<Option<usize>>,
}

impl MarkGrid {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            cells: vec![Mark::None; dim * dim],
            star_in_row: vec![None; dim],
            star_in_col: vec![None; dim],
            prime_in_row: vec![None; dim],
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Mark {
        self.cells[row * self.dim + col]
    }

    pub fn star_in_row(&self, row: usize) -> Option<usize> {
        self.star_in_row[row]
    }

    pub fn star_in_col(&self, col: usize) -> Option<usize> {
        self.star_in_col[col]
    }

    pub fn prime_in_row(&self, row: usize) -> Option<usize> {
        self.prime_in_row[row]
    }

    /// Stars a cell. A prime on that cell is consumed.
    pub fn star(&mut self, row: usize, col: usize) {
        debug_assert!(self.star_in_row[row].is_none() && self.star_in_col[col].is_none());
        if self.prime_in_row[row] == Some(col) {
            self.prime_in_row[row] = None;
        }
        self.cells[row * self.dim + col] = Mark::Starred;
        self.star_in_row[row] = Some(col);
        self.star_in_col[col] = Some(row);
    }

    pub fn unstar(&mut self, row: usize, col: usize) {
        debug_assert_eq!(self.get(row, col), Mark::Starred);
        self.cells[row * self.dim + col] = Mark::None;
        self.star_in_row[row] = None;
        self.star_in_col[col] = None;
    }

    pub fn prime(&mut self, row: usize, col: usize) {
        debug_assert_eq!(self.get(row, col), Mark::None);
        self.cells[row * self.dim + col] = Mark::Primed;
        self.prime_in_row[row] = Some(col);
    }

    /// Turns every remaining prime back into an unmarked cell.
    pub fn clear_primes(&mut self) {
        for (row, prime) in self.prime_in_row.iter_mut().enumerate() {
            if let Some(col) = prime.take() {
                self.cells[row * self.dim + col] = Mark::None;
            }
        }
    }

    pub fn star_count(&self) -> usize {
        self.star_in_row.iter().flatten().count()
    }

    /// Starred cells in row order.
    pub fn stars(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.star_in_row
            .iter()
            .enumerate()
            .filter_map(|(row, col)| col.map(|col| (row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_updates_indices() {
        let mut grid = MarkGrid::new(3);
        grid.star(1, 2);
        assert_eq!(grid.get(1, 2), Mark::Starred);
        assert_eq!(grid.star_in_row(1), Some(2));
        assert_eq!(grid.star_in_col(2), Some(1));
        assert_eq!(grid.star_in_col(0), None);

        grid.unstar(1, 2);
        assert_eq!(grid.get(1, 2), Mark::None);
        assert_eq!(grid.star_count(), 0);
    }

    #[test]
    fn starring_a_prime_consumes_it() {
        let mut grid = MarkGrid::new(2);
        grid.prime(0, 1);
        assert_eq!(grid.prime_in_row(0), Some(1));
        grid.star(0, 1);
        assert_eq!(grid.prime_in_row(0), None);
        assert_eq!(grid.get(0, 1), Mark::Starred);
    }

    #[test]
    fn clear_primes_keeps_stars() {
        let mut grid = MarkGrid::new(3);
        grid.star(0, 0);
        grid.prime(1, 0);
        grid.prime(2, 1);
        grid.clear_primes();
        assert_eq!(grid.get(1, 0), Mark::None);
        assert_eq!(grid.get(2, 1), Mark::None);
        assert_eq!(grid.prime_in_row(2), None);
        assert_eq!(grid.stars().collect::<Vec<_>>(), [(0, 0)]);
    }
}
