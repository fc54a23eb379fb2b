use alloc::vec;
use alloc::vec::Vec;

/// Row and column coverage used while searching for uncovered zeros.
#[derive(Clone, Debug)]
pub struct Coverage {
    rows: Vec<bool>,
    cols: Vec<bool>,
}

impl Coverage {
    pub fn new(dim: usize) -> Self {
        Self {
            rows: vec![false; dim],
            cols: vec![false; dim],
        }
    }

    pub fn clear(&mut self) {
        self.rows.iter_mut().for_each(|c| *c = false);
        self.cols.iter_mut().for_each(|c| *c = false);
    }

    pub fn cover_row(&mut self, row: usize) {
        self.rows[row] = true;
    }

    pub fn cover_col(&mut self, col: usize) {
        self.cols[col] = true;
    }

    pub fn uncover_col(&mut self, col: usize) {
        self.cols[col] = false;
    }

    pub fn is_row_covered(&self, row: usize) -> bool {
        self.rows[row]
    }

    pub fn is_col_covered(&self, col: usize) -> bool {
        self.cols[col]
    }

    /// Neither the row nor the column is covered.
    pub fn is_uncovered(&self, row: usize, col: usize) -> bool {
        !self.rows[row] && !self.cols[col]
    }

    pub fn covered_cols(&self) -> usize {
        self.cols.iter().filter(|&&c| c).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cover_and_clear() {
        let mut cover = Coverage::new(3);
        cover.cover_row(0);
        cover.cover_col(2);
        cover.cover_col(1);
        assert!(!cover.is_uncovered(0, 0));
        assert!(!cover.is_uncovered(1, 2));
        assert!(cover.is_uncovered(1, 0));
        assert_eq!(cover.covered_cols(), 2);

        cover.uncover_col(2);
        assert_eq!(cover.covered_cols(), 1);

        cover.clear();
        assert!(!cover.is_row_covered(0));
        assert!(!cover.is_col_covered(1));
    }
}
