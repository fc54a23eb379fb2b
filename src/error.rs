use alloc::string::String;

use displaydoc::Display;

#[derive(Clone, Debug, PartialEq, Eq, Display)]
pub enum Error {
    /// Invalid cost matrix, expected at least one row
    EmptyMatrix,
    /// Invalid cost matrix, row {row} has {len} entries but {expected} were expected
    NonSquareMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// Invalid cost at ({row}, {col}), expected a number or a forbidden marker
    InadmissibleCost { row: usize, col: usize },
    /// No perfect assignment avoids the forbidden cells
    Infeasible,
    /// Arithmetic overflow while adjusting or summing costs
    ArithmeticOverflow,
    /// Gave up after {0} coverage tests without a complete assignment
    IterationLimit(usize),
    /// Internal invariant violated: {0}
    BrokenInvariant(&'static str),
    /// Invalid solution: {0}
    InvalidSolution(String),
    /// No tour visits every city exactly once
    NoTour,
}
