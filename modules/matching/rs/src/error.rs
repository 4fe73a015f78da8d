use derive_more::{Display, Error};

/// Errors reported by the matching engine. Degenerate-but-valid inputs
/// (all-zero score matrices, 1x1 matrices) are not errors and produce
/// trivial results instead.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Display, Error)]
pub enum MatchingError {
    /// The score matrix has no rows or no columns.
    #[display("score matrix must have at least one row and one column")]
    InvalidShape,
    /// The score matrix contains a NaN or infinite value.
    #[display("non-finite score at ({row}, {col})")]
    NonFiniteInput { row: usize, col: usize },
    /// Segment induction was requested for a path with zero elements.
    #[display("cannot induce segments from an empty path")]
    EmptyPath,
}
