use derive_getters::Dissolve;
use derive_more::{Constructor, From, Into};

use refrain_core_rs::Span;

use crate::MatchingError;

/// A single cell of the score matrix: `row` indexes the first sequence,
/// `col` the second.
#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Debug,
    Hash,
    Default,
    Constructor,
    Dissolve,
    From,
    Into,
)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

/// Contiguous index ranges covered by a path in each sequence.
///
/// Matching paths are non-decreasing in both coordinates, so the covered
/// region in each sequence is exactly the range between the first and the
/// last cell, inclusive on both sides.
///
/// The path must be non-decreasing in both coordinates, as every path
/// produced by the engine is; panics otherwise.
pub fn induced_spans(path: &[Cell]) -> Result<(Span<usize>, Span<usize>), MatchingError> {
    let (first, last) = match (path.first(), path.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(MatchingError::EmptyPath),
    };
    debug_assert!(first.row <= last.row && first.col <= last.col);

    let seq1 = Span::new(first.row, last.row + 1).unwrap();
    let seq2 = Span::new(first.col, last.col + 1).unwrap();
    Ok((seq1, seq2))
}
