pub use partial::PartialMatching;
pub use path::Cell;
pub use subsequence::SubsequenceMatching;

pub mod partial;
pub mod path;
pub mod subsequence;

use itertools::iproduct;
use refrain_core_rs::Mat;

use crate::{MatchingError, Score};

/// Reject score matrices the accumulation recurrences are not defined for:
/// empty shapes and non-finite entries.
pub(crate) fn validated<S: Score>(s: &Mat<S>) -> Result<(), MatchingError> {
    if s.rows() == 0 || s.cols() == 0 {
        return Err(MatchingError::InvalidShape);
    }
    for (row, col) in iproduct!(0..s.rows(), 0..s.cols()) {
        if !s[(row, col)].is_finite() {
            return Err(MatchingError::NonFiniteInput { row, col });
        }
    }
    Ok(())
}

/// Max over a partial order. Ties keep the first argument.
#[inline(always)]
pub(crate) fn pmax<S: Score>(a: S, b: S) -> S {
    if b > a {
        b
    } else {
        a
    }
}
