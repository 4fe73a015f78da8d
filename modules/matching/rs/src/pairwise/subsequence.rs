//! Common-subsequence matching: a local-alignment variant over a precomputed
//! score matrix with step sizes {(1,0), (0,1), (1,1)}. Negative accumulation
//! is clamped at zero, so the optimal path may restart anywhere; zero cells
//! act as restart markers.

use derive_getters::{Dissolve, Getters};
use derive_more::{Constructor, From, Into};
use itertools::iproduct;
use log::debug;

use refrain_core_rs::{Mat, Span};

use super::path::{induced_spans, Cell};
use super::{pmax, validated};
use crate::{MatchingError, Score};

/// A score-maximizing local matching between two feature sequences.
#[derive(Clone, PartialEq, Debug, Getters, Constructor, Dissolve, From, Into)]
pub struct SubsequenceMatching<S: Score> {
    score: S,
    path: Vec<Cell>,
    seq1: Span<usize>,
    seq2: Span<usize>,
}

/// Accumulated score matrix for common-subsequence matching.
///
/// D[n, m] is the best cumulative score of a monotone path ending at (n, m),
/// clamped at zero. Every entry is therefore non-negative.
pub fn accumulate<S: Score>(s: &Mat<S>) -> Result<Mat<S>, MatchingError> {
    validated(s)?;

    let (rows, cols) = s.shape();
    let zero = S::zero();
    let mut d = Mat::zeros(rows, cols);

    d[(0, 0)] = pmax(zero, s[(0, 0)]);
    for n in 1..rows {
        d[(n, 0)] = pmax(zero, d[(n - 1, 0)] + s[(n, 0)]);
    }
    for m in 1..cols {
        d[(0, m)] = pmax(zero, d[(0, m - 1)] + s[(0, m)]);
    }
    for (n, m) in iproduct!(1..rows, 1..cols) {
        let best = pmax(d[(n - 1, m - 1)], pmax(d[(n - 1, m)], d[(n, m - 1)]));
        d[(n, m)] = pmax(zero, best + s[(n, m)]);
    }

    Ok(d)
}

/// Backtrack the score-maximizing path from the global maximum of the
/// accumulated matrix. Ties between equal maxima are resolved towards the
/// first occurrence in row-major order.
///
/// An all-zero matrix yields an empty path, which is a valid trivial result.
pub fn optimal_path<S: Score>(d: &Mat<S>) -> Vec<Cell> {
    match d.argmax() {
        None => Vec::new(),
        Some((row, col)) => optimal_path_from(d, Cell::new(row, col)),
    }
}

/// Backtrack the score-maximizing path from an explicit start cell.
/// The cell must be within the matrix bounds.
pub fn optimal_path_from<S: Score>(d: &Mat<S>, start: Cell) -> Vec<Cell> {
    let zero = S::zero();
    let (mut n, mut m) = (start.row, start.col);
    let mut path = vec![start];

    while (n, m) != (0, 0) && d[(n, m)] != zero {
        let cell = if n == 0 {
            Cell::new(0, m - 1)
        } else if m == 0 {
            Cell::new(n - 1, 0)
        } else {
            // Predecessor priority is diagonal > up > left. The order is
            // load-bearing: it decides which of the equal-score paths is
            // reported.
            let (diag, up, left) = (d[(n - 1, m - 1)], d[(n - 1, m)], d[(n, m - 1)]);
            if diag >= up && diag >= left {
                Cell::new(n - 1, m - 1)
            } else if up >= left {
                Cell::new(n - 1, m)
            } else {
                Cell::new(n, m - 1)
            }
        };
        path.push(cell);
        (n, m) = (cell.row, cell.col);
    }

    // A terminal zero cell is a restart marker, not part of the matched region.
    if d[(n, m)] == zero {
        path.pop();
    }
    path.reverse();
    path
}

/// One-call pipeline: accumulate, backtrack from the global maximum, and
/// induce the matched segments. Returns None when no cell accumulates a
/// positive score (e.g. an everywhere-negative score matrix).
pub fn matching<S: Score>(s: &Mat<S>) -> Result<Option<SubsequenceMatching<S>>, MatchingError> {
    let d = accumulate(s)?;
    let path = optimal_path(&d);

    let last = match path.last() {
        Some(last) => *last,
        None => {
            debug!(
                "no profitable common subsequence in a {}x{} score matrix",
                s.rows(),
                s.cols()
            );
            return Ok(None);
        }
    };

    let score = d[(last.row, last.col)];
    let (seq1, seq2) = induced_spans(&path)?;
    debug!(
        "common subsequence in a {}x{} score matrix: score {:?} over {} cells",
        s.rows(),
        s.cols(),
        score,
        path.len()
    );

    Ok(Some(SubsequenceMatching {
        score,
        path,
        seq1,
        seq2,
    }))
}
