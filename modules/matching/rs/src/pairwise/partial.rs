//! Partial matching: global alignment with free end-gaps. Unlike the
//! common-subsequence variant there is no step-size restriction; unmatched
//! elements of either sequence are skipped at zero cost and only matched
//! index pairs are reported.

use derive_getters::{Dissolve, Getters};
use derive_more::{Constructor, From, Into};
use itertools::iproduct;
use log::debug;

use refrain_core_rs::Mat;

use super::path::Cell;
use super::{pmax, validated};
use crate::{MatchingError, Score};

/// Result of partial matching: the total score, the (N+1)x(M+1) accumulated
/// matrix, and the chronological list of matched index pairs.
#[derive(Clone, PartialEq, Debug, Getters, Constructor, Dissolve, From, Into)]
pub struct PartialMatching<S: Score> {
    score: S,
    accumulated: Mat<S>,
    path: Vec<Cell>,
}

/// Accumulated score matrix for partial matching, shape (N+1)x(M+1).
///
/// The extra first row and column hold the empty-prefix boundary and stay
/// zero: skipping a prefix of either sequence costs nothing.
pub fn accumulate<S: Score>(s: &Mat<S>) -> Result<Mat<S>, MatchingError> {
    validated(s)?;

    let (rows, cols) = s.shape();
    let mut d = Mat::zeros(rows + 1, cols + 1);
    for (n, m) in iproduct!(1..=rows, 1..=cols) {
        let matched = d[(n - 1, m - 1)] + s[(n - 1, m - 1)];
        d[(n, m)] = pmax(matched, pmax(d[(n, m - 1)], d[(n - 1, m)]));
    }

    Ok(d)
}

/// Backtrack the matched index pairs from an accumulated partial-matching
/// matrix (as produced by [`accumulate`], shape at least 2x2).
///
/// Skips are preferred over matches: the tie-break order is left > up >
/// diagonal, deliberately the opposite of the common-subsequence traceback.
pub fn match_path<S: Score>(d: &Mat<S>) -> Vec<Cell> {
    if d.is_empty() {
        return Vec::new();
    }

    let (mut n, mut m) = (d.rows() - 1, d.cols() - 1);
    let mut path = Vec::new();

    while n > 0 && m > 0 {
        if d[(n, m)] == d[(n, m - 1)] {
            m -= 1;
        } else if d[(n, m)] == d[(n - 1, m)] {
            n -= 1;
        } else {
            path.push(Cell::new(n - 1, m - 1));
            n -= 1;
            m -= 1;
        }
    }

    path.reverse();
    path
}

/// One-call pipeline: accumulate and backtrack. The score is the corner
/// value D[N, M]; an empty match path is a valid trivial result.
pub fn matching<S: Score>(s: &Mat<S>) -> Result<PartialMatching<S>, MatchingError> {
    let accumulated = accumulate(s)?;
    let path = match_path(&accumulated);
    let score = accumulated[(s.rows(), s.cols())];
    debug!(
        "partial matching in a {}x{} score matrix: score {:?} over {} matched pairs",
        s.rows(),
        s.cols(),
        score,
        path.len()
    );

    Ok(PartialMatching {
        score,
        accumulated,
        path,
    })
}
