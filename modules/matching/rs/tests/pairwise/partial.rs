use approx::assert_abs_diff_eq;
use eyre::Result;

use refrain_core_rs::Mat;
use refrain_matching_rs::pairwise::{partial, Cell};
use refrain_matching_rs::MatchingError;

struct Workload {
    scores: Vec<Vec<f64>>,
    score: f64,
    path: Vec<(usize, usize)>,
}

fn ensure(w: Workload) -> Result<()> {
    let s = Mat::from_rows(w.scores)?;
    let result = partial::matching(&s)?;

    let expected: Vec<_> = w.path.iter().map(|x| Cell::new(x.0, x.1)).collect();
    assert_eq!(*result.score(), w.score);
    assert_eq!(result.path(), &expected);
    Ok(())
}

#[test]
fn test_skip_beats_match_on_ties() -> Result<()> {
    // Two equally good single matches; left > up > diagonal keeps (1, 0).
    ensure(Workload {
        scores: vec![vec![0.0, 1.0], vec![1.0, 0.0]],
        score: 1.0,
        path: vec![(1, 0)],
    })
}

#[test]
fn test_interleaved_matches() -> Result<()> {
    // Matches at (0, 1) and (2, 2); the elements in between are skipped for
    // free on both sides.
    ensure(Workload {
        scores: vec![
            vec![-1.0, 4.0, -1.0],
            vec![-1.0, -1.0, -1.0],
            vec![-1.0, -1.0, 4.0],
        ],
        score: 8.0,
        path: vec![(0, 1), (2, 2)],
    })
}

#[test]
fn test_trailing_suffix_is_free() -> Result<()> {
    // The last row of the first sequence stays unmatched at no cost.
    ensure(Workload {
        scores: vec![vec![3.0, -1.0], vec![-1.0, 3.0], vec![-1.0, -1.0]],
        score: 6.0,
        path: vec![(0, 0), (1, 1)],
    })
}

#[test]
fn test_invalid_inputs() {
    assert_eq!(
        partial::matching(&Mat::<f64>::zeros(5, 0)),
        Err(MatchingError::InvalidShape)
    );

    let mut s = Mat::zeros(2, 4);
    s[(0, 3)] = f64::INFINITY;
    assert_eq!(
        partial::matching(&s),
        Err(MatchingError::NonFiniteInput { row: 0, col: 3 })
    );
}

#[test]
fn test_score_is_the_sum_of_matched_pairs() -> Result<()> {
    let mut rng = super::rng();
    for _ in 0..32 {
        let s = super::random_matrix(&mut rng, 15, 21, -1.0, 1.0);
        let result = partial::matching(&s)?;

        let total: f64 = result.path().iter().map(|x| s[(x.row, x.col)]).sum();
        assert_abs_diff_eq!(total, *result.score(), epsilon = 1e-9);
    }
    Ok(())
}

#[test]
fn test_match_path_is_strictly_monotone() -> Result<()> {
    let mut rng = super::rng();
    let s = super::random_matrix(&mut rng, 25, 25, -1.0, 1.0);
    let result = partial::matching(&s)?;

    for pair in result.path().windows(2) {
        assert!(pair[0].row < pair[1].row);
        assert!(pair[0].col < pair[1].col);
    }
    Ok(())
}

#[test]
fn test_corner_score_is_monotone_in_shape() -> Result<()> {
    // For non-negative scores, growing either sequence can only add
    // matching opportunities, so the corner value never decreases.
    let mut rng = super::rng();
    let s = super::random_matrix(&mut rng, 12, 12, 0.0, 1.0);

    let mut previous = 0.0;
    for rows in 1..=s.rows() {
        let prefix = Mat::from_rows(
            (0..rows)
                .map(|n| (0..s.cols()).map(|m| s[(n, m)]).collect())
                .collect(),
        )?;
        let score = *partial::matching(&prefix)?.score();
        assert!(score >= previous);
        previous = score;
    }

    let mut previous = 0.0;
    for cols in 1..=s.cols() {
        let prefix = Mat::from_rows(
            (0..s.rows())
                .map(|n| (0..cols).map(|m| s[(n, m)]).collect())
                .collect(),
        )?;
        let score = *partial::matching(&prefix)?.score();
        assert!(score >= previous);
        previous = score;
    }
    Ok(())
}
