use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use refrain_core_rs::Mat;

mod partial;

pub fn rng() -> SmallRng {
    SmallRng::seed_from_u64(0x5EED)
}

/// Dense random score matrix with entries in [lo, hi).
pub fn random_matrix(rng: &mut SmallRng, rows: usize, cols: usize, lo: f64, hi: f64) -> Mat<f64> {
    let mut mat = Mat::zeros(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            mat[(row, col)] = rng.gen_range(lo..hi);
        }
    }
    mat
}
