use std::fmt::Debug;

use num::Num;

/// Scores admissible in pairwise score matrices.
pub trait Score: Num + PartialOrd + Copy + Debug + Default {
    /// Non-finite values poison max-plus accumulation, so the engine rejects
    /// them at the input boundary. Always true for integer scores.
    fn is_finite(&self) -> bool;
}

macro_rules! impl_int_score {
    ($($int:ty),*) => {$(
        impl Score for $int {
            #[inline(always)]
            fn is_finite(&self) -> bool {
                true
            }
        }
    )*};
}

impl_int_score!(i8, i16, i32, i64, i128, isize);

impl Score for f32 {
    #[inline(always)]
    fn is_finite(&self) -> bool {
        f32::is_finite(*self)
    }
}

impl Score for f64 {
    #[inline(always)]
    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}
