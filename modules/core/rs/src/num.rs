use std::fmt::Debug;

/// T values are primitive integers usable as sequence indices
pub trait PrimInt: ::num::PrimInt + Debug + Default {}
impl<T: ::num::PrimInt + Debug + Default> PrimInt for T {}
