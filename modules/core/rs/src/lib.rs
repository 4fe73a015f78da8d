pub use mat::Mat;
pub use span::Span;

pub mod mat;
pub mod num;
pub mod span;
