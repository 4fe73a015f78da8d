pub use error::MatchingError;
pub use score::Score;

mod error;
pub mod pairwise;
mod score;
