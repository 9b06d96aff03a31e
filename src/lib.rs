pub mod errors;
pub mod sequence;
pub mod aligner;
pub mod generate;
pub mod io;

pub use aligner::{align, min_cost, LinearSpaceAligner};
