pub use address::*;
pub use raffle::*;

pub mod address;
pub mod raffle;
