pub mod block;
pub mod model;
pub mod pow;
pub mod report;

pub use block::Block;
pub use model::Blockchain;
pub use pow::{PowError, SearchLimits};
pub use report::Violation;

/// Hex prefix a puzzle digest must start with (fixed difficulty).
pub const DIFFICULTY_PREFIX: &str = "0000";

/// Proof recorded in the genesis block.
pub const GENESIS_PROOF: i64 = 1;

/// Sentinel `previous_hash` of the genesis block.
pub const GENESIS_PREVIOUS_HASH: &str = "0";
