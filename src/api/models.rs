use crate::blockchain::{Block, Blockchain, SearchLimits, Violation};
use crate::transaction::Transaction;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Shared application state: one in-memory chain behind a single lock.
pub struct AppState {
    pub blockchain: Mutex<Blockchain>,
}

impl AppState {
    pub fn new(limits: SearchLimits) -> Self {
        Self {
            blockchain: Mutex::new(Blockchain::with_limits(limits)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SearchLimits::default())
    }
}

/* ---------- Chain API Models ---------- */

/// A block as stored, plus its recomputed hash.
#[derive(Serialize)]
pub struct BlockView<'a> {
    #[serde(flatten)]
    pub block: &'a Block,
    pub hash: String,
}

impl<'a> From<&'a Block> for BlockView<'a> {
    fn from(block: &'a Block) -> Self {
        Self {
            block,
            hash: block.hash(),
        }
    }
}

#[derive(Serialize)]
pub struct ChainResponse<'a> {
    pub length: usize,
    pub chain: Vec<BlockView<'a>>,
}

#[derive(Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub length: usize,
    pub violations: Vec<Violation>,
}

#[derive(Serialize, Deserialize)]
pub struct MineResponse {
    pub index: u64,
    pub proof: i64,
    pub previous_hash: String,
    pub hash: String,
    pub transactions: Vec<Transaction>,
}

/* ---------- TX API Models ---------- */

#[derive(Deserialize)]
pub struct NewTxRequest {
    pub sender: String,
    pub recipient: String,
    pub amount: String,
}

#[derive(Serialize, Deserialize)]
pub struct NewTxResponse {
    pub pending: usize,
}

#[derive(Serialize, Deserialize)]
pub struct PendingResponse {
    pub size: usize,
    pub transactions: Vec<Transaction>,
}
