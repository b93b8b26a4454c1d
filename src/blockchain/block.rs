use std::fmt;

use chrono::Local;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::transaction::Transaction;

/// A single block in the chain holding the transactions sealed at mining time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub index: u64,        // 1-based position in the chain
    pub timestamp: String, // Local wall-clock time at creation
    pub transactions: Vec<Transaction>,
    pub proof: i64,
    pub previous_hash: String,
}

impl Block {
    /// Build a block from raw parts. Nothing is validated here; linkage and
    /// proofs are only checked when the whole chain is validated.
    pub fn new(
        index: u64,
        timestamp: String,
        transactions: Vec<Transaction>,
        proof: i64,
        previous_hash: String,
    ) -> Self {
        Self {
            index,
            timestamp,
            transactions,
            proof,
            previous_hash,
        }
    }

    /// SHA-256 of the block's canonical JSON form, as lowercase hex.
    ///
    /// Object keys (including those of each transaction) are emitted in
    /// sorted order, so the digest depends only on field values.
    pub fn hash(&self) -> String {
        // Relies on serde_json::Map being a BTreeMap (no `preserve_order` feature).
        let canonical = serde_json::json!({
            "index": self.index,
            "previous_hash": self.previous_hash,
            "proof": self.proof,
            "timestamp": self.timestamp,
            "transactions": self.transactions,
        });
        let mut hasher = Sha256::new();
        hasher.update(canonical.to_string().as_bytes());
        hex::encode(hasher.finalize())
    }
}

/// Current local time formatted with microsecond precision.
pub fn timestamp_now() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S%.6f").to_string()
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Block [")?;
        writeln!(f, "    Index: {}", self.index)?;
        writeln!(f, "    Timestamp: {}", self.timestamp)?;
        if self.transactions.is_empty() {
            writeln!(f, "    Transactions: []")?;
        } else {
            writeln!(f, "    Transactions: [")?;
            for tx in &self.transactions {
                writeln!(f, "        {tx}")?;
            }
            writeln!(f, "    ]")?;
        }
        writeln!(f, "    Proof: {}", self.proof)?;
        writeln!(f, "    Previous Hash: {}", self.previous_hash)?;
        write!(f, "]")
    }
}
