use serde::Serialize;
use thiserror::Error;

/// A single inconsistency found while walking the chain.
///
/// `index` is the 1-based position of the offending block, independent of
/// whatever its stored `index` field says.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    #[error("block {index}: previous_hash {found} does not match predecessor hash {expected}")]
    BrokenLink {
        index: usize,
        expected: String,
        found: String,
    },
    #[error("block {index}: proof {proof} does not solve the puzzle for previous proof {previous_proof}")]
    InvalidProof {
        index: usize,
        previous_proof: i64,
        proof: i64,
    },
}

impl Violation {
    pub fn index(&self) -> usize {
        match self {
            Violation::BrokenLink { index, .. } | Violation::InvalidProof { index, .. } => *index,
        }
    }
}

/// Outcome of a full validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainReport {
    pub violations: Vec<Violation>,
}

impl ChainReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Positions of every block involved in at least one violation.
    pub fn tampered_indices(&self) -> Vec<usize> {
        let mut out: Vec<usize> = self.violations.iter().map(Violation::index).collect();
        out.dedup();
        out
    }
}
