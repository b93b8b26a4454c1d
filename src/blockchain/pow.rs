use log::debug;
use sha2::{Digest, Sha256};
use thiserror::Error;

use super::DIFFICULTY_PREFIX;

/// Why a proof search stopped without a solution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PowError {
    #[error("proof search gave up after {attempts} attempts")]
    AttemptsExhausted { attempts: u64 },
    #[error("proof search ran out of candidate proofs")]
    ProofSpaceExhausted,
}

/// Bounds on a proof search. The default is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    pub max_attempts: Option<u64>,
}

impl SearchLimits {
    pub fn with_max_attempts(max_attempts: u64) -> Self {
        Self {
            max_attempts: Some(max_attempts),
        }
    }
}

/// Hex SHA-256 of the decimal text of `proof² - previous_proof²`.
///
/// Squares of any i64 fit in i128 (at most 2^126), so the difference
/// never overflows.
pub fn puzzle_digest(previous_proof: i64, proof: i64) -> String {
    let p = i128::from(proof);
    let q = i128::from(previous_proof);
    let mut hasher = Sha256::new();
    hasher.update((p * p - q * q).to_string().as_bytes());
    hex::encode(hasher.finalize())
}

/// Whether `proof` solves the puzzle relative to `previous_proof`.
pub fn is_valid_proof(previous_proof: i64, proof: i64) -> bool {
    puzzle_digest(previous_proof, proof).starts_with(DIFFICULTY_PREFIX)
}

/// Find the smallest positive proof that solves the puzzle for
/// `previous_proof`, counting up from 1.
pub fn search(previous_proof: i64, limits: &SearchLimits) -> Result<i64, PowError> {
    let mut candidate: i64 = 1;
    let mut attempts: u64 = 0;
    loop {
        if limits.max_attempts.is_some_and(|max| attempts >= max) {
            return Err(PowError::AttemptsExhausted { attempts });
        }

        attempts += 1;
        if is_valid_proof(previous_proof, candidate) {
            debug!("POW - previous_proof={previous_proof} solved by {candidate} ({attempts} attempts)");
            return Ok(candidate);
        }
        candidate = candidate
            .checked_add(1)
            .ok_or(PowError::ProofSpaceExhausted)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn found_proof_is_valid_and_minimal() {
        for previous in [1_i64, 2, 533, 100_000] {
            let proof = search(previous, &SearchLimits::default()).unwrap();
            assert!(proof >= 1);
            assert!(puzzle_digest(previous, proof).starts_with("0000"));
            assert!((1..proof).all(|p| !is_valid_proof(previous, p)));
        }
    }

    #[test]
    fn digest_is_sha256_of_decimal_difference() {
        // 3² - 5² = -16
        let expected = hex::encode(Sha256::digest(b"-16"));
        assert_eq!(puzzle_digest(5, 3), expected);
    }

    #[test]
    fn extreme_proofs_do_not_overflow() {
        let d = puzzle_digest(i64::MIN, i64::MAX);
        assert_eq!(d.len(), 64);
        let d = puzzle_digest(i64::MAX, i64::MIN);
        assert_eq!(d.len(), 64);
    }

    #[test]
    fn attempt_cap_stops_search() {
        let err = search(1, &SearchLimits::with_max_attempts(1)).unwrap_err();
        // Proof 1 against previous 1 hashes "0", which does not start with 0000.
        assert_eq!(err, PowError::AttemptsExhausted { attempts: 1 });

        let err = search(1, &SearchLimits::with_max_attempts(0)).unwrap_err();
        assert_eq!(err, PowError::AttemptsExhausted { attempts: 0 });
    }

    #[test]
    fn cap_large_enough_still_finds_proof() {
        let unbounded = search(7, &SearchLimits::default()).unwrap();
        let attempts = u64::try_from(unbounded).unwrap();
        assert_eq!(search(7, &SearchLimits::with_max_attempts(attempts)), Ok(unbounded));
    }
}
