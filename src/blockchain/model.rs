use log::{debug, info, warn};

use super::block::timestamp_now;
use super::pow::{self, PowError, SearchLimits};
use super::report::{ChainReport, Violation};
use super::{Block, GENESIS_PREVIOUS_HASH, GENESIS_PROOF};
use crate::transaction::Transaction;

/// In-memory chain of blocks plus the buffer of transactions waiting to be mined.
#[derive(Debug)]
pub struct Blockchain {
    block_chain: Vec<Block>,
    pending_transactions: Vec<Transaction>,
    limits: SearchLimits,
}

impl Default for Blockchain {
    fn default() -> Self {
        Self::new()
    }
}

impl Blockchain {
    /// Initialize a new blockchain with a genesis block and an unbounded proof search.
    pub fn new() -> Self {
        Self::with_limits(SearchLimits::default())
    }

    /// Initialize a new blockchain whose proof searches honour `limits`.
    pub fn with_limits(limits: SearchLimits) -> Self {
        let mut bc = Self {
            block_chain: Vec::new(),
            pending_transactions: Vec::new(),
            limits,
        };
        bc.mine_block(GENESIS_PROOF, GENESIS_PREVIOUS_HASH.to_string());
        bc
    }

    /// Queue a transaction for the next mined block.
    pub fn initiate_transaction(
        &mut self,
        sender: impl Into<String>,
        recipient: impl Into<String>,
        amount: impl Into<String>,
    ) {
        let tx = Transaction::new(sender, recipient, amount);
        debug!(
            "PENDING - {tx} (buffer size: {})",
            self.pending_transactions.len() + 1
        );
        self.pending_transactions.push(tx);
    }

    /// Smallest positive proof solving the puzzle for `previous_proof`.
    /// Does not touch the chain.
    pub fn proof_of_work(&self, previous_proof: i64) -> Result<i64, PowError> {
        pow::search(previous_proof, &self.limits)
    }

    /// Seal every pending transaction into a new block and append it.
    ///
    /// `proof` and `previous_hash` are taken as given; whether they fit the
    /// current head is only checked by [`Blockchain::validate`].
    pub fn mine_block(&mut self, proof: i64, previous_hash: String) -> &Block {
        let index = self.block_chain.len() as u64 + 1;
        let transactions = std::mem::take(&mut self.pending_transactions);
        let block = Block::new(index, timestamp_now(), transactions, proof, previous_hash);
        info!(
            "MINER - sealed block #{} (proof={}, txs={})",
            block.index,
            block.proof,
            block.transactions.len()
        );
        self.block_chain.push(block);
        self.last_block()
    }

    /// Run the full cycle against the current head: proof-of-work from its
    /// proof, hash it, then mine.
    pub fn mine_next_block(&mut self) -> Result<&Block, PowError> {
        let (previous_proof, previous_hash) = {
            let last = self.last_block();
            (last.proof, last.hash())
        };
        let proof = self.proof_of_work(previous_proof).inspect_err(|e| {
            warn!("MINER - no block sealed: {e}");
        })?;
        Ok(self.mine_block(proof, previous_hash))
    }

    /// Walk the whole chain and collect every broken link and unsolved puzzle.
    pub fn validate(&self) -> ChainReport {
        let mut report = ChainReport::default();
        for (pos, pair) in self.block_chain.windows(2).enumerate() {
            let (previous, block) = (&pair[0], &pair[1]);
            // pair[1] sits at position pos + 1, i.e. 1-based index pos + 2
            let index = pos + 2;

            let expected = previous.hash();
            if block.previous_hash != expected {
                report.violations.push(Violation::BrokenLink {
                    index,
                    expected,
                    found: block.previous_hash.clone(),
                });
            }

            if !pow::is_valid_proof(previous.proof, block.proof) {
                report.violations.push(Violation::InvalidProof {
                    index,
                    previous_proof: previous.proof,
                    proof: block.proof,
                });
            }
        }

        for v in &report.violations {
            warn!("Block chain tampered! {v}");
        }
        report
    }

    pub fn is_chain_valid(&self) -> bool {
        self.validate().is_valid()
    }

    /// Return the last block in the chain.
    pub fn last_block(&self) -> &Block {
        self.block_chain
            .last()
            .expect("Blockchain should always have at least the genesis block")
    }

    pub fn blocks(&self) -> &[Block] {
        &self.block_chain
    }

    pub fn pending_transactions(&self) -> &[Transaction] {
        &self.pending_transactions
    }

    pub fn len(&self) -> usize {
        self.block_chain.len()
    }
}
