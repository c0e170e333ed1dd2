//! Reference block data used to anchor a transaction to recent chain state.

use serde::{Deserialize, Serialize};

/// The latest block as reported by the node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestBlock {
    /// 32-byte block id; the first 8 bytes encode the block number.
    pub id: [u8; 32],
    pub number: u64,
    /// Block timestamp in milliseconds.
    pub timestamp: u64,
}

impl LatestBlock {
    /// Validity window applied on top of the block timestamp.
    pub const EXPIRATION_MS: u64 = 5 * 60 * 1000;

    /// The two low-order bytes of the block number.
    pub fn ref_block_bytes(&self) -> [u8; 2] {
        let be = self.number.to_be_bytes();
        [be[6], be[7]]
    }

    /// Eight bytes of the block id starting at offset 8.
    pub fn ref_block_hash(&self) -> [u8; 8] {
        let mut out = [0u8; 8];
        out.copy_from_slice(&self.id[8..16]);
        out
    }

    pub fn expiration(&self) -> u64 {
        self.timestamp.saturating_add(Self::EXPIRATION_MS)
    }
}
