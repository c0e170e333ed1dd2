//! Chain fee parameters reported by the node.
//!
//! Field names follow the node's `getXxx` keys. Any key the node omits falls back
//! to the long-standing mainnet value.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainParameters {
    /// Sun charged per byte of bandwidth once free bandwidth is exhausted.
    #[serde(rename = "getTransactionFee")]
    pub transaction_fee: u64,

    /// Sun charged per unit of energy.
    #[serde(rename = "getEnergyFee")]
    pub energy_fee: u64,

    #[serde(rename = "getCreateAccountFee")]
    pub create_account_fee: u64,

    #[serde(rename = "getCreateNewAccountFeeInSystemContract")]
    pub create_new_account_fee_in_system_contract: u64,
}

impl ChainParameters {
    /// Flat cost of a transfer that activates a new account.
    pub fn new_account_fee(&self) -> u64 {
        self.create_account_fee
            .saturating_add(self.create_new_account_fee_in_system_contract)
    }
}

impl Default for ChainParameters {
    fn default() -> Self {
        Self {
            transaction_fee: 1_000,
            energy_fee: 420,
            create_account_fee: 100_000,
            create_new_account_fee_in_system_contract: 1_000_000,
        }
    }
}
