//! Which asset a wallet instance manages.

use crate::address::Address;
use serde::{Deserialize, Serialize};

/// Native TRX or a TRC20 token identified by its contract address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AssetKind {
    Coin,
    Token { contract: Address },
}

impl AssetKind {
    pub fn is_token(&self) -> bool {
        matches!(self, Self::Token { .. })
    }

    /// The token contract, if this is a token asset.
    pub fn contract(&self) -> Option<&Address> {
        match self {
            Self::Coin => None,
            Self::Token { contract } => Some(contract),
        }
    }
}
