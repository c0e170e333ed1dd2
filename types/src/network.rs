//! Network identifier.

use crate::error::TypesError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which TRON network the wallet talks to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkId {
    /// The production network.
    #[default]
    Mainnet,
    /// The Nile public test network.
    Nile,
}

impl NetworkId {
    /// Base URL of the block explorer for this network.
    pub fn explorer_url(&self) -> &'static str {
        match self {
            Self::Mainnet => "https://tronscan.org",
            Self::Nile => "https://nile.tronscan.org",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Nile => "nile",
        }
    }
}

impl FromStr for NetworkId {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(Self::Mainnet),
            "nile" | "testnet" => Ok(Self::Nile),
            other => Err(TypesError::UnknownNetwork(other.to_string())),
        }
    }
}
