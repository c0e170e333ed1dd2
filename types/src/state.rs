//! Wallet lifecycle state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// `Created → Initializing → {Initialized | NeedsInitialization} → Loading → {Loaded | Error}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WalletState {
    #[default]
    Created,
    Initializing,
    Initialized,
    /// The stored derivation path differs from the configured one.
    NeedsInitialization,
    Loading,
    Loaded,
    Error,
}

impl WalletState {
    /// Whether `load` may run from this state.
    pub fn can_load(&self) -> bool {
        matches!(self, Self::Initialized | Self::Loaded | Self::Error)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Initializing => "initializing",
            Self::Initialized => "initialized",
            Self::NeedsInitialization => "needs_initialization",
            Self::Loading => "loading",
            Self::Loaded => "loaded",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for WalletState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
