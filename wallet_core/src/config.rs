//! Wallet configuration with TOML file support.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use trx_crypto::{decode_address, parse_derivation_path, DerivationPath, DEFAULT_BIP44_PATH};
use trx_rpc::{HttpNodeClient, DEFAULT_PAGE_SIZE};
use trx_types::{AssetKind, NetworkId};
use trx_utils::LogFormat;

use crate::WalletError;

/// Which asset the wallet manages, with the token contract in `T...` form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AssetConfig {
    #[default]
    Coin,
    Token { address: String },
}

impl AssetConfig {
    pub fn to_asset_kind(&self) -> Result<AssetKind, WalletError> {
        match self {
            Self::Coin => Ok(AssetKind::Coin),
            Self::Token { address } => decode_address(address)
                .map(|contract| AssetKind::Token { contract })
                .map_err(|e| WalletError::Config(format!("token address {address}: {e}"))),
        }
    }
}

/// Configuration for one wallet instance.
///
/// Can be loaded from a TOML file via [`WalletConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletConfig {
    /// Base URL of the node API.
    #[serde(default = "default_node_url")]
    pub node_url: String,

    #[serde(default)]
    pub network: NetworkId,

    /// Derivation path of the wallet key.
    #[serde(default = "default_bip44")]
    pub bip44: String,

    /// History page size.
    #[serde(default = "default_txs_per_page")]
    pub txs_per_page: u32,

    /// Confirmations after which a successful transaction is final.
    #[serde(default = "default_min_confirmations")]
    pub min_confirmations: u64,

    /// Smallest amount the wallet will send.
    #[serde(default = "default_dust_threshold")]
    pub dust_threshold: u64,

    /// Energy fee ceiling declared on token transfers, in sun.
    #[serde(default = "default_token_fee_limit")]
    pub token_fee_limit: u64,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Must stay the last field: TOML tables follow plain keys.
    #[serde(default)]
    pub asset: AssetConfig,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_node_url() -> String {
    "http://127.0.0.1:8090".to_string()
}

fn default_bip44() -> String {
    DEFAULT_BIP44_PATH.to_string()
}

fn default_txs_per_page() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_min_confirmations() -> u64 {
    21
}

fn default_dust_threshold() -> u64 {
    1
}

fn default_token_fee_limit() -> u64 {
    10_000_000
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl WalletConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, WalletError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| WalletError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, WalletError> {
        toml::from_str(s).map_err(|e| WalletError::Config(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, WalletError> {
        toml::to_string_pretty(self).map_err(|e| WalletError::Config(e.to_string()))
    }

    pub fn derivation_path(&self) -> Result<DerivationPath, WalletError> {
        parse_derivation_path(&self.bip44).map_err(|e| WalletError::Config(format!("bip44: {e}")))
    }

    /// An HTTP node client for `node_url` with the configured timeout.
    pub fn node_client(&self) -> Result<HttpNodeClient, WalletError> {
        HttpNodeClient::new(
            self.node_url.clone(),
            Duration::from_secs(self.request_timeout_secs),
        )
        .map_err(|e| WalletError::Config(e.to_string()))
    }

    /// Install the tracing subscriber described by `log_format` and `log_level`.
    pub fn init_logging(&self) -> Result<(), WalletError> {
        trx_utils::init_logging(self.log_format, &self.log_level)
            .map_err(|e| WalletError::Config(e.to_string()))
    }
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            node_url: default_node_url(),
            network: NetworkId::default(),
            bip44: default_bip44(),
            txs_per_page: default_txs_per_page(),
            min_confirmations: default_min_confirmations(),
            dust_threshold: default_dust_threshold(),
            token_fee_limit: default_token_fee_limit(),
            request_timeout_secs: default_request_timeout_secs(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
            asset: AssetConfig::default(),
        }
    }
}
