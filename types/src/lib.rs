//! Fundamental types for the TRON wallet core.
//!
//! This crate defines the plain data shared across every other crate in the workspace:
//! addresses, amounts, keys, block references, chain parameters, and state enums.

pub mod address;
pub mod amount;
pub mod asset;
pub mod block;
pub mod error;
pub mod hash;
pub mod keys;
pub mod network;
pub mod params;
pub mod state;
pub mod time;

pub use address::Address;
pub use amount::Amount;
pub use asset::AssetKind;
pub use block::LatestBlock;
pub use error::TypesError;
pub use hash::TxId;
pub use keys::{PrivateKey, PublicKey, Signature};
pub use network::NetworkId;
pub use params::ChainParameters;
pub use state::WalletState;
pub use time::Timestamp;
