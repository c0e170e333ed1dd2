//! Transfer transactions for the TRON wallet core.
//!
//! Two contract kinds are supported:
//! - **TransferContract**: native TRX transfer
//! - **TriggerSmartContract**: TRC20 `transfer(address,uint256)` call
//!
//! A transaction goes through three stages: built (contract only), referenced
//! (block anchor, expiration and fee limit attached) and signed.

pub mod builder;
pub mod error;
pub mod proto;
pub mod size;
pub mod trc20;

pub use builder::{attach_reference, build_transfer, sign, SignedTransaction, UnsignedTransaction};
pub use error::TransactionError;
pub use size::{estimate_transfer_size, RESULT_RESERVE_BYTES};
pub use trc20::{decode_transfer_call, encode_transfer_call, TRANSFER_SELECTOR};
