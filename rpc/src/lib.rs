//! Node access for the TRON wallet core.
//!
//! The wallet never talks HTTP directly. It depends on the [`NodeClient`] trait,
//! implemented here over reqwest by [`HttpNodeClient`] and in-memory by
//! `trx-nullables` for tests.

pub mod client;
pub mod error;
pub mod http;
pub mod pagination;
pub mod types;

pub use client::NodeClient;
pub use error::RpcError;
pub use http::HttpNodeClient;
pub use pagination::{has_more, PageRequest, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use types::{
    AccountInfo, AccountResources, ContractParameter, LatestBlockResponse, PageMeta, RawContract,
    RawData, RawTransaction, SubmitResponse, Trc20Transfer, TransactionsPage, TxResult,
};
