//! Nullable infrastructure for deterministic testing.
//!
//! The wallet's external collaborators (node, storage) sit behind traits. This
//! crate provides in-memory implementations that:
//! - Return scripted values
//! - Record what was sent to them
//! - Never touch the filesystem or network
//!
//! Usage: swap real implementations for nullables in tests.

pub mod node;
pub mod store;

pub use node::NullNodeClient;
pub use store::NullStore;
