use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("amount {0} does not fit a signed 64-bit field")]
    AmountOutOfRange(u128),

    #[error("signing failed: {0}")]
    Signing(String),

    #[error("invalid call data: {0}")]
    InvalidCallData(String),

    #[error("protobuf decode failed: {0}")]
    Decode(#[from] prost::DecodeError),
}
