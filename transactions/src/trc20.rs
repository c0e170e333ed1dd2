//! Call data for the TRC20 `transfer(address,uint256)` method.

use crate::error::TransactionError;
use trx_types::{Address, Amount};

/// First four bytes of `keccak256("transfer(address,uint256)")`.
pub const TRANSFER_SELECTOR: [u8; 4] = [0xa9, 0x05, 0x9c, 0xbb];

const WORD: usize = 32;
const CALL_LEN: usize = 4 + 2 * WORD;

/// Encode `transfer(to, value)`.
///
/// The address word carries the 20-byte body; the network prefix is replaced by
/// the zero padding EVM addresses use.
pub fn encode_transfer_call(to: &Address, value: Amount) -> Vec<u8> {
    let mut data = Vec::with_capacity(CALL_LEN);
    data.extend_from_slice(&TRANSFER_SELECTOR);
    data.extend_from_slice(&[0u8; WORD - 20]);
    data.extend_from_slice(to.body());
    data.extend_from_slice(&[0u8; WORD - 16]);
    data.extend_from_slice(&value.raw().to_be_bytes());
    data
}

/// Decode `transfer(to, value)` call data back to recipient and amount.
pub fn decode_transfer_call(data: &[u8]) -> Result<(Address, Amount), TransactionError> {
    if data.len() < CALL_LEN {
        return Err(TransactionError::InvalidCallData(format!(
            "expected {CALL_LEN} bytes, got {}",
            data.len()
        )));
    }
    if data[..4] != TRANSFER_SELECTOR {
        return Err(TransactionError::InvalidCallData(format!(
            "unknown selector {}",
            hex::encode(&data[..4])
        )));
    }
    let address_word = &data[4..4 + WORD];
    let mut body = [0u8; 20];
    body.copy_from_slice(&address_word[WORD - 20..]);

    let value_word = &data[4 + WORD..CALL_LEN];
    if value_word[..WORD - 16].iter().any(|b| *b != 0) {
        return Err(TransactionError::InvalidCallData(
            "value exceeds 128 bits".to_string(),
        ));
    }
    let mut value = [0u8; 16];
    value.copy_from_slice(&value_word[WORD - 16..]);

    Ok((Address::from_body(body), Amount::new(u128::from_be_bytes(value))))
}
