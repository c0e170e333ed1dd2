//! Local balance bookkeeping.
//!
//! Coin wallets track only the coin balance. Token wallets track the token
//! balance (what the user spends) and the coin balance (what pays fees).

use trx_types::{Amount, AssetKind};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Balances {
    pub coin: Amount,
    pub token: Amount,
}

impl Balances {
    /// The balance the user spends from.
    pub fn spendable(&self, asset: &AssetKind) -> Amount {
        match asset {
            AssetKind::Coin => self.coin,
            AssetKind::Token { .. } => self.token,
        }
    }

    /// Largest amount that can be sent once `fee` is paid.
    ///
    /// Coin: `max(0, coin - fee)`. Token: the whole token balance, since the fee
    /// comes out of the coin balance.
    pub fn max_amount(&self, asset: &AssetKind, fee: Amount) -> Amount {
        match asset {
            AssetKind::Coin => self.coin.saturating_sub(fee),
            AssetKind::Token { .. } => self.token,
        }
    }

    /// Balances after a submitted transfer, floored at zero.
    pub fn debit(&self, asset: &AssetKind, amount: Amount, fee: Amount) -> Self {
        match asset {
            AssetKind::Coin => Self {
                coin: self.coin.saturating_sub(amount.saturating_add(fee)),
                token: self.token,
            },
            AssetKind::Token { .. } => Self {
                coin: self.coin.saturating_sub(fee),
                token: self.token.saturating_sub(amount),
            },
        }
    }
}
