//! Fee estimation under the bandwidth/energy resource model.
//!
//! A transfer burns free bandwidth while the sender has enough left; otherwise
//! every byte is billed at `getTransactionFee`. Token transfers also burn
//! energy billed at `getEnergyFee`. A coin transfer that activates a new
//! account pays the flat account-creation cost instead.

use tracing::debug;
use trx_crypto::encode_address;
use trx_rpc::NodeClient;
use trx_transactions::estimate_transfer_size;
use trx_types::{Address, Amount, AssetKind, ChainParameters};

use crate::WalletError;

/// Fee of a coin transfer.
///
/// A missing destination account costs the flat new-account fee whatever the
/// bandwidth situation.
pub fn coin_transfer_fee(
    params: &ChainParameters,
    destination_exists: bool,
    size: usize,
    free_bandwidth: u64,
) -> Amount {
    if !destination_exists {
        return Amount::from(params.new_account_fee());
    }
    bandwidth_fee(params, size, free_bandwidth)
}

/// Fee of a token transfer: energy, plus bandwidth when free bandwidth runs short.
pub fn token_transfer_fee(
    params: &ChainParameters,
    energy: u64,
    size: usize,
    free_bandwidth: u64,
) -> Amount {
    let energy_fee = Amount::from(energy).saturating_mul(u128::from(params.energy_fee));
    bandwidth_fee(params, size, free_bandwidth).saturating_add(energy_fee)
}

fn bandwidth_fee(params: &ChainParameters, size: usize, free_bandwidth: u64) -> Amount {
    if size as u64 <= free_bandwidth {
        Amount::ZERO
    } else {
        Amount::new(size as u128).saturating_mul(u128::from(params.transaction_fee))
    }
}

/// Fee limit declared on the transaction: never below the computed fee.
pub fn declared_fee_limit(fee_limit: u64, fee: Amount) -> u64 {
    u64::try_from(fee.raw()).unwrap_or(u64::MAX).max(fee_limit)
}

/// Estimates fees for one wallet, caching chain parameters and the fee limit
/// for the session. [`FeeEstimator::clear`] drops both.
#[derive(Debug)]
pub struct FeeEstimator {
    asset: AssetKind,
    token_fee_limit: u64,
    chain_parameters: Option<ChainParameters>,
    fee_limit: Option<u64>,
}

impl FeeEstimator {
    pub fn new(asset: AssetKind, token_fee_limit: u64) -> Self {
        Self {
            asset,
            token_fee_limit,
            chain_parameters: None,
            fee_limit: None,
        }
    }

    pub async fn chain_parameters<N: NodeClient>(
        &mut self,
        node: &N,
    ) -> Result<ChainParameters, WalletError> {
        if let Some(params) = self.chain_parameters {
            return Ok(params);
        }
        let params = node.chain_parameters().await?;
        self.chain_parameters = Some(params);
        Ok(params)
    }

    /// Coin: the new-account cost. Token: the configured energy ceiling.
    pub async fn fee_limit<N: NodeClient>(&mut self, node: &N) -> Result<u64, WalletError> {
        if let Some(limit) = self.fee_limit {
            return Ok(limit);
        }
        let limit = match self.asset {
            AssetKind::Coin => self.chain_parameters(node).await?.new_account_fee(),
            AssetKind::Token { .. } => self.token_fee_limit,
        };
        self.fee_limit = Some(limit);
        Ok(limit)
    }

    /// Fee, in sun, for sending `value` from `from` to the `T...` address `to`.
    pub async fn estimate<N: NodeClient>(
        &mut self,
        node: &N,
        from: &Address,
        to: &str,
        value: Amount,
    ) -> Result<Amount, WalletError> {
        let params = self.chain_parameters(node).await?;
        let fee_limit = self.fee_limit(node).await?;
        let from_text = encode_address(from);

        let fee = match &self.asset {
            AssetKind::Coin => {
                if node.account(to).await?.is_none() {
                    debug!(to, "destination account does not exist");
                    return Ok(coin_transfer_fee(&params, false, 0, 0));
                }
                let resources = node.resources(&from_text).await?;
                let size = estimate_transfer_size(&self.asset, from, to, value, fee_limit)?;
                let fee = coin_transfer_fee(&params, true, size, resources.free_bandwidth());
                debug!(size, free = resources.free_bandwidth(), %fee, "coin transfer fee");
                fee
            }
            AssetKind::Token { contract } => {
                let energy = node
                    .estimate_energy(&encode_address(contract), &from_text, to, value)
                    .await?;
                let resources = node.resources(&from_text).await?;
                let size = estimate_transfer_size(&self.asset, from, to, value, fee_limit)?;
                let fee = token_transfer_fee(&params, energy, size, resources.free_bandwidth());
                debug!(energy, size, free = resources.free_bandwidth(), %fee, "token transfer fee");
                fee
            }
        };
        Ok(fee)
    }

    /// Forget cached chain parameters and fee limit.
    pub fn clear(&mut self) {
        self.chain_parameters = None;
        self.fee_limit = None;
    }
}
