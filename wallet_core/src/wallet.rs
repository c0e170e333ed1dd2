//! The wallet state machine: keys, balances, validation, transfers and history.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use trx_crypto::{decode_address, encode_address, random_address, DerivationPath, KeyMaterial};
use trx_rpc::NodeClient;
use trx_store::{WalletStore, BALANCE_KEY};
use trx_transactions::{attach_reference, build_transfer, sign};
use trx_types::{Address, Amount, AssetKind, NetworkId, PublicKey, TxId, WalletState};

use crate::balance::Balances;
use crate::config::WalletConfig;
use crate::error::WalletError;
use crate::fee::{declared_fee_limit, FeeEstimator};
use crate::history::{HistoryEntry, HistoryPage, TransactionHistory};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKeySettings {
    pub bip44: String,
}

/// What a caller persists to reopen a wallet without its seed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKeyRecord {
    pub settings: PublicKeySettings,
    /// Hex of the 65-byte uncompressed public key.
    pub data: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateKeyExport {
    pub address: String,
    pub privatekey: String,
}

/// A single-asset wallet bound to one node and one store.
///
/// The private key is never kept: operations that sign take the seed, unlock
/// the key for the duration of the call and lock it again.
pub struct Wallet<N: NodeClient, S: WalletStore> {
    config: WalletConfig,
    asset: AssetKind,
    path: DerivationPath,
    dust_threshold: Amount,
    node: N,
    store: S,
    state: WalletState,
    keys: Option<KeyMaterial>,
    balances: Balances,
    fees: FeeEstimator,
    history: TransactionHistory,
}

impl<N: NodeClient, S: WalletStore> Wallet<N, S> {
    pub fn new(config: WalletConfig, node: N, store: S) -> Result<Self, WalletError> {
        let asset = config.asset.to_asset_kind()?;
        let path = config.derivation_path()?;
        let fees = FeeEstimator::new(asset, config.token_fee_limit);
        let history =
            TransactionHistory::new(config.txs_per_page, config.min_confirmations, config.network);
        Ok(Self {
            dust_threshold: Amount::from(config.dust_threshold),
            config,
            asset,
            path,
            node,
            store,
            state: WalletState::Created,
            keys: None,
            balances: Balances::default(),
            fees,
            history,
        })
    }

    // ── Lifecycle ───────────────────────────────────────────────────────

    /// Derive the wallet key from `seed`. Only the public half is retained.
    pub fn create(&mut self, seed: &[u8]) -> Result<(), WalletError> {
        self.state = WalletState::Initializing;
        let mut keys = match KeyMaterial::from_seed(seed, &self.path) {
            Ok(keys) => keys,
            Err(e) => {
                self.state = WalletState::Created;
                return Err(e.into());
            }
        };
        keys.lock();
        self.init(keys)?;
        info!(address = %self.address().unwrap_or_default(), "wallet created");
        Ok(())
    }

    /// Restore a watch-only wallet from a stored public key.
    ///
    /// A record derived under another path leaves the wallet in
    /// `NeedsInitialization`; the caller has to `create` it again.
    pub fn open(&mut self, record: &PublicKeyRecord) -> Result<(), WalletError> {
        self.state = WalletState::Initializing;
        if record.settings.bip44 != self.config.bip44 {
            warn!(
                stored = %record.settings.bip44,
                configured = %self.config.bip44,
                "derivation path changed"
            );
            self.state = WalletState::NeedsInitialization;
            return Ok(());
        }
        let keys = PublicKey::from_hex(&record.data)
            .map_err(|e| WalletError::Key(e.to_string()))
            .and_then(|public| KeyMaterial::watch_only(public).map_err(WalletError::from));
        match keys {
            Ok(keys) => self.init(keys),
            Err(e) => {
                self.state = WalletState::Created;
                Err(e)
            }
        }
    }

    fn init(&mut self, keys: KeyMaterial) -> Result<(), WalletError> {
        let stored = match self.store.get(BALANCE_KEY) {
            Ok(stored) => stored,
            Err(e) => {
                self.state = WalletState::Created;
                return Err(e.into());
            }
        };
        let spendable = stored
            .and_then(|s| s.parse::<Amount>().ok())
            .unwrap_or_default();
        self.balances = match self.asset {
            AssetKind::Coin => Balances {
                coin: spendable,
                token: Amount::ZERO,
            },
            AssetKind::Token { .. } => Balances {
                coin: Amount::ZERO,
                token: spendable,
            },
        };
        self.keys = Some(keys);
        self.state = WalletState::Initialized;
        Ok(())
    }

    /// Resync balances from the node and persist the spendable one.
    ///
    /// Any failure moves the wallet to `Error` and is returned.
    pub async fn load(&mut self) -> Result<(), WalletError> {
        if !self.state.can_load() {
            return Err(WalletError::InvalidState {
                operation: "load",
                state: self.state,
            });
        }
        self.state = WalletState::Loading;
        match self.fetch_balances().await {
            Ok(balances) => {
                self.balances = balances;
                self.state = WalletState::Loaded;
                debug!(coin = %balances.coin, token = %balances.token, "balances loaded");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "wallet load failed");
                self.state = WalletState::Error;
                Err(e)
            }
        }
    }

    async fn fetch_balances(&self) -> Result<Balances, WalletError> {
        let own = encode_address(self.keys("load")?.address());
        let coin = self.node.coin_balance(&own).await?;
        let token = match &self.asset {
            AssetKind::Coin => Amount::ZERO,
            AssetKind::Token { contract } => {
                self.node.token_balance(&own, &encode_address(contract)).await?
            }
        };
        let balances = Balances { coin, token };
        self.persist(&balances)?;
        Ok(balances)
    }

    fn persist(&self, balances: &Balances) -> Result<(), WalletError> {
        self.store
            .set(BALANCE_KEY, &balances.spendable(&self.asset).to_string())?;
        self.store.save()?;
        Ok(())
    }

    /// Drop session caches.
    pub fn cleanup(&mut self) {
        self.fees.clear();
    }

    // ── Validation ──────────────────────────────────────────────────────

    /// Parse a destination and reject it if blank, malformed or our own address.
    pub fn validate_address(&self, address: &str) -> Result<Address, WalletError> {
        let own = self.keys("validate address")?.address();
        if address.trim().is_empty() {
            return Err(WalletError::EmptyAddress);
        }
        let parsed =
            decode_address(address).map_err(|e| WalletError::InvalidAddress(format!("{address}: {e}")))?;
        if parsed == *own {
            return Err(WalletError::DestinationEqualsSource);
        }
        Ok(parsed)
    }

    pub async fn validate_amount(&mut self, address: &str, amount: Amount) -> Result<(), WalletError> {
        self.validate_address(address)?;
        if amount < self.dust_threshold {
            return Err(WalletError::SmallAmount {
                dust_threshold: self.dust_threshold,
            });
        }
        if self.asset.is_token() {
            let fee = self.fee_for(address, amount).await?;
            if fee > self.balances.coin {
                return Err(WalletError::InsufficientCoinForTokenTransaction { required: fee });
            }
        }
        let max_amount = self.max_amount_to(address).await?;
        if amount > max_amount {
            return Err(WalletError::BigAmount { max_amount });
        }
        Ok(())
    }

    /// Fee in sun for sending `amount` to `address`.
    pub async fn estimate_transaction_fee(
        &mut self,
        address: &str,
        amount: Amount,
    ) -> Result<Amount, WalletError> {
        self.validate_address(address)?;
        self.fee_for(address, amount).await
    }

    /// Most that can be sent to `address` right now.
    pub async fn estimate_max_amount(&mut self, address: &str) -> Result<Amount, WalletError> {
        self.validate_address(address)?;
        self.max_amount_to(address).await
    }

    async fn max_amount_to(&mut self, address: &str) -> Result<Amount, WalletError> {
        let fee = match self.asset {
            AssetKind::Coin => self.fee_for(address, self.balances.coin).await?,
            AssetKind::Token { .. } => Amount::ZERO,
        };
        Ok(self.balances.max_amount(&self.asset, fee))
    }

    async fn fee_for(&mut self, address: &str, amount: Amount) -> Result<Amount, WalletError> {
        let own = *self.keys("estimate fee")?.address();
        self.fees.estimate(&self.node, &own, address, amount).await
    }

    // ── Transfers ───────────────────────────────────────────────────────

    /// Validate, build, sign and submit a transfer; debit local balances on success.
    pub async fn create_transaction(
        &mut self,
        address: &str,
        amount: Amount,
        seed: &[u8],
    ) -> Result<TxId, WalletError> {
        self.validate_amount(address, amount).await?;
        let fee = self.fee_for(address, amount).await?;
        let own = *self.keys("create transaction")?.address();

        let unsigned = build_transfer(&self.asset, &own, address, amount)?;
        let block = self.node.latest_block().await?;
        let fee_limit = declared_fee_limit(self.fees.fee_limit(&self.node).await?, fee);
        let referenced = attach_reference(unsigned, &block, fee_limit)?;

        let path = self.path.clone();
        let keys = self.keys_mut("create transaction")?;
        keys.unlock(seed, &path)?;
        let signed = sign(referenced, keys);
        keys.lock();
        let signed = signed?;

        let response = match self.node.submit_transaction(&signed.to_hex()).await {
            Ok(response) => response,
            Err(e) if e.status() == Some(400) => {
                warn!(error = %e, %fee, "node rejected transaction fee");
                return Err(WalletError::InsufficientFee { required: fee });
            }
            Err(e) => return Err(e.into()),
        };
        if !response.is_success() {
            let code = response.code.unwrap_or_default();
            warn!(%code, txid = %signed.txid(), "transaction rejected");
            return Err(WalletError::NodeRejected { code });
        }

        self.balances = self.balances.debit(&self.asset, amount, fee);
        if let Err(e) = self.persist(&self.balances) {
            warn!(error = %e, "balance not persisted after submit");
        }
        info!(txid = %signed.txid(), %amount, %fee, "transaction submitted");
        Ok(signed.txid())
    }

    // ── Keys ────────────────────────────────────────────────────────────

    pub fn public_key_record(&self) -> Result<PublicKeyRecord, WalletError> {
        Ok(PublicKeyRecord {
            settings: PublicKeySettings {
                bip44: self.config.bip44.clone(),
            },
            data: self.keys("export public key")?.public_key().to_hex(),
        })
    }

    /// The wallet's private key, re-derived from `seed`.
    pub fn private_keys(&self, seed: &[u8]) -> Result<Vec<PrivateKeyExport>, WalletError> {
        let keys = self.keys("export private keys")?;
        let derived = KeyMaterial::from_seed(seed, &self.path)?;
        if derived.public_key() != keys.public_key() {
            return Err(WalletError::Key("seed does not belong to this wallet".into()));
        }
        Ok(vec![PrivateKeyExport {
            address: encode_address(derived.address()),
            privatekey: derived.private_key()?.to_hex(),
        }])
    }

    /// Private keys as CSV with an `address,privatekey` header.
    pub fn export_private_keys(&self, seed: &[u8]) -> Result<String, WalletError> {
        let mut csv = String::from("address,privatekey");
        for key in self.private_keys(seed)? {
            csv.push('\n');
            csv.push_str(&key.address);
            csv.push(',');
            csv.push_str(&key.privatekey);
        }
        Ok(csv)
    }

    fn keys(&self, operation: &'static str) -> Result<&KeyMaterial, WalletError> {
        self.keys.as_ref().ok_or(WalletError::InvalidState {
            operation,
            state: self.state,
        })
    }

    fn keys_mut(&mut self, operation: &'static str) -> Result<&mut KeyMaterial, WalletError> {
        let state = self.state;
        self.keys
            .as_mut()
            .ok_or(WalletError::InvalidState { operation, state })
    }

    // ── Accessors ───────────────────────────────────────────────────────

    pub fn state(&self) -> WalletState {
        self.state
    }

    pub fn asset(&self) -> &AssetKind {
        &self.asset
    }

    pub fn network(&self) -> NetworkId {
        self.config.network
    }

    /// The wallet's `T...` address, once keys are present.
    pub fn address(&self) -> Option<String> {
        self.keys.as_ref().map(|k| encode_address(k.address()))
    }

    /// The spendable balance: coin in coin mode, token in token mode.
    pub fn balance(&self) -> Amount {
        self.balances.spendable(&self.asset)
    }

    pub fn coin_balance(&self) -> Amount {
        self.balances.coin
    }

    pub fn token_balance(&self) -> Amount {
        self.balances.token
    }

    pub fn tx_url(&self, id: &str) -> String {
        format!("{}/#/transaction/{id}", self.config.network.explorer_url())
    }

    /// Explorer page of the token contract; `None` for coin wallets.
    pub fn token_url(&self) -> Option<String> {
        self.asset.contract().map(|contract| {
            format!(
                "{}/#/contract/{}",
                self.config.network.explorer_url(),
                encode_address(contract)
            )
        })
    }

    /// A random well-formed address, for exchange flows that need a placeholder deposit.
    pub fn dummy_exchange_deposit_address(&self) -> String {
        encode_address(&random_address())
    }

    // ── History ─────────────────────────────────────────────────────────

    pub async fn load_transactions(
        &mut self,
        cursor: Option<String>,
    ) -> Result<HistoryPage, WalletError> {
        let own = *self.keys("load transactions")?.address();
        self.history
            .load_page(&self.node, &self.asset, &own, cursor)
            .await
    }

    /// A transaction from a page already loaded this session.
    pub fn load_transaction(&self, id: &str) -> Option<&HistoryEntry> {
        self.history.get(id)
    }
}
