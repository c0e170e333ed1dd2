//! Nullable node: scripted responses, recorded submissions, call counters.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use trx_rpc::{
    AccountInfo, AccountResources, NodeClient, PageRequest, RawTransaction, RpcError,
    SubmitResponse, Trc20Transfer, TransactionsPage,
};
use trx_types::{Amount, ChainParameters, LatestBlock};

#[derive(Default)]
struct Script {
    coin_balances: HashMap<String, Amount>,
    token_balances: HashMap<(String, String), Amount>,
    accounts: HashMap<String, AccountInfo>,
    resources: HashMap<String, AccountResources>,
    chain_parameters: ChainParameters,
    latest_block: Option<LatestBlock>,
    energy: u64,
    submit_response: SubmitResponse,
    submit_status: Option<u16>,
    read_failure: Option<String>,
    transaction_pages: VecDeque<TransactionsPage<RawTransaction>>,
    token_pages: VecDeque<TransactionsPage<Trc20Transfer>>,
}

/// An in-memory [`NodeClient`] whose answers are set up by the test.
///
/// Unscripted accounts do not exist, have zero balance and no free bandwidth.
/// Submissions succeed with code `SUCCESS` unless told otherwise.
pub struct NullNodeClient {
    script: Mutex<Script>,
    submitted: Mutex<Vec<String>>,
    page_requests: Mutex<Vec<PageRequest>>,
    calls: Mutex<HashMap<&'static str, usize>>,
}

impl NullNodeClient {
    pub fn new() -> Self {
        let script = Script {
            submit_response: SubmitResponse {
                code: Some(SubmitResponse::SUCCESS.to_string()),
                txid: None,
            },
            ..Default::default()
        };
        Self {
            script: Mutex::new(script),
            submitted: Mutex::new(Vec::new()),
            page_requests: Mutex::new(Vec::new()),
            calls: Mutex::new(HashMap::new()),
        }
    }

    // ── Scripting ───────────────────────────────────────────────────────

    pub fn set_coin_balance(&self, address: &str, balance: u128) {
        self.script
            .lock()
            .unwrap()
            .coin_balances
            .insert(address.into(), Amount::new(balance));
    }

    pub fn set_token_balance(&self, address: &str, token: &str, balance: u128) {
        self.script
            .lock()
            .unwrap()
            .token_balances
            .insert((address.into(), token.into()), Amount::new(balance));
    }

    /// Mark `address` as an activated account.
    pub fn add_account(&self, address: &str) {
        self.script.lock().unwrap().accounts.insert(
            address.into(),
            AccountInfo {
                address: Some(address.into()),
                ..Default::default()
            },
        );
    }

    pub fn set_resources(&self, address: &str, free_net_limit: u64, free_net_used: u64) {
        self.script.lock().unwrap().resources.insert(
            address.into(),
            AccountResources {
                free_net_limit,
                free_net_used,
            },
        );
    }

    pub fn set_chain_parameters(&self, params: ChainParameters) {
        self.script.lock().unwrap().chain_parameters = params;
    }

    pub fn set_latest_block(&self, block: LatestBlock) {
        self.script.lock().unwrap().latest_block = Some(block);
    }

    pub fn set_energy(&self, energy: u64) {
        self.script.lock().unwrap().energy = energy;
    }

    /// Respond to submissions with this code (and no txid).
    pub fn set_submit_code(&self, code: &str) {
        self.script.lock().unwrap().submit_response = SubmitResponse {
            code: Some(code.into()),
            txid: None,
        };
    }

    /// Fail submissions with this HTTP status.
    pub fn set_submit_status(&self, status: u16) {
        self.script.lock().unwrap().submit_status = Some(status);
    }

    /// Make every read fail with a transport error until `heal` is called.
    pub fn fail_reads(&self, message: &str) {
        self.script.lock().unwrap().read_failure = Some(message.into());
    }

    pub fn heal(&self) {
        self.script.lock().unwrap().read_failure = None;
    }

    /// Queue a page for the next `transactions` call.
    pub fn push_transactions_page(&self, data: Vec<RawTransaction>, fingerprint: Option<&str>) {
        self.script
            .lock()
            .unwrap()
            .transaction_pages
            .push_back(page(data, fingerprint));
    }

    /// Queue a page for the next `token_transactions` call.
    pub fn push_token_transactions_page(&self, data: Vec<Trc20Transfer>, fingerprint: Option<&str>) {
        self.script
            .lock()
            .unwrap()
            .token_pages
            .push_back(page(data, fingerprint));
    }

    // ── Assertions ──────────────────────────────────────────────────────

    /// Hex payloads passed to `submit_transaction`, in order.
    pub fn submitted(&self) -> Vec<String> {
        self.submitted.lock().unwrap().clone()
    }

    /// Page requests received by either history endpoint, in order.
    pub fn page_requests(&self) -> Vec<PageRequest> {
        self.page_requests.lock().unwrap().clone()
    }

    /// How many times the named trait method was called.
    pub fn calls(&self, method: &str) -> usize {
        self.calls.lock().unwrap().get(method).copied().unwrap_or(0)
    }

    fn enter(&self, method: &'static str) -> Result<(), RpcError> {
        *self.calls.lock().unwrap().entry(method).or_insert(0) += 1;
        match &self.script.lock().unwrap().read_failure {
            Some(message) => Err(RpcError::Transport(message.clone())),
            None => Ok(()),
        }
    }
}

impl Default for NullNodeClient {
    fn default() -> Self {
        Self::new()
    }
}

fn page<T>(data: Vec<T>, fingerprint: Option<&str>) -> TransactionsPage<T> {
    TransactionsPage {
        data,
        meta: Some(trx_rpc::PageMeta {
            fingerprint: fingerprint.map(str::to_string),
        }),
    }
}

#[async_trait]
impl NodeClient for NullNodeClient {
    async fn coin_balance(&self, address: &str) -> Result<Amount, RpcError> {
        self.enter("coin_balance")?;
        Ok(self
            .script
            .lock()
            .unwrap()
            .coin_balances
            .get(address)
            .copied()
            .unwrap_or_default())
    }

    async fn token_balance(&self, address: &str, token: &str) -> Result<Amount, RpcError> {
        self.enter("token_balance")?;
        Ok(self
            .script
            .lock()
            .unwrap()
            .token_balances
            .get(&(address.to_string(), token.to_string()))
            .copied()
            .unwrap_or_default())
    }

    async fn account(&self, address: &str) -> Result<Option<AccountInfo>, RpcError> {
        self.enter("account")?;
        Ok(self.script.lock().unwrap().accounts.get(address).cloned())
    }

    async fn resources(&self, address: &str) -> Result<AccountResources, RpcError> {
        self.enter("resources")?;
        Ok(self
            .script
            .lock()
            .unwrap()
            .resources
            .get(address)
            .copied()
            .unwrap_or_default())
    }

    async fn chain_parameters(&self) -> Result<ChainParameters, RpcError> {
        self.enter("chain_parameters")?;
        Ok(self.script.lock().unwrap().chain_parameters)
    }

    async fn latest_block(&self) -> Result<LatestBlock, RpcError> {
        self.enter("latest_block")?;
        self.script
            .lock()
            .unwrap()
            .latest_block
            .ok_or_else(|| RpcError::InvalidResponse("no latest block scripted".into()))
    }

    async fn estimate_energy(
        &self,
        _token: &str,
        _from: &str,
        _to: &str,
        _value: Amount,
    ) -> Result<u64, RpcError> {
        self.enter("estimate_energy")?;
        Ok(self.script.lock().unwrap().energy)
    }

    async fn submit_transaction(&self, transaction_hex: &str) -> Result<SubmitResponse, RpcError> {
        *self.calls.lock().unwrap().entry("submit_transaction").or_insert(0) += 1;
        self.submitted.lock().unwrap().push(transaction_hex.to_string());
        let script = self.script.lock().unwrap();
        if let Some(status) = script.submit_status {
            return Err(RpcError::Status {
                status,
                body: "scripted submit failure".into(),
            });
        }
        Ok(script.submit_response.clone())
    }

    async fn transactions(
        &self,
        _address: &str,
        page_request: &PageRequest,
    ) -> Result<TransactionsPage<RawTransaction>, RpcError> {
        self.enter("transactions")?;
        self.page_requests.lock().unwrap().push(page_request.clone());
        Ok(self
            .script
            .lock()
            .unwrap()
            .transaction_pages
            .pop_front()
            .unwrap_or_else(|| page(Vec::new(), None)))
    }

    async fn token_transactions(
        &self,
        _address: &str,
        _token: &str,
        page_request: &PageRequest,
    ) -> Result<TransactionsPage<Trc20Transfer>, RpcError> {
        self.enter("token_transactions")?;
        self.page_requests.lock().unwrap().push(page_request.clone());
        Ok(self
            .script
            .lock()
            .unwrap()
            .token_pages
            .pop_front()
            .unwrap_or_else(|| page(Vec::new(), None)))
    }
}
