/// Shared test fixtures for the ledger pipeline tests
///
/// Provides a scripted gateway (canned object listings, call counters, an
/// optional hook fired on the owned-objects query) and builders for
/// expense-group content in the node's wire shape.
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use futures::future::BoxFuture;
use serde_json::{json, Value};

use sui_split::{
    GatewayError, LedgerGateway, OnChainObject, WalletCapability, WalletSession,
};

pub const EXPENSE_GROUP_TYPE: &str = "0x123::sui_split::ExpenseGroup";

/// Capability that always grants the given address.
pub struct GrantCapability(pub String);

impl WalletCapability for GrantCapability {
    fn request_address(&self) -> BoxFuture<'_, Result<String, String>> {
        let address = self.0.clone();
        Box::pin(async move { Ok(address) })
    }
}

/// Session already connected to `address`.
pub async fn connected_session(address: &str) -> Arc<WalletSession> {
    let session = Arc::new(WalletSession::new());
    session
        .connect(&GrantCapability(address.to_string()))
        .await
        .expect("fixture connect");
    session
}

/// Group content in the Move-object wire shape: named participants and
/// string-encoded expense amounts.
pub fn group_content(names: &[&str], amounts: &[f64]) -> Value {
    let participants: Vec<Value> = names
        .iter()
        .map(|name| json!({ "fields": { "name": name } }))
        .collect();
    let expenses: Vec<Value> = amounts
        .iter()
        .map(|amount| json!({ "fields": { "amount": amount.to_string() } }))
        .collect();

    json!({
        "dataType": "moveObject",
        "type": EXPENSE_GROUP_TYPE,
        "fields": {
            "participants": { "fields": { "contents": participants } },
            "expenses": { "fields": { "contents": expenses } },
        }
    })
}

pub fn group_object(object_id: &str, content: Value) -> OnChainObject {
    OnChainObject {
        object_id: object_id.to_string(),
        type_tag: EXPENSE_GROUP_TYPE.to_string(),
        content,
    }
}

pub fn foreign_object(object_id: &str) -> OnChainObject {
    OnChainObject {
        object_id: object_id.to_string(),
        type_tag: "0x2::coin::Coin<0x2::sui::SUI>".to_string(),
        content: Value::Null,
    }
}

/// Scripted gateway used in place of the live RPC client.
pub struct FixtureGateway {
    objects: Vec<OnChainObject>,
    fail_owned: bool,
    balance: Option<f64>,
    pub owned_calls: AtomicUsize,
    pub content_calls: AtomicUsize,
    pub balance_calls: AtomicUsize,
    on_owned: Mutex<Option<Box<dyn FnOnce() + Send>>>,
}

impl FixtureGateway {
    pub fn with_objects(objects: Vec<OnChainObject>) -> Self {
        Self {
            objects,
            fail_owned: false,
            balance: None,
            owned_calls: AtomicUsize::new(0),
            content_calls: AtomicUsize::new(0),
            balance_calls: AtomicUsize::new(0),
            on_owned: Mutex::new(None),
        }
    }

    /// Gateway whose owned-objects query fails at the transport layer.
    pub fn failing() -> Self {
        let mut fixture = Self::with_objects(Vec::new());
        fixture.fail_owned = true;
        fixture
    }

    pub fn with_balance(mut self, sui: f64) -> Self {
        self.balance = Some(sui);
        self
    }

    /// Runs once, right when the owned-objects query lands. Used to flip the
    /// session mid-pass.
    pub fn on_owned_objects(self, hook: impl FnOnce() + Send + 'static) -> Self {
        *self.on_owned.lock().unwrap() = Some(Box::new(hook));
        self
    }

    pub fn total_calls(&self) -> usize {
        self.owned_calls.load(Ordering::SeqCst)
            + self.content_calls.load(Ordering::SeqCst)
            + self.balance_calls.load(Ordering::SeqCst)
    }
}

impl LedgerGateway for FixtureGateway {
    fn owned_objects<'a>(
        &'a self,
        _address: &'a str,
    ) -> BoxFuture<'a, Result<Vec<OnChainObject>, GatewayError>> {
        Box::pin(async move {
            self.owned_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(hook) = self.on_owned.lock().unwrap().take() {
                hook();
            }
            if self.fail_owned {
                return Err(GatewayError::Transport("connection refused".to_string()));
            }
            Ok(self.objects.clone())
        })
    }

    fn object_content<'a>(
        &'a self,
        object_id: &'a str,
    ) -> BoxFuture<'a, Result<OnChainObject, GatewayError>> {
        Box::pin(async move {
            self.content_calls.fetch_add(1, Ordering::SeqCst);
            self.objects
                .iter()
                .find(|object| object.object_id == object_id)
                .cloned()
                .ok_or_else(|| {
                    GatewayError::UpstreamRpc(format!("object {} not found", object_id))
                })
        })
    }

    fn balance<'a>(&'a self, _address: &'a str) -> BoxFuture<'a, Result<f64, GatewayError>> {
        Box::pin(async move {
            self.balance_calls.fetch_add(1, Ordering::SeqCst);
            self.balance
                .ok_or_else(|| GatewayError::Transport("balance unavailable".to_string()))
        })
    }
}
