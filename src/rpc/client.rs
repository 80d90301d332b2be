use std::time::Duration;

use futures::future::BoxFuture;
use serde_json::{json, Value};

use crate::config::AppConfig;
use crate::error::GatewayError;

use super::types::{self, OnChainObject, RpcRequest, RpcResponse};

/// Read-only gateway surface the ledger pipeline depends on.
///
/// Implemented by [`SuiRpcClient`] against the live node and by scripted
/// fixtures in tests, so the pipeline has a single code path selectable at
/// startup.
pub trait LedgerGateway: Send + Sync {
    /// All objects currently owned by `address`, unfiltered.
    fn owned_objects<'a>(
        &'a self,
        address: &'a str,
    ) -> BoxFuture<'a, Result<Vec<OnChainObject>, GatewayError>>;

    /// Full content snapshot of a single object.
    fn object_content<'a>(
        &'a self,
        object_id: &'a str,
    ) -> BoxFuture<'a, Result<OnChainObject, GatewayError>>;

    /// SUI balance of `address`, in whole SUI.
    fn balance<'a>(&'a self, address: &'a str) -> BoxFuture<'a, Result<f64, GatewayError>>;
}

/// Stateless JSON-RPC client for the Sui fullnode. Never caches; every call
/// is one upstream round trip, bounded by the configured timeout.
pub struct SuiRpcClient {
    client: reqwest::Client,
    rpc_url: String,
    config: AppConfig,
}

impl SuiRpcClient {
    pub fn new(config: &AppConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.rpc_timeout_secs))
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            rpc_url: config.rpc_url.clone(),
            config: config.clone(),
        })
    }

    /// One JSON-RPC 2.0 round trip. An `error` member in the response maps
    /// to [`GatewayError::UpstreamRpc`]; anything that keeps the envelope
    /// from arriving maps to [`GatewayError::Transport`].
    async fn call(&self, method: &str, params: Value) -> Result<Value, GatewayError> {
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method,
            params,
        };

        let response = self
            .client
            .post(&self.rpc_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let envelope: RpcResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        if let Some(error) = envelope.error {
            log::debug!("{} failed upstream: {} ({})", method, error.message, error.code);
            return Err(GatewayError::UpstreamRpc(error.message));
        }

        Ok(envelope.result.unwrap_or(Value::Null))
    }

    /// Fetch one object with its content shown.
    pub async fn get_object(&self, object_id: &str) -> Result<Value, GatewayError> {
        if object_id.is_empty() {
            return Err(GatewayError::Validation("object id is required".to_string()));
        }

        self.call("sui_getObject", json!([object_id, { "showContent": true }]))
            .await
    }

    /// Page of objects owned by `owner`, content included.
    pub async fn get_owned_objects(&self, owner: &str) -> Result<Value, GatewayError> {
        self.call(
            "sui_getOwnedObjects",
            json!([owner, { "options": { "showContent": true } }]),
        )
        .await
    }

    /// Read an expense group through the contract's read function, as a
    /// dry-run simulated call (no committed state change).
    pub async fn query_expense_group(&self, group_id: &str) -> Result<Value, GatewayError> {
        if group_id.is_empty() {
            return Err(GatewayError::Validation("group id is required".to_string()));
        }

        self.dry_run_move_call(&self.config.query_group_target(), json!([group_id]))
            .await
    }

    /// Simulate expense-group creation. Input is validated locally before
    /// any network round trip.
    pub async fn create_expense_group(
        &self,
        creator: &str,
        participants: &[String],
    ) -> Result<Value, GatewayError> {
        if creator.is_empty() || participants.is_empty() {
            return Err(GatewayError::Validation(
                "creator and participants are required".to_string(),
            ));
        }

        self.dry_run_move_call(
            &self.config.create_group_target(),
            json!([creator, participants]),
        )
        .await
    }

    /// SUI balance of `owner`, converted from MIST.
    pub async fn get_balance(&self, owner: &str) -> Result<f64, GatewayError> {
        let result = self
            .call("sui_getBalance", json!([owner, "0x2::sui::SUI"]))
            .await?;
        Ok(types::mist_to_sui(&result))
    }

    async fn dry_run_move_call(
        &self,
        target: &str,
        arguments: Value,
    ) -> Result<Value, GatewayError> {
        let params = json!([{
            "kind": "TransactionKind",
            "transactions": [{
                "kind": "MoveCall",
                "target": target,
                "arguments": arguments,
                "typeArguments": [],
            }],
        }]);

        self.call("sui_dryRunTransactionBlock", params).await
    }
}

impl LedgerGateway for SuiRpcClient {
    fn owned_objects<'a>(
        &'a self,
        address: &'a str,
    ) -> BoxFuture<'a, Result<Vec<OnChainObject>, GatewayError>> {
        Box::pin(async move {
            let result = self.get_owned_objects(address).await?;
            Ok(types::parse_owned_objects(&result))
        })
    }

    fn object_content<'a>(
        &'a self,
        object_id: &'a str,
    ) -> BoxFuture<'a, Result<OnChainObject, GatewayError>> {
        Box::pin(async move {
            let result = self.get_object(object_id).await?;
            types::parse_object(&result).ok_or_else(|| {
                GatewayError::UpstreamRpc(format!("object {} returned no data", object_id))
            })
        })
    }

    fn balance<'a>(&'a self, address: &'a str) -> BoxFuture<'a, Result<f64, GatewayError>> {
        Box::pin(self.get_balance(address))
    }
}
