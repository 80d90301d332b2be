/// Gateway configuration from environment variables
///
/// Controls the upstream Sui node, the contract package, and the dashboard's
/// empty-report policy. Defaults target the public devnet fullnode.
use std::env;

use crate::ledger::EmptyPolicy;

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Sui fullnode JSON-RPC endpoint
    pub rpc_url: String,
    /// Address the gateway binds to
    pub bind_address: String,
    /// Package id of the published `sui_split` Move package
    pub package_id: String,
    /// Per-call timeout for upstream RPC requests, in seconds
    pub rpc_timeout_secs: u64,
    /// What the aggregated reports contain when a pass finds nothing
    pub empty_policy: EmptyPolicy,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `SUI_RPC_URL`: fullnode endpoint (default: devnet)
    /// - `BIND_ADDRESS`: listen address (default: `0.0.0.0:5000`)
    /// - `SUI_SPLIT_PACKAGE`: published package id
    /// - `RPC_TIMEOUT_SECS`: upstream call timeout (default: 30)
    /// - `DASHBOARD_EMPTY_POLICY`: `sentinel` (default) or `empty`
    pub fn from_env() -> Self {
        let rpc_url = env::var("SUI_RPC_URL")
            .unwrap_or_else(|_| "https://fullnode.devnet.sui.io:443".to_string());
        log::info!("Sui RPC URL: {}", rpc_url);

        let bind_address =
            env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:5000".to_string());

        let package_id = match env::var("SUI_SPLIT_PACKAGE") {
            Ok(id) if !id.is_empty() => id,
            _ => {
                log::warn!(
                    "SUI_SPLIT_PACKAGE not set, using placeholder package id 0x123"
                );
                "0x123".to_string()
            }
        };

        let rpc_timeout_secs = env::var("RPC_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let empty_policy = empty_policy_from(
            &env::var("DASHBOARD_EMPTY_POLICY").unwrap_or_default(),
        );

        Self {
            rpc_url,
            bind_address,
            package_id,
            rpc_timeout_secs,
            empty_policy,
        }
    }

    /// Fully qualified type tag of the expense-group object
    pub fn expense_group_type(&self) -> String {
        format!("{}::sui_split::ExpenseGroup", self.package_id)
    }

    /// Move-call target for the expense-group read function
    pub fn query_group_target(&self) -> String {
        format!("{}::sui_split::get_expense_group", self.package_id)
    }

    /// Move-call target for expense-group creation
    pub fn create_group_target(&self) -> String {
        format!("{}::sui_split::create_expense_group", self.package_id)
    }
}

impl Default for AppConfig {
    /// Default configuration (devnet)
    fn default() -> Self {
        Self {
            rpc_url: "https://fullnode.devnet.sui.io:443".to_string(),
            bind_address: "0.0.0.0:5000".to_string(),
            package_id: "0x123".to_string(),
            rpc_timeout_secs: 30,
            empty_policy: EmptyPolicy::SentinelRows,
        }
    }
}

fn empty_policy_from(value: &str) -> EmptyPolicy {
    match value.to_lowercase().as_str() {
        "empty" => EmptyPolicy::Empty,
        "sentinel" | "" => EmptyPolicy::SentinelRows,
        other => {
            log::warn!(
                "Unknown DASHBOARD_EMPTY_POLICY '{}', defaulting to sentinel rows",
                other
            );
            EmptyPolicy::SentinelRows
        }
    }
}
