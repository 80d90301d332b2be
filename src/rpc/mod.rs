//! JSON-RPC plumbing against the Sui fullnode.

pub mod client;
pub mod types;

pub use client::{LedgerGateway, SuiRpcClient};
pub use types::OnChainObject;
