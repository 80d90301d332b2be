//! Backend for a Sui bill-splitting dashboard.
//!
//! Two halves share this crate:
//!
//! - an HTTP **gateway** ([`api`] + [`rpc`]) that relays object queries and
//!   dry-run contract calls to a Sui fullnode and normalizes every failure
//!   into a stable `{ error }` contract, and
//! - the **ledger pipeline** ([`session`] + [`ledger`]) that turns a
//!   connected wallet's on-chain `ExpenseGroup` objects into the view models
//!   the dashboard renders: per-participant debts and a monthly expense
//!   trend.
//!
//! All data is obtained by pull; a refresh pass fetches, parses, aggregates,
//! and discards. Failures degrade to renderable fallback values rather than
//! propagating out of the pipeline.

pub mod api;
pub mod config;
pub mod error;
pub mod ledger;
pub mod rpc;
pub mod session;

pub use config::AppConfig;
pub use error::{GatewayError, LedgerError};
pub use ledger::{
    Aggregator, DashboardData, DashboardService, EmptyPolicy, MonthlyExpensePoint,
    ParticipantDebt, RefreshOutcome,
};
pub use rpc::{LedgerGateway, OnChainObject, SuiRpcClient};
pub use session::{SessionSnapshot, WalletCapability, WalletSession};
