use std::sync::Arc;

use crate::config::AppConfig;
use crate::rpc::LedgerGateway;
use crate::session::WalletSession;

use super::aggregate::{
    Aggregator, DashboardData, EmptyPolicy, MonthlyExpensePoint, ParticipantDebt,
};
use super::discover::ObjectDiscoverer;
use super::parse::{parse_group, PositionBackfill, TemporalKey};

/// Result of one refresh pass.
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    /// Fresh view models, plus the wallet's SUI balance when it could be
    /// fetched.
    Data {
        data: DashboardData,
        sui_balance: Option<f64>,
    },
    /// The session moved to a different address (or disconnected) while the
    /// pass was in flight. The results were discarded; run another pass for
    /// the current session.
    Stale,
}

/// Runs the full pull pipeline for one dashboard refresh: session snapshot,
/// discovery, per-group parsing, aggregation, balance. Holds no state
/// between passes; every refresh re-fetches and re-parses.
pub struct DashboardService {
    session: Arc<WalletSession>,
    gateway: Arc<dyn LedgerGateway>,
    discoverer: ObjectDiscoverer,
    months: Arc<dyn TemporalKey>,
    empty_policy: EmptyPolicy,
}

impl DashboardService {
    pub fn new(
        session: Arc<WalletSession>,
        gateway: Arc<dyn LedgerGateway>,
        expense_group_type: String,
        months: Arc<dyn TemporalKey>,
        empty_policy: EmptyPolicy,
    ) -> Self {
        let discoverer = ObjectDiscoverer::new(gateway.clone(), expense_group_type);
        Self {
            session,
            gateway,
            discoverer,
            months,
            empty_policy,
        }
    }

    /// Wired from [`AppConfig`], with months anchored at the wall clock.
    pub fn from_config(
        session: Arc<WalletSession>,
        gateway: Arc<dyn LedgerGateway>,
        config: &AppConfig,
    ) -> Self {
        Self::new(
            session,
            gateway,
            config.expense_group_type(),
            Arc::new(PositionBackfill::from_now()),
            config.empty_policy,
        )
    }

    /// One full pass. The pass is keyed by the address it started with; if
    /// the session no longer matches when the results are ready, they are
    /// discarded as [`RefreshOutcome::Stale`] rather than handed to the
    /// presentation layer.
    ///
    /// Failures degrade instead of propagating: discovery failure renders
    /// the inline "Error" rows, a balance failure only clears the balance
    /// field.
    pub async fn refresh(&self) -> RefreshOutcome {
        let issued_for = self.session.snapshot();

        let aggregator = Aggregator::new(self.months.current_month(), self.empty_policy);

        let data = match self.discoverer.discover(&issued_for).await {
            Ok(objects) => {
                let groups: Vec<_> = objects
                    .iter()
                    .map(|object| parse_group(&object.content, self.months.as_ref()))
                    .collect();
                aggregator.aggregate(&groups)
            }
            Err(err) => {
                log::warn!("Discovery failed, rendering error rows: {}", err);
                error_rows()
            }
        };

        let sui_balance = if issued_for.connected {
            match self.gateway.balance(&issued_for.address).await {
                Ok(balance) => Some(balance),
                Err(err) => {
                    log::warn!("Balance fetch failed for {}: {}", issued_for.address, err);
                    None
                }
            }
        } else {
            None
        };

        if self.session.snapshot() != issued_for {
            log::info!(
                "Session changed while refreshing '{}', discarding stale pass",
                issued_for.address
            );
            return RefreshOutcome::Stale;
        }

        RefreshOutcome::Data { data, sui_balance }
    }
}

/// The dashboard's inline-failure rendering: one "Error" row per report.
fn error_rows() -> DashboardData {
    DashboardData {
        debts: vec![ParticipantDebt {
            name: "Error".to_string(),
            amount: 0.0,
        }],
        monthly: vec![MonthlyExpensePoint {
            month: "Error".to_string(),
            expenses: 0.0,
            income: 0.0,
        }],
    }
}
