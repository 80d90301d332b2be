//! The aggregation pipeline: discover a wallet's expense groups, parse their
//! content, and fold them into the view models the dashboard renders.

pub mod aggregate;
pub mod discover;
pub mod parse;
pub mod refresh;

pub use aggregate::{
    Aggregator, DashboardData, EmptyPolicy, MonthlyExpensePoint, ParticipantDebt, MONTH_LABELS,
    MONTH_WINDOW,
};
pub use discover::ObjectDiscoverer;
pub use parse::{parse_group, Expense, ParsedGroup, Participant, PositionBackfill, TemporalKey};
pub use refresh::{DashboardService, RefreshOutcome};
