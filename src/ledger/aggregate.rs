use std::collections::HashMap;

use serde::Serialize;

use super::parse::ParsedGroup;

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// How many points the dashboard's trend charts render.
pub const MONTH_WINDOW: usize = 7;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ParticipantDebt {
    pub name: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthlyExpensePoint {
    pub month: String,
    pub expenses: f64,
    pub income: f64,
}

/// The two reports the dashboard renders. Recomputed on every pass, never
/// persisted.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardData {
    pub debts: Vec<ParticipantDebt>,
    pub monthly: Vec<MonthlyExpensePoint>,
}

/// What the reports contain when a pass finds nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyPolicy {
    /// One zero-amount "No Data" row per report, so the charts render the
    /// same way for "nothing on chain" as for "all zeros".
    SentinelRows,
    /// Empty vectors; the presentation layer decides what to draw.
    Empty,
}

pub struct Aggregator {
    current_month: u32,
    empty_policy: EmptyPolicy,
}

impl Aggregator {
    pub fn new(current_month: u32, empty_policy: EmptyPolicy) -> Self {
        Self {
            current_month: current_month % 12,
            empty_policy,
        }
    }

    /// Folds parsed groups into the dashboard's two reports. Group order is
    /// irrelevant: debts combine by participant name, months by slot.
    pub fn aggregate(&self, groups: &[ParsedGroup]) -> DashboardData {
        let debts = self.aggregate_debts(groups);
        let monthly = self.aggregate_monthly(groups);

        match self.empty_policy {
            EmptyPolicy::SentinelRows => DashboardData {
                debts: if debts.is_empty() {
                    vec![ParticipantDebt {
                        name: "No Data".to_string(),
                        amount: 0.0,
                    }]
                } else {
                    debts
                },
                monthly: if monthly.is_empty() {
                    vec![MonthlyExpensePoint {
                        month: "No Data".to_string(),
                        expenses: 0.0,
                        income: 0.0,
                    }]
                } else {
                    monthly
                },
            },
            EmptyPolicy::Empty => DashboardData { debts, monthly },
        }
    }

    /// Every expense splits equally among the participants its own group
    /// records; a participant's debt is the sum of their shares across all
    /// groups, combined by name. A group without recorded participants
    /// assigns no debt. Rows sort by name so the output is independent of
    /// discovery order.
    fn aggregate_debts(&self, groups: &[ParsedGroup]) -> Vec<ParticipantDebt> {
        let mut by_name: HashMap<String, f64> = HashMap::new();

        for group in groups {
            if group.participants.is_empty() {
                continue;
            }
            let share_count = group.participants.len() as f64;
            let group_total: f64 = group.expenses.iter().map(|e| e.amount).sum();
            let share = group_total / share_count;

            for participant in &group.participants {
                *by_name.entry(participant.name.clone()).or_insert(0.0) += share;
            }
        }

        let mut debts: Vec<ParticipantDebt> = by_name
            .into_iter()
            .map(|(name, amount)| ParticipantDebt { name, amount })
            .collect();
        debts.sort_by(|a, b| a.name.cmp(&b.name));
        debts
    }

    /// Amounts summed per month slot. `income` stays 0 until a contract
    /// revision supplies one; the chart still expects the field.
    fn aggregate_monthly(&self, groups: &[ParsedGroup]) -> Vec<MonthlyExpensePoint> {
        let mut by_month: HashMap<u32, f64> = HashMap::new();

        for group in groups {
            for expense in &group.expenses {
                *by_month.entry(expense.month_index % 12).or_insert(0.0) += expense.amount;
            }
        }

        // Chronological, oldest first: walk the 12 slots ending at the
        // current month, keep the ones with data, trim to the chart window.
        let mut points: Vec<MonthlyExpensePoint> = (0..12u32)
            .rev()
            .filter_map(|back| {
                let index = (self.current_month as i64 - back as i64).rem_euclid(12) as u32;
                by_month.get(&index).map(|total| MonthlyExpensePoint {
                    month: MONTH_LABELS[index as usize].to_string(),
                    expenses: *total,
                    income: 0.0,
                })
            })
            .collect();

        if points.len() > MONTH_WINDOW {
            points.drain(..points.len() - MONTH_WINDOW);
        }
        points
    }
}
