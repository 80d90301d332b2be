use serde_json::Value;

/// Maps an expense's position in a group's history to a calendar month.
///
/// The contract stores no timestamps, so the default strategy counts
/// backward from the current month by list position. A contract revision
/// that records real timestamps can swap in its own implementation without
/// touching the aggregator.
pub trait TemporalKey: Send + Sync {
    /// Month slot (0 = January) for the entry at `position` of `total`.
    fn month_index(&self, position: usize, total: usize) -> u32;

    /// Month slot treated as "now"; report windowing is anchored here.
    fn current_month(&self) -> u32;
}

/// Backfills months by list position: the last entry lands on the current
/// month, each earlier entry one month before it, wrapping across year ends.
#[derive(Debug, Clone, Copy)]
pub struct PositionBackfill {
    current_month: u32,
}

impl PositionBackfill {
    pub fn new(current_month: u32) -> Self {
        Self {
            current_month: current_month % 12,
        }
    }

    /// Anchored at the machine's current calendar month.
    pub fn from_now() -> Self {
        use chrono::Datelike;
        Self::new(chrono::Local::now().month0())
    }
}

impl TemporalKey for PositionBackfill {
    fn month_index(&self, position: usize, total: usize) -> u32 {
        let offset =
            self.current_month as i64 - total as i64 + position as i64 + 1;
        offset.rem_euclid(12) as u32
    }

    fn current_month(&self) -> u32 {
        self.current_month
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub name: String,
    pub raw_index: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub amount: f64,
    pub month_index: u32,
}

/// Typed records extracted from one expense-group object.
#[derive(Debug, Clone, Default)]
pub struct ParsedGroup {
    pub participants: Vec<Participant>,
    pub expenses: Vec<Expense>,
}

/// Extracts participants and expenses from a group object's content.
///
/// Extraction is defensive throughout: a missing or misshapen field becomes
/// an empty list or a zero amount (logged at debug), never a failure, so one
/// malformed group cannot abort the rest of the pass. Pure and synchronous;
/// performs no I/O.
pub fn parse_group(content: &Value, months: &dyn TemporalKey) -> ParsedGroup {
    let fields = &content["fields"];

    let participants = vec_contents(&fields["participants"])
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let name = entry["fields"]["name"]
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| format!("Participant {}", i + 1));
            Participant { name, raw_index: i }
        })
        .collect();

    let raw_expenses = vec_contents(&fields["expenses"]);
    let total = raw_expenses.len();
    let expenses = raw_expenses
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let amount = read_amount(&entry["fields"]["amount"]).unwrap_or_else(|| {
                log::debug!("expense entry {} has no usable amount, defaulting to 0", i);
                0.0
            });
            Expense {
                amount,
                month_index: months.month_index(i, total),
            }
        })
        .collect();

    ParsedGroup {
        participants,
        expenses,
    }
}

/// Move vectors arrive as `{ "fields": { "contents": [ ... ] } }`.
fn vec_contents(value: &Value) -> &[Value] {
    value["fields"]["contents"]
        .as_array()
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// On-chain u64s are serialized as JSON strings; older payloads used plain
/// numbers.
fn read_amount(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}
