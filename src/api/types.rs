use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct TestResponse {
    pub message: String,
}

/// Body of `POST /api/create-expense-group`. Both fields default so that a
/// missing member fails validation with the documented message instead of a
/// deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateExpenseGroupRequest {
    #[serde(default)]
    pub creator: String,
    #[serde(default)]
    pub participants: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateExpenseGroupResponse {
    pub success: bool,
    pub result: Value,
}
