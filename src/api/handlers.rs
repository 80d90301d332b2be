use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use crate::error::GatewayError;
use crate::rpc::SuiRpcClient;

use super::types::{CreateExpenseGroupRequest, CreateExpenseGroupResponse, TestResponse};

/// Shared application state
pub type AppState = Arc<SuiRpcClient>;

/// GET /api/test
pub async fn test_handler() -> Json<TestResponse> {
    Json(TestResponse {
        message: "Backend gateway is working!".to_string(),
    })
}

/// GET /api/object/:id
/// Returns the upstream `result` object verbatim.
pub async fn get_object_handler(
    State(rpc): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, GatewayError> {
    let result = rpc.get_object(&id).await?;
    Ok(Json(result))
}

/// GET /api/expense-group/:group_id
/// Reads a group through the contract's dry-run read function.
pub async fn get_expense_group_handler(
    State(rpc): State<AppState>,
    Path(group_id): Path<String>,
) -> Result<Json<Value>, GatewayError> {
    let result = rpc.query_expense_group(&group_id).await?;
    Ok(Json(result))
}

/// POST /api/create-expense-group
pub async fn create_expense_group_handler(
    State(rpc): State<AppState>,
    Json(req): Json<CreateExpenseGroupRequest>,
) -> Result<Json<CreateExpenseGroupResponse>, GatewayError> {
    let result = rpc
        .create_expense_group(&req.creator, &req.participants)
        .await?;

    Ok(Json(CreateExpenseGroupResponse {
        success: true,
        result,
    }))
}
