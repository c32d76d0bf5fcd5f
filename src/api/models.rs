use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

use crate::core::errors::LedgerError;
use crate::core::models::{Expense, Money, NetBalances, PayerPolicy, Share, UserId};

// Request structs for JSON payloads
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculateSharesRequest {
    #[schema(example = 100.0)]
    pub amount: f64,
    pub paid_by: UserId,
    pub split_between: Vec<UserId>,
    pub payer_policy: Option<PayerPolicy>,
}

#[derive(Serialize, ToSchema)]
pub struct SharesResponse {
    #[schema(value_type = Object)]
    pub shares: Share,
    #[schema(value_type = f64)]
    pub total: Money,
}

#[derive(Deserialize, ToSchema)]
pub struct PlanSettlementsRequest {
    #[schema(value_type = Object)]
    pub balances: NetBalances,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublishSnapshotRequest {
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub display_names: HashMap<UserId, String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BalanceLinesResponse {
    pub group_id: String,
    pub lines: Vec<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

// Newtype wrapper for LedgerError to implement IntoResponse
pub struct ApiError(pub LedgerError);

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let code = self.0.code().to_string();
        let (status, error_message) = match self.0 {
            err if err.is_expense_error() => {
                (StatusCode::UNPROCESSABLE_ENTITY, "Failed to process expense".to_string())
            }
            LedgerError::GroupNotFound(id) => (StatusCode::NOT_FOUND, format!("Group {} not found", id)),
            LedgerError::InvalidInput(field, detail) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid input for {}: {}", field, detail.description),
            ),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string()),
        };
        (
            status,
            Json(ErrorResponse {
                error: error_message,
                code,
            }),
        )
            .into_response()
    }
}
