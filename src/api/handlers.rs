use crate::{
    api::models::*,
    core::{
        errors::LedgerError,
        models::{BalanceSummary, GroupSnapshot, Money, Settlement, share::share_total},
        services::LedgerService,
    },
    infrastructure::cache::in_memory::InMemoryCache,
};
use axum::{
    Json, Router,
    extract::{Path, State},
};
use std::sync::Arc;

pub type SharedService = Arc<LedgerService<InMemoryCache>>;

// Define API routes
pub fn api_routes(service: SharedService) -> Router {
    Router::new()
        .route("/shares", axum::routing::post(calculate_shares))
        .route("/settlements/plan", axum::routing::post(plan_settlements))
        .route("/groups/{group_id}/snapshot", axum::routing::put(publish_snapshot))
        .route("/groups/{group_id}/settlements", axum::routing::get(get_settlements))
        .route("/groups/{group_id}/balances", axum::routing::get(get_balance_lines))
        .route(
            "/groups/{group_id}/users/{user_id}/summary",
            axum::routing::get(get_user_summary),
        )
        .with_state(service)
}

#[utoipa::path(
    post,
    path = "/api/shares",
    request_body = CalculateSharesRequest,
    responses(
        (status = 200, description = "Shares calculated", body = SharesResponse),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 422, description = "Expense could not be processed", body = ErrorResponse)
    )
)]
pub async fn calculate_shares(
    State(service): State<SharedService>,
    Json(req): Json<CalculateSharesRequest>,
) -> Result<Json<SharesResponse>, ApiError> {
    if req.paid_by.trim().is_empty() {
        return Err(LedgerError::invalid_input("paidBy", "Invalid paidBy", "paidBy cannot be empty".to_string()).into());
    }
    let amount = Money::from_major(req.amount)?;
    let shares = service.calculate_shares(amount, &req.split_between, &req.paid_by, req.payer_policy)?;
    let total = share_total(&shares);
    Ok(Json(SharesResponse { shares, total }))
}

#[utoipa::path(
    post,
    path = "/api/settlements/plan",
    request_body = PlanSettlementsRequest,
    responses(
        (status = 200, description = "Settlement plan for the given balances", body = Vec<Settlement>)
    )
)]
pub async fn plan_settlements(
    State(service): State<SharedService>,
    Json(req): Json<PlanSettlementsRequest>,
) -> Json<Vec<Settlement>> {
    Json(service.plan_settlements(&req.balances))
}

#[utoipa::path(
    put,
    path = "/api/groups/{group_id}/snapshot",
    params(
        ("group_id" = String, Path, description = "ID of the group or friend scope")
    ),
    request_body = PublishSnapshotRequest,
    responses(
        (status = 200, description = "Snapshot recomputed and published", body = GroupSnapshot),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn publish_snapshot(
    State(service): State<SharedService>,
    Path(group_id): Path<String>,
    Json(req): Json<PublishSnapshotRequest>,
) -> Result<Json<GroupSnapshot>, ApiError> {
    let snapshot = service
        .publish_snapshot(&group_id, &req.expenses, req.display_names)
        .await?;
    Ok(Json(GroupSnapshot::clone(&snapshot)))
}

#[utoipa::path(
    get,
    path = "/api/groups/{group_id}/settlements",
    params(
        ("group_id" = String, Path, description = "ID of the group or friend scope")
    ),
    responses(
        (status = 200, description = "Settlements for the current snapshot", body = Vec<Settlement>),
        (status = 404, description = "No snapshot for group", body = ErrorResponse)
    )
)]
pub async fn get_settlements(
    State(service): State<SharedService>,
    Path(group_id): Path<String>,
) -> Result<Json<Vec<Settlement>>, ApiError> {
    let settlements = service.settlements(&group_id).await?;
    Ok(Json(settlements))
}

#[utoipa::path(
    get,
    path = "/api/groups/{group_id}/balances",
    params(
        ("group_id" = String, Path, description = "ID of the group or friend scope")
    ),
    responses(
        (status = 200, description = "Readable balance lines", body = BalanceLinesResponse),
        (status = 404, description = "No snapshot for group", body = ErrorResponse)
    )
)]
pub async fn get_balance_lines(
    State(service): State<SharedService>,
    Path(group_id): Path<String>,
) -> Result<Json<BalanceLinesResponse>, ApiError> {
    let lines = service.balance_lines(&group_id).await?;
    Ok(Json(BalanceLinesResponse { group_id, lines }))
}

#[utoipa::path(
    get,
    path = "/api/groups/{group_id}/users/{user_id}/summary",
    params(
        ("group_id" = String, Path, description = "ID of the group or friend scope"),
        ("user_id" = String, Path, description = "ID of the user")
    ),
    responses(
        (status = 200, description = "Balance summary for the user", body = BalanceSummary),
        (status = 404, description = "No snapshot for group", body = ErrorResponse)
    )
)]
pub async fn get_user_summary(
    State(service): State<SharedService>,
    Path((group_id, user_id)): Path<(String, String)>,
) -> Result<Json<BalanceSummary>, ApiError> {
    let summary = service.user_summary(&group_id, &user_id).await?;
    Ok(Json(summary))
}
