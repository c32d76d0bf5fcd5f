use utoipa::OpenApi;

use crate::{
    api::models::{
        BalanceLinesResponse, CalculateSharesRequest, ErrorResponse, PlanSettlementsRequest, PublishSnapshotRequest,
        SharesResponse,
    },
    core::models::{
        BalanceSummary, Expense, GroupSnapshot, PayerPolicy, RejectedExpense, Settlement, SummaryTransaction,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::calculate_shares,
        super::handlers::plan_settlements,
        super::handlers::publish_snapshot,
        super::handlers::get_settlements,
        super::handlers::get_balance_lines,
        super::handlers::get_user_summary
    ),
    components(schemas(
        CalculateSharesRequest,
        SharesResponse,
        PlanSettlementsRequest,
        PublishSnapshotRequest,
        BalanceLinesResponse,
        ErrorResponse,
        Expense,
        PayerPolicy,
        Settlement,
        RejectedExpense,
        GroupSnapshot,
        SummaryTransaction,
        BalanceSummary
    )),
    info(
        title = "Splitledger API",
        description = "Balances and settlement plans for shared expenses",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
