use crate::core::errors::LedgerError;
use crate::core::models::balance::{DisplayNames, NetBalances};
use crate::core::models::expense::GroupId;
use crate::core::models::settlement::Settlement;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// An expense that failed validation and was left out of the ledger.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RejectedExpense {
    pub expense_id: String,
    pub code: String,
    #[serde(skip)]
    pub error: LedgerError,
}

impl RejectedExpense {
    pub fn new(expense_id: &str, error: LedgerError) -> Self {
        RejectedExpense {
            expense_id: expense_id.to_string(),
            code: error.code().to_string(),
            error,
        }
    }
}

/// Everything derived from one published set of expenses for a group.
#[derive(Clone, Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupSnapshot {
    pub group_id: GroupId,
    #[schema(value_type = String, example = "2024-06-01T12:34:56Z")]
    pub computed_at: DateTime<Utc>,
    pub expense_count: usize,
    #[schema(value_type = Object)]
    pub net_balances: NetBalances,
    pub settlements: Vec<Settlement>,
    pub rejected: Vec<RejectedExpense>,
    #[serde(skip)]
    pub display_names: DisplayNames,
}
