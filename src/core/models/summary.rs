use crate::core::models::expense::UserId;
use crate::core::models::money::Money;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummaryTransaction {
    pub counterparty_id: UserId,
    pub counterparty_name: String,
    #[schema(value_type = f64, example = 20.0)]
    pub amount: Money,
    /// True when the counterparty pays this user.
    pub is_receiving: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSummary {
    pub user_id: UserId,
    #[schema(value_type = f64, example = -30.0)]
    pub total_balance: Money,
    pub transactions: Vec<SummaryTransaction>,
}

impl BalanceSummary {
    pub fn amount_receiving(&self) -> Money {
        self.transactions
            .iter()
            .filter(|t| t.is_receiving)
            .map(|t| t.amount)
            .sum()
    }

    pub fn amount_paying(&self) -> Money {
        self.transactions
            .iter()
            .filter(|t| !t.is_receiving)
            .map(|t| t.amount)
            .sum()
    }
}
