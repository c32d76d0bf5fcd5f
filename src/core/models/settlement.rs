use crate::core::models::balance::NetBalances;
use crate::core::models::expense::UserId;
use crate::core::models::money::Money;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A proposed payment from a debtor to a creditor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Settlement {
    pub from: UserId,
    pub to: UserId,
    #[schema(value_type = f64, example = 30.0)]
    pub amount: Money,
}

impl Settlement {
    pub fn involves(&self, user_id: &str) -> bool {
        self.from == user_id || self.to == user_id
    }
}

/// Balances left after each settlement is paid: the debtor's balance rises
/// and the creditor's falls by the amount.
pub fn apply_settlements(balances: &NetBalances, settlements: &[Settlement]) -> NetBalances {
    let mut remaining = balances.clone();
    for settlement in settlements {
        *remaining.entry(settlement.from.clone()).or_default() += settlement.amount;
        *remaining.entry(settlement.to.clone()).or_default() -= settlement.amount;
    }
    remaining
}
