use crate::core::models::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub type UserId = String;
pub type GroupId = String;

fn new_expense_id() -> String {
    Uuid::new_v4().to_string()
}

/// One shared cost as recorded by the host application.
///
/// `amount` stays in decimal major units as received; it is validated and
/// converted to cents per expense, so one bad amount only rejects its own
/// expense.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    #[serde(default = "new_expense_id")]
    pub id: String,
    #[schema(example = 90.0)]
    pub amount: f64,
    pub paid_by: UserId,
    pub split_between: Vec<UserId>,
    #[serde(default)]
    pub description: String,
    #[serde(default = "Utc::now")]
    #[schema(value_type = String, example = "2024-06-01T12:34:56Z")]
    pub created_at: DateTime<Utc>,
}

impl Expense {
    pub fn new(amount: Money, paid_by: &str, split_between: &[&str], description: &str) -> Self {
        Expense {
            id: new_expense_id(),
            amount: amount.to_major(),
            paid_by: paid_by.to_string(),
            split_between: split_between.iter().map(|p| p.to_string()).collect(),
            description: description.to_string(),
            created_at: Utc::now(),
        }
    }
}
