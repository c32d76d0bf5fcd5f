use crate::core::models::expense::UserId;
use crate::core::models::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use utoipa::ToSchema;

/// Signed contribution of each participant to one expense.
/// Positive means credited, negative means owed.
pub type Share = BTreeMap<UserId, Money>;

/// What to do when the payer is not one of the split participants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PayerPolicy {
    /// Fail with `PayerNotParticipant`.
    Reject,
    /// Add the payer to the split before computing shares.
    #[default]
    IncludePayer,
    /// Debit the participants only; the share does not sum to zero.
    AllowUnbalanced,
}

impl FromStr for PayerPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(PayerPolicy::Reject),
            "include" | "include_payer" => Ok(PayerPolicy::IncludePayer),
            "allow" | "allow_unbalanced" => Ok(PayerPolicy::AllowUnbalanced),
            other => Err(format!("unknown payer policy: {}", other)),
        }
    }
}

pub fn share_total(share: &Share) -> Money {
    share.values().sum()
}
