use crate::core::errors::LedgerError;
use crate::core::models::{Expense, Money, PayerPolicy, Share, UserId};
use log::debug;
use std::collections::BTreeSet;

/// Splits `amount` equally between `participants` and returns each one's
/// signed contribution.
///
/// Cents that do not divide evenly go one each to the first participants in
/// ascending id order. Every participant other than the payer is debited its
/// portion; the payer, when part of the split, is credited the amount minus
/// its own portion, so the entries sum to zero.
///
/// A payer outside `participants` is handled by `policy`. Under
/// `AllowUnbalanced` each participant owes `amount / n` of the listed
/// participants only, so 90 paid by A for B and C gives `{B: -45, C: -45}`.
/// Amounts above [`Money::MAX_AMOUNT`] are rejected.
pub fn calculate_shares(
    amount: Money,
    participants: &[UserId],
    payer: &str,
    policy: PayerPolicy,
) -> Result<Share, LedgerError> {
    if !amount.is_positive() {
        return Err(LedgerError::InvalidAmount(format!(
            "amount must be greater than 0, got {}",
            amount
        )));
    }
    if amount > Money::MAX_AMOUNT {
        return Err(LedgerError::InvalidAmount(format!(
            "amount must not exceed {}, got {}",
            Money::MAX_AMOUNT,
            amount
        )));
    }
    if participants.is_empty() {
        return Err(LedgerError::EmptyParticipantSet);
    }

    let mut split: BTreeSet<&str> = BTreeSet::new();
    for participant in participants {
        if !split.insert(participant.as_str()) {
            return Err(LedgerError::DuplicateParticipant(participant.clone()));
        }
    }

    if !split.contains(payer) {
        match policy {
            PayerPolicy::Reject => return Err(LedgerError::PayerNotParticipant(payer.to_string())),
            PayerPolicy::IncludePayer => {
                split.insert(payer);
            }
            PayerPolicy::AllowUnbalanced => {
                debug!("Payer {} outside split, share will not balance", payer);
            }
        }
    }

    let count = split.len() as i64;
    let base = amount.cents() / count;
    let remainder = amount.cents() % count;

    let mut share = Share::new();
    for (idx, participant) in split.iter().enumerate() {
        let portion = Money::from_cents(base + if (idx as i64) < remainder { 1 } else { 0 });
        if *participant == payer {
            share.insert(participant.to_string(), amount - portion);
        } else {
            share.insert(participant.to_string(), -portion);
        }
    }

    debug!("Shares for {} paid by {}: {:?}", amount, payer, share);
    Ok(share)
}

pub fn shares_for_expense(expense: &Expense, policy: PayerPolicy) -> Result<Share, LedgerError> {
    let amount = Money::from_major(expense.amount)?;
    calculate_shares(amount, &expense.split_between, &expense.paid_by, policy)
}
