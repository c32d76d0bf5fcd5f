use crate::constants::EXPENSE_REJECTED;
use crate::core::models::{Expense, Money, PairwiseLedger, PayerPolicy, RejectedExpense};
use crate::core::services::share_calculator::shares_for_expense;
use log::{debug, warn};

#[derive(Clone, Debug, Default)]
pub struct LedgerBuild {
    pub ledger: PairwiseLedger,
    pub rejected: Vec<RejectedExpense>,
}

/// Posts every valid expense of `group_id` to a fresh pairwise ledger.
///
/// An expense that fails share validation is skipped and reported in
/// `rejected`; the rest of the batch is still posted. So is an expense whose
/// debts would push a pair past `Money::MAX_BALANCE`. Each participant's
/// debit is recorded against the payer, so the ledger stays balanced even
/// when the share itself does not.
pub fn build_ledger(group_id: &str, expenses: &[Expense], policy: PayerPolicy) -> LedgerBuild {
    let mut build = LedgerBuild::default();

    for expense in expenses {
        let posted = shares_for_expense(expense, policy).and_then(|share| {
            let debts: Vec<(&str, Money)> = share
                .iter()
                .filter(|(participant, amount)| **participant != expense.paid_by && amount.is_negative())
                .map(|(participant, amount)| (participant.as_str(), amount.abs()))
                .collect();
            build.ledger.post_all(group_id, &expense.paid_by, &debts)
        });

        if let Err(err) = posted {
            warn!(
                "{}: expense {} in group {}: {}",
                EXPENSE_REJECTED, expense.id, group_id, err
            );
            build.rejected.push(RejectedExpense::new(&expense.id, err));
        }
    }

    debug!(
        "Built ledger for group {} from {} expenses ({} rejected)",
        group_id,
        expenses.len(),
        build.rejected.len()
    );
    build
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::LedgerError;

    #[test]
    fn posts_debits_against_the_payer() {
        let expenses = vec![
            Expense::new(Money::from_cents(9_000), "a", &["a", "b", "c"], "Cab"),
            Expense::new(Money::from_cents(2_000), "b", &["a", "b"], "Tea"),
        ];
        let build = build_ledger("trip", &expenses, PayerPolicy::Reject);

        assert!(build.rejected.is_empty());
        assert_eq!(build.ledger.between("trip", "a", "b"), Money::from_cents(2_000));
        assert_eq!(build.ledger.between("trip", "a", "c"), Money::from_cents(3_000));
        assert_eq!(build.ledger.between("trip", "b", "c"), Money::ZERO);
        assert_eq!(build.ledger.group_total("trip"), Money::ZERO);
    }

    #[test]
    fn bad_expense_does_not_block_the_batch() {
        let mut empty = Expense::new(Money::from_cents(500), "a", &[], "Nothing");
        empty.id = "empty".to_string();
        let mut free = Expense::new(Money::ZERO, "a", &["a", "b"], "Free");
        free.id = "free".to_string();
        let expenses = vec![
            empty,
            Expense::new(Money::from_cents(1_000), "a", &["a", "b"], "Lunch"),
            free,
        ];

        let build = build_ledger("g", &expenses, PayerPolicy::IncludePayer);

        assert_eq!(build.rejected.len(), 2);
        assert_eq!(build.rejected[0].expense_id, "empty");
        assert_eq!(build.rejected[0].error, LedgerError::EmptyParticipantSet);
        assert_eq!(build.rejected[1].expense_id, "free");
        assert_eq!(build.rejected[1].code, "INVALID_AMOUNT");
        assert_eq!(build.ledger.between("g", "a", "b"), Money::from_cents(500));
    }

    #[test]
    fn huge_amounts_are_rejected_instead_of_overflowing() {
        let expenses: Vec<Expense> = (0..4)
            .map(|idx| {
                let mut expense = Expense::new(Money::from_cents(100), "a", &["a", "b", "c"], "Huge");
                expense.id = format!("huge-{}", idx);
                expense.amount = 5e16;
                expense
            })
            .chain(std::iter::once(Expense::new(
                Money::from_cents(900),
                "b",
                &["a", "b", "c"],
                "Snacks",
            )))
            .collect();

        let build = build_ledger("g", &expenses, PayerPolicy::IncludePayer);

        assert_eq!(build.rejected.len(), 4);
        assert!(build.rejected.iter().all(|r| r.code == "INVALID_AMOUNT"));
        assert_eq!(build.ledger.between("g", "b", "a"), Money::from_cents(300));
        assert_eq!(build.ledger.group_total("g"), Money::ZERO);
    }

    #[test]
    fn expense_past_the_pair_limit_is_rejected_whole() {
        // MAX_BALANCE / MAX_AMOUNT = 10_000 full-size expenses fill one pair.
        let limit = (Money::MAX_BALANCE.cents() / Money::MAX_AMOUNT.cents()) as usize;
        let mut expenses: Vec<Expense> = (0..limit)
            .map(|_| Expense::new(Money::MAX_AMOUNT, "a", &["b"], "Rent"))
            .collect();
        let mut over = Expense::new(Money::from_cents(200), "a", &["b", "c"], "One more");
        over.id = "over".to_string();
        expenses.push(over);

        let build = build_ledger("g", &expenses, PayerPolicy::AllowUnbalanced);

        assert_eq!(build.rejected.len(), 1);
        assert_eq!(build.rejected[0].expense_id, "over");
        assert_eq!(build.ledger.between("g", "a", "b"), Money::MAX_BALANCE);
        assert_eq!(build.ledger.between("g", "a", "c"), Money::ZERO);
    }

    #[test]
    fn unbalanced_shares_still_post_a_balanced_ledger() {
        let expenses = vec![Expense::new(Money::from_cents(9_000), "A", &["B", "C"], "Gift")];
        let build = build_ledger("g", &expenses, PayerPolicy::AllowUnbalanced);

        assert_eq!(build.ledger.between("g", "A", "B"), Money::from_cents(4_500));
        assert_eq!(build.ledger.between("g", "A", "C"), Money::from_cents(4_500));
        assert_eq!(build.ledger.group_total("g"), Money::ZERO);
    }
}
