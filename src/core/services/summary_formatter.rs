use crate::core::models::balance::display_name;
use crate::core::models::{BalanceSummary, DisplayNames, Money, NetBalances, SummaryTransaction};
use crate::core::services::settlement_optimizer::calculate_settlements;
use log::debug;

/// Per-user view of the group settlement plan.
///
/// The plan is recomputed over the whole balance set on every call and then
/// narrowed to the payments `user_id` makes or receives.
pub fn get_user_balance_summary(
    balances: &NetBalances,
    user_id: &str,
    names: &DisplayNames,
) -> BalanceSummary {
    let transactions: Vec<SummaryTransaction> = calculate_settlements(balances)
        .into_iter()
        .filter(|s| s.involves(user_id))
        .map(|s| {
            let is_receiving = s.to == user_id;
            let counterparty = if is_receiving { s.from } else { s.to };
            SummaryTransaction {
                counterparty_name: display_name(names, &counterparty).to_string(),
                counterparty_id: counterparty,
                amount: s.amount,
                is_receiving,
            }
        })
        .collect();

    debug!(
        "Summary for {}: {} transactions",
        user_id,
        transactions.len()
    );

    BalanceSummary {
        user_id: user_id.to_string(),
        total_balance: balances.get(user_id).copied().unwrap_or(Money::ZERO),
        transactions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> (NetBalances, DisplayNames) {
        let balances = NetBalances::from([
            ("A".to_string(), Money::from_cents(-3_000)),
            ("B".to_string(), Money::from_cents(-2_000)),
            ("C".to_string(), Money::from_cents(5_000)),
        ]);
        let names = DisplayNames::from([
            ("A".to_string(), "Asha".to_string()),
            ("C".to_string(), "Chetan".to_string()),
        ]);
        (balances, names)
    }

    #[test]
    fn creditor_sees_every_incoming_payment() {
        let (balances, names) = scenario();
        let summary = get_user_balance_summary(&balances, "C", &names);

        assert_eq!(summary.total_balance, Money::from_cents(5_000));
        assert_eq!(
            summary.transactions,
            vec![
                SummaryTransaction {
                    counterparty_id: "A".to_string(),
                    counterparty_name: "Asha".to_string(),
                    amount: Money::from_cents(3_000),
                    is_receiving: true,
                },
                SummaryTransaction {
                    counterparty_id: "B".to_string(),
                    counterparty_name: "B".to_string(),
                    amount: Money::from_cents(2_000),
                    is_receiving: true,
                },
            ]
        );
        assert_eq!(summary.amount_receiving(), Money::from_cents(5_000));
    }

    #[test]
    fn debtor_sees_only_own_payment() {
        let (balances, names) = scenario();
        let summary = get_user_balance_summary(&balances, "A", &names);

        assert_eq!(summary.total_balance, Money::from_cents(-3_000));
        assert_eq!(summary.transactions.len(), 1);
        assert_eq!(summary.transactions[0].counterparty_name, "Chetan");
        assert!(!summary.transactions[0].is_receiving);
        assert_eq!(summary.amount_paying(), Money::from_cents(3_000));
    }

    #[test]
    fn unknown_user_has_empty_summary() {
        let (balances, names) = scenario();
        let summary = get_user_balance_summary(&balances, "nobody", &names);

        assert_eq!(summary.total_balance, Money::ZERO);
        assert!(summary.transactions.is_empty());
    }
}
