use crate::core::models::{Money, NetBalances, Settlement, UserId};
use log::debug;

/// Produces a list of payments that brings every balance to zero.
///
/// Greedy two-pointer matching: balances are sorted from the largest debtor
/// to the largest creditor (ties by user id), then the debtor at the front
/// pays the creditor at the back as much as either side allows. Each payment
/// clears at least one side, so `n` non-zero balances need at most `n - 1`
/// payments. This is a heuristic; finding the fewest possible payments is
/// NP-hard and is not attempted.
///
/// Balances of less than a cent are dropped before matching. Because amounts
/// are whole cents, every transfer of at least one cent is emitted: a
/// one-cent debt is real and skipping it would leave the books open.
///
/// When the balances do not sum to zero the surplus is left unmatched.
pub fn calculate_settlements(balances: &NetBalances) -> Vec<Settlement> {
    let mut entries: Vec<(UserId, Money)> = balances
        .iter()
        .filter(|(_, amount)| !amount.is_negligible())
        .map(|(user_id, amount)| (user_id.clone(), *amount))
        .collect();
    entries.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));

    let mut settlements = Vec::new();
    if entries.len() < 2 {
        return settlements;
    }

    let mut i = 0;
    let mut j = entries.len() - 1;
    while i < j {
        if !entries[i].1.is_negative() {
            i += 1;
            continue;
        }
        if !entries[j].1.is_positive() {
            j -= 1;
            continue;
        }

        let transfer = (-entries[i].1).min(entries[j].1);
        if transfer >= Money::EPSILON {
            settlements.push(Settlement {
                from: entries[i].0.clone(),
                to: entries[j].0.clone(),
                amount: transfer,
            });
        }

        entries[i].1 += transfer;
        entries[j].1 -= transfer;

        if entries[i].1.is_negligible() {
            i += 1;
        }
        if entries[j].1.is_negligible() {
            j -= 1;
        }
    }

    debug!("Settlements for {} balances: {:?}", balances.len(), settlements);
    settlements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::settlement::apply_settlements;
    use rstest::rstest;

    fn balances(entries: &[(&str, i64)]) -> NetBalances {
        entries
            .iter()
            .map(|(user, cents)| (user.to_string(), Money::from_cents(*cents)))
            .collect()
    }

    fn settlement(from: &str, to: &str, cents: i64) -> Settlement {
        Settlement {
            from: from.to_string(),
            to: to.to_string(),
            amount: Money::from_cents(cents),
        }
    }

    #[rstest]
    #[case::three_party(
        &[("A", -3_000), ("B", -2_000), ("C", 5_000)],
        vec![settlement("A", "C", 3_000), settlement("B", "C", 2_000)]
    )]
    #[case::already_settled(&[("A", 0), ("B", 0)], vec![])]
    #[case::single_pair(&[("x", 1_250), ("y", -1_250)], vec![settlement("y", "x", 1_250)])]
    #[case::one_debtor_many_creditors(
        &[("d", -6_000), ("c1", 1_000), ("c2", 2_000), ("c3", 3_000)],
        vec![
            settlement("d", "c3", 3_000),
            settlement("d", "c2", 2_000),
            settlement("d", "c1", 1_000),
        ]
    )]
    #[case::chained_partial_payments(
        &[("a", -5_000), ("b", -1_000), ("c", 2_500), ("d", 3_500)],
        vec![
            settlement("a", "d", 3_500),
            settlement("a", "c", 1_500),
            settlement("b", "c", 1_000),
        ]
    )]
    #[case::ties_break_by_user_id(
        &[("b", -1_000), ("a", -1_000), ("d", 1_000), ("c", 1_000)],
        vec![settlement("a", "d", 1_000), settlement("b", "c", 1_000)]
    )]
    #[case::one_cent_debt(&[("a", -1), ("b", 1)], vec![settlement("a", "b", 1)])]
    fn settlement_cases(#[case] input: &[(&str, i64)], #[case] expected: Vec<Settlement>) {
        assert_eq!(calculate_settlements(&balances(input)), expected);
    }

    #[rstest]
    #[case(0.005, -0.003)]
    #[case(0.005, -0.005)]
    #[case(0.009, -0.009)]
    fn balances_below_a_cent_need_no_settlement(#[case] a: f64, #[case] b: f64) {
        let input = NetBalances::from([
            ("A".to_string(), Money::from_major(a).unwrap()),
            ("B".to_string(), Money::from_major(b).unwrap()),
        ]);
        assert!(calculate_settlements(&input).is_empty());
    }

    #[test]
    fn extreme_balances_do_not_overflow() {
        let input = balances(&[("a", -Money::MAX_BALANCE.cents()), ("b", Money::MAX_BALANCE.cents())]);
        assert_eq!(
            calculate_settlements(&input),
            vec![settlement("a", "b", Money::MAX_BALANCE.cents())]
        );
    }

    #[test]
    fn many_small_credits_close_the_books() {
        let input = balances(&[("d", -3), ("c1", 1), ("c2", 1), ("c3", 1)]);
        let plan = calculate_settlements(&input);

        assert_eq!(plan.len(), 3);
        let remaining = apply_settlements(&input, &plan);
        assert!(remaining.values().all(|b| b.is_zero()));
    }

    #[test]
    fn unbalanced_input_leaves_the_surplus() {
        let input = balances(&[("a", -1_000), ("b", 1_500)]);
        let plan = calculate_settlements(&input);

        assert_eq!(plan, vec![settlement("a", "b", 1_000)]);
        let remaining = apply_settlements(&input, &plan);
        assert_eq!(remaining["b"], Money::from_cents(500));
    }

    #[test]
    fn repeated_calls_agree() {
        let input = balances(&[("p", -700), ("q", 300), ("r", -300), ("s", 700)]);
        assert_eq!(calculate_settlements(&input), calculate_settlements(&input));
    }
}
