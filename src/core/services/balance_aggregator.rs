use crate::constants::DEFAULT_CURRENCY_SYMBOL;
use crate::core::models::balance::display_name;
use crate::core::models::{DisplayNames, Money, NetBalances, PairwiseLedger};
use log::debug;

/// Sums every user's counterparty entries in one group into a single
/// position. Users present in the ledger keep an entry even when it nets to
/// zero; an unknown group yields an empty map.
pub fn aggregate_net_balances(ledger: &PairwiseLedger, group_id: &str) -> NetBalances {
    let balances: NetBalances = ledger
        .group(group_id)
        .map(|users| {
            users
                .iter()
                .map(|(user_id, entries)| (user_id.clone(), entries.values().sum::<Money>()))
                .collect()
        })
        .unwrap_or_default();

    debug!("Net balances for group {}: {:?}", group_id, balances);
    balances
}

/// Human-readable lines for every balance larger than one cent, in user id
/// order, e.g. `"Asha owes ₹30.00"` or `"Ravi gets back ₹50.00"`.
pub fn format_balances(balances: &NetBalances, names: &DisplayNames) -> Vec<String> {
    format_balances_with_symbol(balances, names, DEFAULT_CURRENCY_SYMBOL)
}

pub fn format_balances_with_symbol(
    balances: &NetBalances,
    names: &DisplayNames,
    currency_symbol: &str,
) -> Vec<String> {
    balances
        .iter()
        .filter(|(_, amount)| !amount.is_within_epsilon())
        .map(|(user_id, amount)| {
            let verb = if amount.is_negative() { "owes" } else { "gets back" };
            format!(
                "{} {} {}{}",
                display_name(names, user_id),
                verb,
                currency_symbol,
                amount.abs()
            )
        })
        .collect()
}
