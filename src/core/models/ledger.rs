use crate::constants::FRIEND_SCOPE_PREFIX;
use crate::core::errors::LedgerError;
use crate::core::models::expense::{GroupId, UserId};
use crate::core::models::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type CounterpartyBalances = BTreeMap<UserId, Money>;

/// `group -> user -> counterparty -> amount` accumulated across expenses.
///
/// A positive entry means the counterparty owes the user. Entries only grow
/// by addition and are never removed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairwiseLedger {
    groups: BTreeMap<GroupId, BTreeMap<UserId, CounterpartyBalances>>,
}

impl PairwiseLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `debtor` owes `creditor` `amount` within `group_id`.
    /// Both sides of the pair are updated. Fails without recording anything
    /// when the pair's entry would leave `±Money::MAX_BALANCE`.
    pub fn post(
        &mut self,
        group_id: &str,
        creditor: &str,
        debtor: &str,
        amount: Money,
    ) -> Result<(), LedgerError> {
        let entry = self.next_entry(group_id, creditor, debtor, amount)?;
        self.set_pair(group_id, creditor, debtor, entry);
        Ok(())
    }

    /// Posts several debts owed to one creditor. Either every debt is
    /// recorded or none is. Debtors must be distinct.
    pub fn post_all(
        &mut self,
        group_id: &str,
        creditor: &str,
        debts: &[(&str, Money)],
    ) -> Result<(), LedgerError> {
        let entries = debts
            .iter()
            .map(|(debtor, amount)| {
                Ok((*debtor, self.next_entry(group_id, creditor, debtor, *amount)?))
            })
            .collect::<Result<Vec<_>, LedgerError>>()?;
        for (debtor, entry) in entries {
            self.set_pair(group_id, creditor, debtor, entry);
        }
        Ok(())
    }

    fn next_entry(
        &self,
        group_id: &str,
        creditor: &str,
        debtor: &str,
        amount: Money,
    ) -> Result<Money, LedgerError> {
        self.between(group_id, creditor, debtor)
            .checked_add(amount)
            .ok_or_else(|| {
                LedgerError::InvalidAmount(format!(
                    "balance between {} and {} would exceed {}",
                    creditor,
                    debtor,
                    Money::MAX_BALANCE
                ))
            })
    }

    // Entries stay antisymmetric: a user never owes themselves.
    fn set_pair(&mut self, group_id: &str, creditor: &str, debtor: &str, entry: Money) {
        if creditor == debtor {
            return;
        }
        let group = self.groups.entry(group_id.to_string()).or_default();
        group
            .entry(creditor.to_string())
            .or_default()
            .insert(debtor.to_string(), entry);
        group
            .entry(debtor.to_string())
            .or_default()
            .insert(creditor.to_string(), -entry);
    }

    pub fn group(&self, group_id: &str) -> Option<&BTreeMap<UserId, CounterpartyBalances>> {
        self.groups.get(group_id)
    }

    /// Amount `counterparty` owes `user` in the group, zero if never posted.
    pub fn between(&self, group_id: &str, user: &str, counterparty: &str) -> Money {
        self.groups
            .get(group_id)
            .and_then(|users| users.get(user))
            .and_then(|entries| entries.get(counterparty))
            .copied()
            .unwrap_or(Money::ZERO)
    }

    pub fn group_total(&self, group_id: &str) -> Money {
        self.groups
            .get(group_id)
            .map(|users| users.values().flat_map(|entries| entries.values()).sum::<Money>())
            .unwrap_or(Money::ZERO)
    }
}

impl From<BTreeMap<GroupId, BTreeMap<UserId, CounterpartyBalances>>> for PairwiseLedger {
    fn from(groups: BTreeMap<GroupId, BTreeMap<UserId, CounterpartyBalances>>) -> Self {
        PairwiseLedger { groups }
    }
}

/// Ledger scope for expenses shared between two friends outside any group.
/// Order of the arguments does not matter.
pub fn friendship_scope(a: &str, b: &str) -> GroupId {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    format!("{}:{}:{}", FRIEND_SCOPE_PREFIX, first, second)
}
