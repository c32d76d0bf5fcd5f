use crate::core::models::expense::UserId;
use crate::core::models::money::Money;
use std::collections::{BTreeMap, HashMap};

/// One signed position per user; positive means the user is owed money.
pub type NetBalances = BTreeMap<UserId, Money>;

pub type DisplayNames = HashMap<UserId, String>;

pub fn display_name<'a>(names: &'a DisplayNames, user_id: &'a str) -> &'a str {
    names.get(user_id).map(String::as_str).unwrap_or(user_id)
}
