pub mod api;
pub mod config;
pub mod constants;
pub mod core;
pub mod infrastructure;

pub use crate::core::errors::LedgerError;
pub use crate::core::models::{
    BalanceSummary, DisplayNames, Expense, GroupSnapshot, Money, NetBalances, PairwiseLedger, PayerPolicy,
    Settlement, Share,
};
pub use crate::core::services::{
    LedgerService, aggregate_net_balances, calculate_settlements, calculate_shares, format_balances,
    get_user_balance_summary,
};
pub use infrastructure::cache::in_memory::InMemoryCache;

#[cfg(test)]
mod tests; // Include scenario tests
