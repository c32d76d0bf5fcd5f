pub mod balance_aggregator;
pub mod ledger_builder;
pub mod ledger_service;
pub mod settlement_optimizer;
pub mod share_calculator;
pub mod summary_formatter;

pub use balance_aggregator::{aggregate_net_balances, format_balances, format_balances_with_symbol};
pub use ledger_builder::{LedgerBuild, build_ledger};
pub use ledger_service::{LedgerService, ServiceOptions};
pub use settlement_optimizer::calculate_settlements;
pub use share_calculator::{calculate_shares, shares_for_expense};
pub use summary_formatter::get_user_balance_summary;
