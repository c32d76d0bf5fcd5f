pub mod balance;
pub mod expense;
pub mod ledger;
pub mod money;
pub mod settlement;
pub mod share;
pub mod snapshot;
pub mod summary;

pub use balance::{DisplayNames, NetBalances};
pub use expense::{Expense, GroupId, UserId};
pub use ledger::{PairwiseLedger, friendship_scope};
pub use money::Money;
pub use settlement::Settlement;
pub use share::{PayerPolicy, Share};
pub use snapshot::{GroupSnapshot, RejectedExpense};
pub use summary::{BalanceSummary, SummaryTransaction};
