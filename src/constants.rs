// Log action names
pub const SHARES_CALCULATED: &str = "SHARES_CALCULATED";
pub const SNAPSHOT_PUBLISHED: &str = "SNAPSHOT_PUBLISHED";
pub const EXPENSE_REJECTED: &str = "EXPENSE_REJECTED";
pub const SETTLEMENTS_PLANNED: &str = "SETTLEMENTS_PLANNED";
pub const SUMMARY_QUERIED: &str = "SUMMARY_QUERIED";

pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";
pub const DEFAULT_SNAPSHOT_TTL_SECS: u64 = 3600;

pub const FRIEND_SCOPE_PREFIX: &str = "friend";
