
use crate::core::models::{DisplayNames, Money, NetBalances};
use crate::core::services::{LedgerService, ServiceOptions};
use crate::infrastructure::cache::in_memory::InMemoryCache;

pub fn create_test_service(options: ServiceOptions) -> LedgerService<InMemoryCache> {
    let _ = env_logger::try_init();
    LedgerService::new(InMemoryCache::new(), options)
}

pub fn balances(entries: &[(&str, f64)]) -> NetBalances {
    entries
        .iter()
        .map(|(user, amount)| (user.to_string(), Money::from_major(*amount).unwrap()))
        .collect()
}

pub fn names(entries: &[(&str, &str)]) -> DisplayNames {
    entries
        .iter()
        .map(|(id, name)| (id.to_string(), name.to_string()))
        .collect()
}
