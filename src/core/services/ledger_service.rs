use crate::config::CONFIG;
use crate::constants::{SETTLEMENTS_PLANNED, SHARES_CALCULATED, SNAPSHOT_PUBLISHED, SUMMARY_QUERIED};
use crate::core::errors::LedgerError;
use crate::core::models::{
    BalanceSummary, DisplayNames, Expense, GroupSnapshot, Money, NetBalances, PayerPolicy, Settlement, Share, UserId,
};
use crate::core::services::balance_aggregator::{aggregate_net_balances, format_balances_with_symbol};
use crate::core::services::ledger_builder::build_ledger;
use crate::core::services::settlement_optimizer::calculate_settlements;
use crate::core::services::share_calculator::calculate_shares;
use crate::core::services::summary_formatter::get_user_balance_summary;
use crate::infrastructure::cache::SnapshotCache;
use crate::infrastructure::cache::in_memory::InMemoryCache;
use chrono::Utc;
use log::{debug, info};
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct ServiceOptions {
    pub payer_policy: PayerPolicy,
    pub currency_symbol: String,
    pub snapshot_ttl: Duration,
}

impl ServiceOptions {
    pub fn from_config() -> Self {
        ServiceOptions {
            payer_policy: CONFIG.payer_policy,
            currency_symbol: CONFIG.currency_symbol.clone(),
            snapshot_ttl: Duration::from_secs(CONFIG.snapshot_ttl_secs),
        }
    }
}

impl Default for ServiceOptions {
    fn default() -> Self {
        ServiceOptions {
            payer_policy: PayerPolicy::default(),
            currency_symbol: crate::constants::DEFAULT_CURRENCY_SYMBOL.to_string(),
            snapshot_ttl: Duration::from_secs(crate::constants::DEFAULT_SNAPSHOT_TTL_SECS),
        }
    }
}

/// Recomputes balances and settlements for each published expense snapshot
/// and serves reads from the latest one.
pub struct LedgerService<C: SnapshotCache> {
    cache: C,
    options: ServiceOptions,
}

impl LedgerService<InMemoryCache> {
    pub fn in_memory(options: ServiceOptions) -> Self {
        LedgerService::new(InMemoryCache::new(), options)
    }
}

impl<C: SnapshotCache> LedgerService<C> {
    pub fn new(cache: C, options: ServiceOptions) -> Self {
        info!("Initializing LedgerService with payer policy {:?}", options.payer_policy);
        LedgerService { cache, options }
    }

    pub fn calculate_shares(
        &self,
        amount: Money,
        participants: &[UserId],
        payer: &str,
        policy: Option<PayerPolicy>,
    ) -> Result<Share, LedgerError> {
        let policy = policy.unwrap_or(self.options.payer_policy);
        let share = calculate_shares(amount, participants, payer, policy)?;
        debug!("{}: {} split {} ways", SHARES_CALCULATED, amount, share.len());
        Ok(share)
    }

    pub fn plan_settlements(&self, balances: &NetBalances) -> Vec<Settlement> {
        let settlements = calculate_settlements(balances);
        debug!(
            "{}: {} settlements for {} balances",
            SETTLEMENTS_PLANNED,
            settlements.len(),
            balances.len()
        );
        settlements
    }

    /// Rebuilds everything for `group_id` from `expenses` and makes the
    /// result the group's current snapshot.
    pub async fn publish_snapshot(
        &self,
        group_id: &str,
        expenses: &[Expense],
        display_names: DisplayNames,
    ) -> Result<Arc<GroupSnapshot>, LedgerError> {
        let computed_at = Utc::now();
        let build = build_ledger(group_id, expenses, self.options.payer_policy);
        let net_balances = aggregate_net_balances(&build.ledger, group_id);
        let settlements = calculate_settlements(&net_balances);

        let snapshot = GroupSnapshot {
            group_id: group_id.to_string(),
            computed_at,
            expense_count: expenses.len(),
            net_balances,
            settlements,
            rejected: build.rejected,
            display_names,
        };

        let current = self
            .cache
            .replace_snapshot(snapshot, self.options.snapshot_ttl)
            .await?;
        info!(
            "{}: group {} with {} expenses, {} settlements, {} rejected",
            SNAPSHOT_PUBLISHED,
            group_id,
            current.expense_count,
            current.settlements.len(),
            current.rejected.len()
        );
        Ok(current)
    }

    pub async fn snapshot(&self, group_id: &str) -> Result<Arc<GroupSnapshot>, LedgerError> {
        self.cache
            .get_snapshot(group_id)
            .await?
            .ok_or_else(|| LedgerError::GroupNotFound(group_id.to_string()))
    }

    pub async fn settlements(&self, group_id: &str) -> Result<Vec<Settlement>, LedgerError> {
        Ok(self.snapshot(group_id).await?.settlements.clone())
    }

    pub async fn balance_lines(&self, group_id: &str) -> Result<Vec<String>, LedgerError> {
        let snapshot = self.snapshot(group_id).await?;
        Ok(format_balances_with_symbol(
            &snapshot.net_balances,
            &snapshot.display_names,
            &self.options.currency_symbol,
        ))
    }

    pub async fn user_summary(&self, group_id: &str, user_id: &str) -> Result<BalanceSummary, LedgerError> {
        let snapshot = self.snapshot(group_id).await?;
        debug!("{}: user {} in group {}", SUMMARY_QUERIED, user_id, group_id);
        Ok(get_user_balance_summary(
            &snapshot.net_balances,
            user_id,
            &snapshot.display_names,
        ))
    }

    pub async fn evict_expired(&self) -> Result<usize, LedgerError> {
        self.cache.evict_expired().await
    }
}
