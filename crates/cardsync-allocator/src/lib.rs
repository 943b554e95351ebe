#![deny(warnings)]
//! Payment-amount distribution for the CardSync toolkit.
//!
//! This crate answers one question: given a lump sum and a set of debt
//! accounts, how much of the sum applies to each account? The answer is
//! produced by an [`AllocationStrategy`], a stateless and side-effect-free
//! policy object. The [`Allocator`] front door dispatches to the
//! registered strategies by name.
//!
//! Two built-in policies ship with the crate:
//!
//! - [`DueDateProportional`] (the default): cover minimum dues earliest due
//!   date first, then spread the leftover proportionally across remaining
//!   balances.
//! - [`LargestBalanceFirst`]: cover minimum dues in input order, then pay
//!   down the largest outstanding balances first.
//!
//! All arithmetic is fixed-point ([`cardsync_types::Money`]), so the
//! guarantees are exact: no account ever receives more than its
//! `total_due`, and the sum of a result never exceeds the input amount.

use anyhow::{Result, bail};
use cardsync_types::{Account, Money};

mod allocation;
pub mod built_in;
mod registry;
mod strategy;

pub use allocation::Allocation;
pub use built_in::due_date_proportional::DueDateProportional;
pub use built_in::largest_balance_first::LargestBalanceFirst;
pub use registry::StrategyRegistry;
pub use strategy::AllocationStrategy;

/// Dispatches allocation requests to named strategies.
pub struct Allocator {
    registry: StrategyRegistry,
}

impl Default for Allocator {
    fn default() -> Self {
        Self::new()
    }
}

impl Allocator {
    /// The strategy used when the caller expresses no preference.
    pub const DEFAULT_STRATEGY: &'static str = "due_date_proportional";

    /// Creates an allocator with both built-in strategies registered.
    pub fn new() -> Self {
        let mut registry = StrategyRegistry::new();
        registry.register(Box::new(DueDateProportional));
        registry.register(Box::new(LargestBalanceFirst));
        Self { registry }
    }

    /// Runs the named strategy over a snapshot of accounts.
    ///
    /// Fails only when `strategy` names nothing in the registry; every
    /// registered strategy is total over its input domain.
    pub fn allocate(
        &self,
        strategy: &str,
        amount: Money,
        accounts: &[Account],
    ) -> Result<Allocation> {
        match self.registry.get(strategy) {
            Some(policy) => Ok(policy.allocate(amount, accounts)),
            None => bail!(
                "allocation strategy '{strategy}' not found; registered: {:?}",
                self.registry.names()
            ),
        }
    }

    /// Runs the default strategy over a snapshot of accounts, honoring
    /// any replacement registered under the default name.
    pub fn allocate_default(&self, amount: Money, accounts: &[Account]) -> Result<Allocation> {
        self.allocate(Self::DEFAULT_STRATEGY, amount, accounts)
    }

    /// Registers an additional strategy, replacing any existing one with
    /// the same name.
    pub fn register(&mut self, strategy: Box<dyn AllocationStrategy>) {
        self.registry.register(strategy);
    }
}
