use crate::Allocation;
use cardsync_types::{Account, Money};

/// A policy for splitting a payable amount across debt accounts.
///
/// Strategies are stateless and thread-safe: they take a snapshot of
/// accounts as a parameter, never mutate their inputs, and produce
/// identical results for identical inputs.
pub trait AllocationStrategy: Send + Sync {
    /// The name the strategy is registered under.
    fn name(&self) -> &'static str;

    /// Splits `amount` across `accounts`.
    ///
    /// Total over its domain: a non-positive amount, an empty account
    /// list, or fully settled accounts all yield an empty allocation
    /// rather than an error.
    fn allocate(&self, amount: Money, accounts: &[Account]) -> Allocation;
}
