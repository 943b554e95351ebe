//! One-pass allocation: minimum dues in input order, then pay down the
//! largest outstanding balances first.

use crate::{Allocation, AllocationStrategy};
use cardsync_types::{Account, Money};

/// The quick-entry allocation policy.
///
/// Covers minimum dues in the order the accounts were given, then applies
/// whatever is left to accounts sorted by largest `total_due` first, each
/// capped at its own outstanding balance. No proportions and no rounding;
/// the leftover shrinks greedily until it is gone.
#[derive(Debug, Default)]
pub struct LargestBalanceFirst;

impl AllocationStrategy for LargestBalanceFirst {
    fn name(&self) -> &'static str {
        "largest_balance_first"
    }

    fn allocate(&self, amount: Money, accounts: &[Account]) -> Allocation {
        let mut result = Allocation::default();
        if !amount.is_positive() || accounts.is_empty() {
            return result;
        }

        let mut allocated = vec![Money::ZERO; accounts.len()];
        let mut remaining = amount;

        for (i, account) in accounts.iter().enumerate() {
            if remaining.is_zero() {
                break;
            }
            let take = account.minimum_due.min(account.total_due).min(remaining);
            if take.is_positive() {
                allocated[i] = take;
                remaining -= take;
            }
        }

        // Stable sort: equal balances keep input order.
        let mut by_balance: Vec<usize> = (0..accounts.len()).collect();
        by_balance.sort_by_key(|&i| std::cmp::Reverse(accounts[i].total_due));

        for &i in &by_balance {
            if !remaining.is_positive() {
                break;
            }
            let headroom = accounts[i].total_due - allocated[i];
            let extra = headroom.min(remaining);
            if extra.is_positive() {
                allocated[i] += extra;
                remaining -= extra;
            }
        }

        for (i, account) in accounts.iter().enumerate() {
            result.record(&account.id, allocated[i]);
        }
        result
    }
}
