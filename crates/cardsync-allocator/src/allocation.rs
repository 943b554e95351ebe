use cardsync_types::{AccountId, Money, PaymentLine};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The result of running an allocation strategy: a mapping from account id
/// to the amount that applies to it.
///
/// Only accounts that received a nonzero amount appear. Iteration order is
/// deterministic (sorted by account id).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Allocation {
    entries: BTreeMap<AccountId, Money>,
}

impl Allocation {
    /// Records an amount for an account. Zero and negative amounts are
    /// dropped so the mapping only carries accounts that got something.
    pub(crate) fn record(&mut self, account_id: &str, amount: Money) {
        if amount.is_positive() {
            self.entries.insert(account_id.to_string(), amount);
        }
    }

    /// The amount allocated to an account; zero when the account received
    /// nothing.
    pub fn amount_for(&self, account_id: &str) -> Money {
        self.entries.get(account_id).copied().unwrap_or(Money::ZERO)
    }

    /// Sum of all allocated amounts.
    pub fn total(&self) -> Money {
        self.entries.values().copied().sum()
    }

    /// Number of accounts that received a nonzero amount.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no account received anything.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(account id, amount)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&AccountId, Money)> {
        self.entries.iter().map(|(id, amount)| (id, *amount))
    }

    /// Converts the allocation into payment lines, ready to record.
    pub fn into_lines(self) -> Vec<PaymentLine> {
        self.entries
            .into_iter()
            .map(|(account_id, amount)| PaymentLine { account_id, amount })
            .collect()
    }
}
