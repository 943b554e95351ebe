//! Account storage behind an explicit repository interface.
//!
//! The allocation strategies never read ambient state; callers take a
//! [`AccountStore::snapshot`] and pass it in. Insertion order is part of the
//! contract because the strategies use it to break ties.

use crate::error::{CardSyncError, CardSyncResult};
use cardsync_types::{Account, Money, PaymentLine};
use std::collections::HashMap;
use std::sync::RwLock;

/// Repository interface for the set of debt accounts.
///
/// Implementations must be thread-safe and must preserve insertion order in
/// [`AccountStore::snapshot`].
pub trait AccountStore: Send + Sync {
    /// Adds a new account. Fails when the id is already present.
    fn insert(&self, account: Account) -> CardSyncResult<()>;

    /// Looks up an account by id.
    fn get(&self, id: &str) -> Option<Account>;

    /// Replaces an existing account (matched by id). Fails when the id is
    /// unknown.
    fn update(&self, account: Account) -> CardSyncResult<()>;

    /// Removes an account by id. Fails when the id is unknown.
    fn remove(&self, id: &str) -> CardSyncResult<()>;

    /// Validates and applies payment lines as one atomic operation:
    /// either every line passes (account exists, amount positive, the
    /// summed amounts per account fit inside `total_due`) and every
    /// account is updated (`total_due` drops by the paid amount,
    /// `minimum_due` drops to no less than zero), or nothing changes.
    ///
    /// Implementations must hold their write lock across validation and
    /// application, so concurrent payments cannot both validate against
    /// the same pre-payment balance and drive `total_due` negative.
    fn apply_lines(&self, lines: &[PaymentLine]) -> CardSyncResult<()>;

    /// All accounts, in insertion order.
    fn snapshot(&self) -> Vec<Account>;

    /// Number of stored accounts.
    fn len(&self) -> usize;

    /// Whether the store holds no accounts.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory account store.
///
/// The working set is a handful of cards per user, so storage is a plain
/// ordered vector behind an `RwLock`: reads share the lock, mutations take
/// it exclusively, and lookups are linear scans.
#[derive(Debug, Default)]
pub struct MemoryAccountStore {
    accounts: RwLock<Vec<Account>>,
}

impl MemoryAccountStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with the given accounts, keeping their order.
    /// Fails on duplicate ids.
    pub fn with_accounts(accounts: Vec<Account>) -> CardSyncResult<Self> {
        let store = Self::new();
        for account in accounts {
            store.insert(account)?;
        }
        Ok(store)
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<Account>> {
        // A poisoned lock still holds a valid Vec; recover the guard.
        self.accounts.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Account>> {
        self.accounts.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl AccountStore for MemoryAccountStore {
    fn insert(&self, account: Account) -> CardSyncResult<()> {
        let mut accounts = self.write();
        if accounts.iter().any(|a| a.id == account.id) {
            return Err(CardSyncError::store(
                "insert",
                format!("account '{}' already exists", account.id),
            ));
        }
        accounts.push(account);
        Ok(())
    }

    fn get(&self, id: &str) -> Option<Account> {
        self.read().iter().find(|a| a.id == id).cloned()
    }

    fn update(&self, account: Account) -> CardSyncResult<()> {
        let mut accounts = self.write();
        match accounts.iter_mut().find(|a| a.id == account.id) {
            Some(slot) => {
                *slot = account;
                Ok(())
            }
            None => Err(CardSyncError::account_not_found(&account.id)),
        }
    }

    fn remove(&self, id: &str) -> CardSyncResult<()> {
        let mut accounts = self.write();
        match accounts.iter().position(|a| a.id == id) {
            Some(index) => {
                accounts.remove(index);
                Ok(())
            }
            None => Err(CardSyncError::account_not_found(id)),
        }
    }

    fn apply_lines(&self, lines: &[PaymentLine]) -> CardSyncResult<()> {
        let mut accounts = self.write();

        // Validate every line against the balances this same lock guards,
        // summing repeated lines for one account, before mutating anything.
        let mut totals: HashMap<&str, Money> = HashMap::new();
        for line in lines {
            if !line.amount.is_positive() {
                return Err(CardSyncError::payment_invalid(
                    &line.account_id,
                    format!("amount {} is not positive", line.amount),
                ));
            }
            let account = accounts
                .iter()
                .find(|a| a.id == line.account_id)
                .ok_or_else(|| CardSyncError::account_not_found(&line.account_id))?;
            let paid = totals.entry(line.account_id.as_str()).or_insert(Money::ZERO);
            *paid += line.amount;
            if *paid > account.total_due {
                return Err(CardSyncError::payment_invalid(
                    &line.account_id,
                    format!(
                        "amount {paid} exceeds outstanding balance {}",
                        account.total_due
                    ),
                ));
            }
        }

        for account in accounts.iter_mut() {
            if let Some(&paid) = totals.get(account.id.as_str()) {
                account.total_due -= paid;
                account.minimum_due = account.minimum_due.saturating_sub_at_zero(paid);
            }
        }
        Ok(())
    }

    fn snapshot(&self) -> Vec<Account> {
        self.read().clone()
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardsync_types::Money;
    use chrono::NaiveDate;

    fn account(id: &str) -> Account {
        Account {
            id: id.to_string(),
            name: "Gold Card".to_string(),
            issuer: "American Express".to_string(),
            total_due: Money::from_cents(3_250_000),
            minimum_due: Money::from_cents(162_500),
            due_date: NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
        }
    }

    #[test]
    fn snapshot_preserves_insertion_order() {
        let store = MemoryAccountStore::new();
        for id in ["card-3", "card-1", "card-2"] {
            store.insert(account(id)).unwrap();
        }
        let ids: Vec<String> = store.snapshot().into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["card-3", "card-1", "card-2"]);
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let store = MemoryAccountStore::new();
        store.insert(account("card-1")).unwrap();
        let err = store.insert(account("card-1")).unwrap_err();
        assert_eq!(err.category(), "store");
    }

    #[test]
    fn update_replaces_in_place() {
        let store = MemoryAccountStore::new();
        store.insert(account("card-1")).unwrap();
        store.insert(account("card-2")).unwrap();

        let mut changed = account("card-1");
        changed.total_due = Money::from_cents(100);
        store.update(changed).unwrap();

        assert_eq!(store.get("card-1").unwrap().total_due, Money::from_cents(100));
        let ids: Vec<String> = store.snapshot().into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["card-1", "card-2"]);
    }

    #[test]
    fn unknown_ids_are_errors() {
        let store = MemoryAccountStore::new();
        assert!(store.get("card-1").is_none());
        assert_eq!(store.update(account("card-1")).unwrap_err().category(), "account");
        assert_eq!(store.remove("card-1").unwrap_err().category(), "account");
    }

    #[test]
    fn apply_lines_updates_both_dues() {
        let store = MemoryAccountStore::new();
        store.insert(account("card-1")).unwrap();
        store
            .apply_lines(&[PaymentLine {
                account_id: "card-1".to_string(),
                amount: Money::from_cents(200_000),
            }])
            .unwrap();

        let card = store.get("card-1").unwrap();
        assert_eq!(card.total_due, Money::from_cents(3_050_000));
        assert_eq!(card.minimum_due, Money::ZERO);
    }

    #[test]
    fn apply_lines_rejects_everything_or_applies_everything() {
        let store = MemoryAccountStore::new();
        store.insert(account("card-1")).unwrap();
        store.insert(account("card-2")).unwrap();

        let err = store
            .apply_lines(&[
                PaymentLine { account_id: "card-1".to_string(), amount: Money::from_cents(100) },
                PaymentLine {
                    account_id: "card-2".to_string(),
                    amount: Money::from_cents(9_999_999),
                },
            ])
            .unwrap_err();
        assert_eq!(err.category(), "payment");
        // The valid first line must not have been applied.
        assert_eq!(store.get("card-1").unwrap().total_due, Money::from_cents(3_250_000));
    }

    #[test]
    fn apply_lines_sums_repeated_lines_for_one_account() {
        let store = MemoryAccountStore::new();
        store.insert(account("card-1")).unwrap();

        // Two lines that fit individually but overdraw together.
        let err = store
            .apply_lines(&[
                PaymentLine {
                    account_id: "card-1".to_string(),
                    amount: Money::from_cents(2_000_000),
                },
                PaymentLine {
                    account_id: "card-1".to_string(),
                    amount: Money::from_cents(2_000_000),
                },
            ])
            .unwrap_err();
        assert_eq!(err.category(), "payment");
        assert_eq!(store.get("card-1").unwrap().total_due, Money::from_cents(3_250_000));
    }

    #[test]
    fn remove_shrinks_the_store() {
        let store =
            MemoryAccountStore::with_accounts(vec![account("card-1"), account("card-2")]).unwrap();
        store.remove("card-1").unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.get("card-1").is_none());
        assert!(store.get("card-2").is_some());
    }
}
