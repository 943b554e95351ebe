//! The payment engine: distribution, pay-all, and payment recording.

use crate::account_store::AccountStore;
use crate::error::{CardSyncError, CardSyncResult};
use cardsync_allocator::{Allocation, Allocator};
use cardsync_types::{Money, Payment, PaymentLine, PaymentMethod, PaymentStatus};
use chrono::Utc;
use std::sync::{Arc, RwLock};
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Orchestrates allocation and payment recording over an account store.
///
/// The engine owns the payment history (newest first) and an [`Allocator`]
/// with the built-in strategies registered. The store is injected, never
/// ambient: every allocation runs against a snapshot taken at call time.
pub struct PaymentEngine {
    store: Arc<dyn AccountStore>,
    allocator: Allocator,
    payments: RwLock<Vec<Payment>>,
}

impl PaymentEngine {
    /// Creates an engine over the given store with an empty payment
    /// history.
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store, allocator: Allocator::new(), payments: RwLock::new(Vec::new()) }
    }

    /// The injected account store.
    pub fn store(&self) -> &Arc<dyn AccountStore> {
        &self.store
    }

    /// Splits `amount` across the current accounts with the named
    /// strategy. Backs the consolidated-payment entry path, where the
    /// split is recomputed live as the user types.
    #[instrument(skip(self))]
    pub fn distribute(&self, amount: Money, strategy: &str) -> CardSyncResult<Allocation> {
        let accounts = self.store.snapshot();
        let allocation = self
            .allocator
            .allocate(strategy, amount, &accounts)
            .map_err(|e| CardSyncError::allocation(strategy, e.to_string()))?;
        debug!(
            %amount,
            accounts = accounts.len(),
            funded = allocation.len(),
            "distributed amount"
        );
        Ok(allocation)
    }

    /// Splits `amount` with the default strategy.
    pub fn distribute_default(&self, amount: Money) -> CardSyncResult<Allocation> {
        self.distribute(amount, Allocator::DEFAULT_STRATEGY)
    }

    /// Sum of `total_due` across all accounts.
    pub fn total_outstanding(&self) -> Money {
        self.store.snapshot().iter().map(|a| a.total_due).sum()
    }

    /// Pays off every account: feeds the total outstanding balance through
    /// the default strategy and records the resulting breakdown.
    #[instrument(skip(self))]
    pub fn pay_all(&self, method: PaymentMethod) -> CardSyncResult<Payment> {
        let allocation = self.distribute_default(self.total_outstanding())?;
        if allocation.is_empty() {
            return Err(CardSyncError::payment("pay_all", "nothing outstanding to pay"));
        }
        self.make_payment(allocation.into_lines(), method)
    }

    /// Validates and records a payment, then applies it to the accounts:
    /// `total_due` drops by the paid amount and `minimum_due` drops to no
    /// less than zero.
    ///
    /// Zero-amount lines are dropped; a payment with no remaining lines,
    /// a negative line, a line above the account's `total_due`, or a line
    /// against an unknown account is rejected without touching the store.
    /// Validation and application run as one atomic store operation, so a
    /// concurrent payment cannot sneak in between the balance check and
    /// the subtraction and overdraw an account.
    #[instrument(skip(self, lines))]
    pub fn make_payment(
        &self,
        lines: Vec<PaymentLine>,
        method: PaymentMethod,
    ) -> CardSyncResult<Payment> {
        let lines: Vec<PaymentLine> =
            lines.into_iter().filter(|line| !line.amount.is_zero()).collect();
        if lines.is_empty() {
            return Err(CardSyncError::payment("make_payment", "payment has no lines"));
        }

        self.store.apply_lines(&lines)?;

        let total_amount: Money = lines.iter().map(|line| line.amount).sum();
        let payment = Payment {
            id: format!("payment-{}", Uuid::new_v4()),
            date: Utc::now(),
            lines,
            total_amount,
            method,
            status: PaymentStatus::Completed,
            receipt_id: Some(format!("RCPT-{}", Uuid::new_v4().simple())),
        };

        let mut payments = self.payments.write().unwrap_or_else(|e| e.into_inner());
        payments.insert(0, payment.clone());
        info!(
            payment_id = %payment.id,
            total = %payment.total_amount,
            lines = payment.lines.len(),
            "payment recorded"
        );
        Ok(payment)
    }

    /// Recorded payments, newest first.
    pub fn payments(&self) -> Vec<Payment> {
        self.payments.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}
