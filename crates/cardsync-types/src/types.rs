use crate::Money;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Identifier for a debt account (a card in the source domain).
pub type AccountId = String;

/// A debt instrument with a statement cycle: the card-level view the
/// allocator and the payment engine operate on.
///
/// `minimum_due <= total_due` is expected but not enforced; the allocation
/// strategies cap every payout at `total_due` regardless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique key for the account.
    pub id: AccountId,
    /// Product name, e.g. "Sapphire Reserve".
    pub name: String,
    /// Issuing bank.
    pub issuer: String,
    /// Outstanding balance for the current cycle.
    pub total_due: Money,
    /// Amount that must be paid this cycle.
    pub minimum_due: Money,
    /// Calendar date the minimum payment is owed.
    pub due_date: NaiveDate,
}

impl Account {
    /// Whether the account carries no outstanding balance.
    pub fn is_settled(&self) -> bool {
        !self.total_due.is_positive()
    }
}

/// One account's share of a recorded payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentLine {
    /// The account the amount applies to.
    pub account_id: AccountId,
    /// Amount applied to that account.
    pub amount: Money,
}

/// How a payment was funded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Direct bank transfer.
    BankTransfer,
    /// Debit card.
    DebitCard,
    /// Apple Pay.
    ApplePay,
    /// Google Pay.
    GooglePay,
}

/// Lifecycle state of a recorded payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Submitted but not yet settled.
    Pending,
    /// Settled.
    Completed,
    /// Rejected or reversed.
    Failed,
}

/// A recorded consolidated payment across one or more accounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Unique payment id.
    pub id: String,
    /// When the payment was recorded.
    pub date: DateTime<Utc>,
    /// Per-account breakdown.
    pub lines: Vec<PaymentLine>,
    /// Sum of all line amounts.
    pub total_amount: Money,
    /// Funding method.
    pub method: PaymentMethod,
    /// Lifecycle state.
    pub status: PaymentStatus,
    /// Receipt number, assigned once the payment completes.
    pub receipt_id: Option<String>,
}
