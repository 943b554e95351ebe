//! JSON import and export of account sets and payment history.
//!
//! The reference application persisted its state in the browser; here the
//! equivalent is an explicit snapshot format that callers can stash
//! wherever they like and feed back into a store.

use crate::error::{CardSyncError, CardSyncResult};
use cardsync_types::{Account, Payment};

fn serialization_error(operation: &str, err: serde_json::Error) -> CardSyncError {
    CardSyncError::store(operation, err.to_string())
}

/// Serializes an account snapshot to JSON.
pub fn accounts_to_json(accounts: &[Account]) -> CardSyncResult<String> {
    serde_json::to_string(accounts).map_err(|e| serialization_error("serialize_accounts", e))
}

/// Deserializes an account snapshot from JSON, preserving order.
pub fn accounts_from_json(json: &str) -> CardSyncResult<Vec<Account>> {
    serde_json::from_str(json).map_err(|e| serialization_error("deserialize_accounts", e))
}

/// Serializes a payment history to JSON.
pub fn payments_to_json(payments: &[Payment]) -> CardSyncResult<String> {
    serde_json::to_string(payments).map_err(|e| serialization_error("serialize_payments", e))
}

/// Deserializes a payment history from JSON.
pub fn payments_from_json(json: &str) -> CardSyncResult<Vec<Payment>> {
    serde_json::from_str(json).map_err(|e| serialization_error("deserialize_payments", e))
}
