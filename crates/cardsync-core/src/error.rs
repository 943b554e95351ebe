//! Structured error handling for the CardSync core.
//!
//! This module provides structured error types for store and payment-engine
//! operations, enabling better error handling, debugging, and integration
//! with higher-level systems.

use thiserror::Error;

/// Error type for CardSync core operations
#[derive(Error, Debug, Clone)]
pub enum CardSyncError {
    /// Account lookup and validation errors
    #[error("Account error: {message}")]
    Account { message: String, account_id: Option<String> },

    /// Payment validation and recording errors
    #[error("Payment error: {message}")]
    Payment {
        message: String,
        account_id: Option<String>,
        operation: Option<String>,
    },

    /// Account store operation errors
    #[error("Store error: {message}")]
    Store { message: String, operation: Option<String> },

    /// Allocation strategy dispatch errors
    #[error("Allocation error: {message}")]
    Allocation { message: String, strategy: Option<String> },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CardSyncError {
    /// Get the error category for logging and metrics
    pub fn category(&self) -> &'static str {
        match self {
            CardSyncError::Account { .. } => "account",
            CardSyncError::Payment { .. } => "payment",
            CardSyncError::Store { .. } => "store",
            CardSyncError::Allocation { .. } => "allocation",
            CardSyncError::Internal { .. } => "internal",
        }
    }
}

/// Result type alias for core operations
pub type CardSyncResult<T> = Result<T, CardSyncError>;

/// Convenience constructors for common error scenarios
impl CardSyncError {
    /// Create an unknown-account error
    pub fn account_not_found(account_id: &str) -> Self {
        Self::Account {
            message: format!("no account with id '{account_id}'"),
            account_id: Some(account_id.to_string()),
        }
    }

    /// Create a payment validation error tied to one account
    pub fn payment_invalid(account_id: &str, message: impl Into<String>) -> Self {
        Self::Payment {
            message: message.into(),
            account_id: Some(account_id.to_string()),
            operation: Some("make_payment".to_string()),
        }
    }

    /// Create a payment error not tied to any single account
    pub fn payment(operation: &str, message: impl Into<String>) -> Self {
        Self::Payment {
            message: message.into(),
            account_id: None,
            operation: Some(operation.to_string()),
        }
    }

    /// Create a store operation error
    pub fn store(operation: &str, message: impl Into<String>) -> Self {
        Self::Store { message: message.into(), operation: Some(operation.to_string()) }
    }

    /// Create an allocation dispatch error
    pub fn allocation(strategy: &str, message: impl Into<String>) -> Self {
        Self::Allocation { message: message.into(), strategy: Some(strategy.to_string()) }
    }

    /// Create a generic internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal { message: message.into() }
    }
}

impl From<anyhow::Error> for CardSyncError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal { message: err.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_match_variants() {
        assert_eq!(CardSyncError::account_not_found("card-9").category(), "account");
        assert_eq!(CardSyncError::payment_invalid("card-1", "too much").category(), "payment");
        assert_eq!(CardSyncError::store("insert", "duplicate").category(), "store");
        assert_eq!(CardSyncError::allocation("x", "not found").category(), "allocation");
    }

    #[test]
    fn display_includes_the_message() {
        let err = CardSyncError::account_not_found("card-9");
        assert_eq!(err.to_string(), "Account error: no account with id 'card-9'");
    }
}
