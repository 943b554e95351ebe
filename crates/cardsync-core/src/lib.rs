#![deny(warnings)]
#![allow(missing_docs)]
//! Core functionality for the CardSync payment toolkit.
//!
//! This crate ties the pieces together: an explicit account repository
//! ([`AccountStore`] with an in-memory implementation), the payment engine
//! that feeds account snapshots through the allocation strategies, and the
//! structured error type shared by both.

use tracing::{debug, instrument};

/// Account storage and the repository interface
pub mod account_store;
/// Structured error types for core operations
pub mod error;
/// Sample accounts for tests and demos
pub mod fixtures;
/// Allocation dispatch and payment recording
pub mod payment_engine;
/// JSON import/export of accounts and payment history
pub mod serialization;

pub use account_store::{AccountStore, MemoryAccountStore};
pub use error::{CardSyncError, CardSyncResult};
pub use payment_engine::PaymentEngine;

// Re-export the allocation surface so most callers only need this crate.
pub use cardsync_allocator::{Allocation, AllocationStrategy, Allocator};
pub use cardsync_types::{
    Account, AccountId, Money, Payment, PaymentLine, PaymentMethod, PaymentStatus,
};

/// Initialize the core components
#[instrument]
pub fn init() -> anyhow::Result<()> {
    debug!("Initializing CardSync core");
    Ok(())
}
