//! CardSync Types
//!
//! This crate defines the domain types shared across the CardSync workspace
//! (currently `cardsync-core` and `cardsync-allocator`). It provides the
//! fixed-point [`Money`] type and the account/payment data model, and
//! eliminates circular dependencies between crates.

#![deny(warnings)]
#![deny(missing_docs)]

mod money;
mod types;

pub use money::Money;
pub use types::{Account, AccountId, Payment, PaymentLine, PaymentMethod, PaymentStatus};
