//! Request-independent business operations.
//!
//! Every function takes the store and an explicit [`Caller`] rather than
//! reaching into request state, so handlers stay thin and the rules can be
//! exercised directly against a `MemoryStore`.
//!
//! [`Caller`]: giftlist_core::access::Caller

pub mod accounts;
pub mod ledger;
pub mod sharing;
pub mod wishlists;
