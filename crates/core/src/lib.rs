//! Domain rules for the giftlist backend.
//!
//! This crate has no storage or HTTP dependencies. It holds the pieces of
//! the system that carry invariants: who may touch a wishlist, how share
//! tokens are minted and checked, and when a purchaser may be named.

pub mod access;
pub mod error;
pub mod sharing;
pub mod types;
pub mod validation;
pub mod visibility;
