//! Domain model structs and DTOs.
//!
//! Each entity submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//!
//! [`view`] holds the projections handed to API clients.

pub mod item;
pub mod purchase;
pub mod share;
pub mod user;
pub mod view;
pub mod wishlist;
