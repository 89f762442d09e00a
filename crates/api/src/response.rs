//! Response envelope types for API handlers.
//!
//! Each resource is wrapped in an object keyed by its name (`{ "wishlist": ... }`,
//! `{ "item": ... }`). Use these instead of ad-hoc `serde_json::json!` bodies
//! to get compile-time type safety and consistent serialization.

use giftlist_db::models::item::Item;
use giftlist_db::models::user::UserResponse;
use giftlist_db::models::wishlist::Wishlist;
use serde::Serialize;

/// `{ "user": ... }`
#[derive(Debug, Serialize)]
pub struct UserEnvelope {
    pub user: UserResponse,
}

/// `{ "wishlist": ... }`, generic so the shared view can reuse it.
#[derive(Debug, Serialize)]
pub struct WishlistEnvelope<T: Serialize = Wishlist> {
    pub wishlist: T,
}

/// `{ "wishlists": [...] }`
#[derive(Debug, Serialize)]
pub struct WishlistsEnvelope {
    pub wishlists: Vec<Wishlist>,
}

/// `{ "item": ... }`
#[derive(Debug, Serialize)]
pub struct ItemEnvelope {
    pub item: Item,
}

/// `{ "message": "..." }`
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
