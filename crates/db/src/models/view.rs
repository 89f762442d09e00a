//! Client-facing projections of a wishlist.
//!
//! There are exactly two views. The owner view has no purchaser field at
//! all, so no code path can leak who bought what to the owner. The shared
//! view carries an optional `purchased_by` that is only ever filled with
//! [`PURCHASED_BY_YOU`](giftlist_core::visibility::PURCHASED_BY_YOU) for the
//! viewer's own purchases.

use std::collections::HashMap;

use giftlist_core::access::Caller;
use giftlist_core::types::{DbId, Timestamp};
use giftlist_core::visibility::purchaser_label;
use serde::Serialize;

use crate::models::item::Item;
use crate::models::purchase::Purchase;
use crate::models::wishlist::Wishlist;

// ---------------------------------------------------------------------------
// Owner view
// ---------------------------------------------------------------------------

/// An item as its wishlist owner sees it.
#[derive(Debug, Clone, Serialize)]
pub struct OwnerItemView {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub purchased: bool,
    pub created_at: Timestamp,
}

/// A wishlist as its owner sees it through direct access.
#[derive(Debug, Clone, Serialize)]
pub struct OwnerWishlistView {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub created_at: Timestamp,
    pub items: Vec<OwnerItemView>,
}

impl OwnerWishlistView {
    pub fn project(wishlist: Wishlist, items: Vec<Item>) -> Self {
        let items = items
            .into_iter()
            .map(|item| OwnerItemView {
                id: item.id,
                name: item.name,
                description: item.description,
                purchased: item.purchased,
                created_at: item.created_at,
            })
            .collect();

        Self {
            id: wishlist.id,
            title: wishlist.title,
            description: wishlist.description,
            created_at: wishlist.created_at,
            items,
        }
    }
}

// ---------------------------------------------------------------------------
// Shared view
// ---------------------------------------------------------------------------

/// An item as seen through a share link.
#[derive(Debug, Clone, Serialize)]
pub struct SharedItemView {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub purchased: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchased_by: Option<&'static str>,
}

/// A wishlist as seen through a share link, by any viewer.
#[derive(Debug, Clone, Serialize)]
pub struct SharedWishlistView {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub created_at: Timestamp,
    pub items: Vec<SharedItemView>,
}

impl SharedWishlistView {
    /// Project `wishlist` for `viewer`. `purchases` may cover any superset of
    /// the wishlist's items; unrelated rows are ignored.
    pub fn project(
        wishlist: Wishlist,
        items: Vec<Item>,
        purchases: &[Purchase],
        viewer: &Caller,
    ) -> Self {
        let mut purchasers: HashMap<DbId, Vec<DbId>> = HashMap::new();
        for purchase in purchases {
            purchasers
                .entry(purchase.item_id)
                .or_default()
                .push(purchase.user_id);
        }

        let items = items
            .into_iter()
            .map(|item| {
                let purchased_by = purchasers
                    .get(&item.id)
                    .and_then(|ids| purchaser_label(viewer, ids));
                SharedItemView {
                    id: item.id,
                    name: item.name,
                    description: item.description,
                    purchased: item.purchased,
                    purchased_by,
                }
            })
            .collect();

        Self {
            id: wishlist.id,
            title: wishlist.title,
            description: wishlist.description,
            created_at: wishlist.created_at,
            items,
        }
    }
}
