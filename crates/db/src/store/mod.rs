//! The storage seam.
//!
//! Everything above the database talks to an `Arc<dyn WishlistStore>`
//! constructed at startup. [`PgStore`] delegates to the repositories;
//! [`MemoryStore`] keeps the same rules in process for tests.

mod memory;
mod postgres;

use async_trait::async_trait;
use giftlist_core::types::DbId;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use crate::error::StoreResult;
use crate::models::item::{CreateItem, Item};
use crate::models::purchase::Purchase;
use crate::models::share::{CreateShare, Share};
use crate::models::user::{CreateUser, User};
use crate::models::wishlist::{CreateWishlist, UpdateWishlist, Wishlist};

/// CRUD access to users, wishlists, items, purchases and shares.
#[async_trait]
pub trait WishlistStore: Send + Sync {
    // -- users --------------------------------------------------------------

    /// Fails with `uq_users_email` if the email is already registered.
    async fn create_user(&self, input: &CreateUser) -> StoreResult<User>;
    async fn find_user_by_id(&self, id: DbId) -> StoreResult<Option<User>>;
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    // -- wishlists ----------------------------------------------------------

    async fn create_wishlist(&self, owner_id: DbId, input: &CreateWishlist)
        -> StoreResult<Wishlist>;
    async fn find_wishlist(&self, id: DbId) -> StoreResult<Option<Wishlist>>;
    /// Newest first.
    async fn list_wishlists(&self, owner_id: DbId) -> StoreResult<Vec<Wishlist>>;
    async fn update_wishlist(
        &self,
        id: DbId,
        input: &UpdateWishlist,
    ) -> StoreResult<Option<Wishlist>>;
    /// Removes the wishlist with its items, purchases and shares.
    async fn delete_wishlist(&self, id: DbId) -> StoreResult<bool>;

    // -- items --------------------------------------------------------------

    /// Fails with `fk_items_wishlist` if the wishlist does not exist.
    async fn create_item(&self, wishlist_id: DbId, input: &CreateItem) -> StoreResult<Item>;
    async fn find_item(&self, id: DbId) -> StoreResult<Option<Item>>;
    /// Creation order.
    async fn list_items(&self, wishlist_id: DbId) -> StoreResult<Vec<Item>>;

    // -- purchases ----------------------------------------------------------

    /// Atomically insert a purchase and set the item's `purchased` flag.
    ///
    /// Fails with `uq_purchases_item_user` if the user already bought the item,
    /// and with `fk_purchases_item` if the item does not exist.
    async fn record_purchase(&self, item_id: DbId, user_id: DbId) -> StoreResult<Purchase>;
    /// All purchases of items in the wishlist.
    async fn list_purchases(&self, wishlist_id: DbId) -> StoreResult<Vec<Purchase>>;

    // -- shares -------------------------------------------------------------

    async fn create_share(&self, input: &CreateShare) -> StoreResult<Share>;
    async fn find_share_by_token(&self, token: &str) -> StoreResult<Option<Share>>;

    /// Returns `true` if the backing store is reachable.
    async fn health_check(&self) -> bool;
}
