//! PostgreSQL-backed [`WishlistStore`].

use async_trait::async_trait;
use giftlist_core::types::DbId;

use super::WishlistStore;
use crate::error::StoreResult;
use crate::models::item::{CreateItem, Item};
use crate::models::purchase::Purchase;
use crate::models::share::{CreateShare, Share};
use crate::models::user::{CreateUser, User};
use crate::models::wishlist::{CreateWishlist, UpdateWishlist, Wishlist};
use crate::repositories::{ItemRepo, PurchaseRepo, ShareRepo, UserRepo, WishlistRepo};
use crate::DbPool;

/// Store over a PostgreSQL connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WishlistStore for PgStore {
    async fn create_user(&self, input: &CreateUser) -> StoreResult<User> {
        Ok(UserRepo::create(&self.pool, input).await?)
    }

    async fn find_user_by_id(&self, id: DbId) -> StoreResult<Option<User>> {
        Ok(UserRepo::find_by_id(&self.pool, id).await?)
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        Ok(UserRepo::find_by_email(&self.pool, email).await?)
    }

    async fn create_wishlist(
        &self,
        owner_id: DbId,
        input: &CreateWishlist,
    ) -> StoreResult<Wishlist> {
        Ok(WishlistRepo::create(&self.pool, owner_id, input).await?)
    }

    async fn find_wishlist(&self, id: DbId) -> StoreResult<Option<Wishlist>> {
        Ok(WishlistRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_wishlists(&self, owner_id: DbId) -> StoreResult<Vec<Wishlist>> {
        Ok(WishlistRepo::list_by_owner(&self.pool, owner_id).await?)
    }

    async fn update_wishlist(
        &self,
        id: DbId,
        input: &UpdateWishlist,
    ) -> StoreResult<Option<Wishlist>> {
        Ok(WishlistRepo::update(&self.pool, id, input).await?)
    }

    async fn delete_wishlist(&self, id: DbId) -> StoreResult<bool> {
        Ok(WishlistRepo::delete(&self.pool, id).await?)
    }

    async fn create_item(&self, wishlist_id: DbId, input: &CreateItem) -> StoreResult<Item> {
        Ok(ItemRepo::create(&self.pool, wishlist_id, input).await?)
    }

    async fn find_item(&self, id: DbId) -> StoreResult<Option<Item>> {
        Ok(ItemRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_items(&self, wishlist_id: DbId) -> StoreResult<Vec<Item>> {
        Ok(ItemRepo::list_by_wishlist(&self.pool, wishlist_id).await?)
    }

    async fn record_purchase(&self, item_id: DbId, user_id: DbId) -> StoreResult<Purchase> {
        Ok(PurchaseRepo::record(&self.pool, item_id, user_id).await?)
    }

    async fn list_purchases(&self, wishlist_id: DbId) -> StoreResult<Vec<Purchase>> {
        Ok(PurchaseRepo::list_by_wishlist(&self.pool, wishlist_id).await?)
    }

    async fn create_share(&self, input: &CreateShare) -> StoreResult<Share> {
        Ok(ShareRepo::create(&self.pool, input).await?)
    }

    async fn find_share_by_token(&self, token: &str) -> StoreResult<Option<Share>> {
        Ok(ShareRepo::find_by_token(&self.pool, token).await?)
    }

    async fn health_check(&self) -> bool {
        match crate::health_check(&self.pool).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Database health check failed");
                false
            }
        }
    }
}
