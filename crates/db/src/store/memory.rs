//! In-process [`WishlistStore`] used as a test double.
//!
//! Mirrors the PostgreSQL schema rules that matter to callers: unique
//! emails, unique share tokens, one purchase per `(item, user)`, the
//! `purchased` flag written together with the purchase, and cascading
//! deletes. All checks and writes for one call happen under a single
//! write lock.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use giftlist_core::types::DbId;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::WishlistStore;
use crate::error::{constraints, StoreError, StoreResult};
use crate::models::item::{CreateItem, Item};
use crate::models::purchase::Purchase;
use crate::models::share::{CreateShare, Share};
use crate::models::user::{CreateUser, User};
use crate::models::wishlist::{CreateWishlist, UpdateWishlist, Wishlist};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    wishlists: Vec<Wishlist>,
    items: Vec<Item>,
    purchases: Vec<Purchase>,
    shares: Vec<Share>,
}

/// Store backed by in-memory vectors.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail as if the database were down.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl WishlistStore for MemoryStore {
    async fn create_user(&self, input: &CreateUser) -> StoreResult<User> {
        self.check_available()?;
        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.email == input.email) {
            return Err(StoreError::UniqueViolation(
                constraints::UQ_USERS_EMAIL.into(),
            ));
        }
        let user = User {
            id: Uuid::new_v4(),
            name: input.name.clone(),
            email: input.email.clone(),
            password_hash: input.password_hash.clone(),
            created_at: Utc::now(),
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn find_user_by_id(&self, id: DbId) -> StoreResult<Option<User>> {
        self.check_available()?;
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        self.check_available()?;
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }

    async fn create_wishlist(
        &self,
        owner_id: DbId,
        input: &CreateWishlist,
    ) -> StoreResult<Wishlist> {
        self.check_available()?;
        let wishlist = Wishlist {
            id: Uuid::new_v4(),
            user_id: owner_id,
            title: input.title.clone(),
            description: input.description.clone(),
            created_at: Utc::now(),
        };
        self.tables.write().await.wishlists.push(wishlist.clone());
        Ok(wishlist)
    }

    async fn find_wishlist(&self, id: DbId) -> StoreResult<Option<Wishlist>> {
        self.check_available()?;
        let tables = self.tables.read().await;
        Ok(tables.wishlists.iter().find(|w| w.id == id).cloned())
    }

    async fn list_wishlists(&self, owner_id: DbId) -> StoreResult<Vec<Wishlist>> {
        self.check_available()?;
        let tables = self.tables.read().await;
        Ok(tables
            .wishlists
            .iter()
            .rev()
            .filter(|w| w.user_id == owner_id)
            .cloned()
            .collect())
    }

    async fn update_wishlist(
        &self,
        id: DbId,
        input: &UpdateWishlist,
    ) -> StoreResult<Option<Wishlist>> {
        self.check_available()?;
        let mut tables = self.tables.write().await;
        let Some(wishlist) = tables.wishlists.iter_mut().find(|w| w.id == id) else {
            return Ok(None);
        };
        if let Some(title) = &input.title {
            wishlist.title = title.clone();
        }
        if let Some(description) = &input.description {
            wishlist.description = description.clone();
        }
        Ok(Some(wishlist.clone()))
    }

    async fn delete_wishlist(&self, id: DbId) -> StoreResult<bool> {
        self.check_available()?;
        let mut tables = self.tables.write().await;
        let before = tables.wishlists.len();
        tables.wishlists.retain(|w| w.id != id);
        if tables.wishlists.len() == before {
            return Ok(false);
        }

        let item_ids: Vec<DbId> = tables
            .items
            .iter()
            .filter(|i| i.wishlist_id == id)
            .map(|i| i.id)
            .collect();
        tables.items.retain(|i| i.wishlist_id != id);
        tables.purchases.retain(|p| !item_ids.contains(&p.item_id));
        tables.shares.retain(|s| s.wishlist_id != id);
        Ok(true)
    }

    async fn create_item(&self, wishlist_id: DbId, input: &CreateItem) -> StoreResult<Item> {
        self.check_available()?;
        let mut tables = self.tables.write().await;
        if !tables.wishlists.iter().any(|w| w.id == wishlist_id) {
            return Err(StoreError::ForeignKeyViolation(
                constraints::FK_ITEMS_WISHLIST.into(),
            ));
        }
        let item = Item {
            id: Uuid::new_v4(),
            wishlist_id,
            name: input.name.clone(),
            description: input.description.clone(),
            purchased: false,
            created_at: Utc::now(),
        };
        tables.items.push(item.clone());
        Ok(item)
    }

    async fn find_item(&self, id: DbId) -> StoreResult<Option<Item>> {
        self.check_available()?;
        let tables = self.tables.read().await;
        Ok(tables.items.iter().find(|i| i.id == id).cloned())
    }

    async fn list_items(&self, wishlist_id: DbId) -> StoreResult<Vec<Item>> {
        self.check_available()?;
        let tables = self.tables.read().await;
        Ok(tables
            .items
            .iter()
            .filter(|i| i.wishlist_id == wishlist_id)
            .cloned()
            .collect())
    }

    async fn record_purchase(&self, item_id: DbId, user_id: DbId) -> StoreResult<Purchase> {
        self.check_available()?;
        let mut tables = self.tables.write().await;
        if tables
            .purchases
            .iter()
            .any(|p| p.item_id == item_id && p.user_id == user_id)
        {
            return Err(StoreError::UniqueViolation(
                constraints::UQ_PURCHASES_ITEM_USER.into(),
            ));
        }
        let Some(item) = tables.items.iter_mut().find(|i| i.id == item_id) else {
            return Err(StoreError::ForeignKeyViolation(
                constraints::FK_PURCHASES_ITEM.into(),
            ));
        };
        item.purchased = true;

        let purchase = Purchase {
            id: Uuid::new_v4(),
            item_id,
            user_id,
            purchased_at: Utc::now(),
        };
        tables.purchases.push(purchase.clone());
        Ok(purchase)
    }

    async fn list_purchases(&self, wishlist_id: DbId) -> StoreResult<Vec<Purchase>> {
        self.check_available()?;
        let tables = self.tables.read().await;
        let item_ids: Vec<DbId> = tables
            .items
            .iter()
            .filter(|i| i.wishlist_id == wishlist_id)
            .map(|i| i.id)
            .collect();
        Ok(tables
            .purchases
            .iter()
            .filter(|p| item_ids.contains(&p.item_id))
            .cloned()
            .collect())
    }

    async fn create_share(&self, input: &CreateShare) -> StoreResult<Share> {
        self.check_available()?;
        let mut tables = self.tables.write().await;
        if tables.shares.iter().any(|s| s.token == input.token) {
            return Err(StoreError::UniqueViolation(
                constraints::UQ_SHARES_TOKEN.into(),
            ));
        }
        let share = Share {
            id: Uuid::new_v4(),
            wishlist_id: input.wishlist_id,
            token: input.token.clone(),
            created_at: Utc::now(),
            expires_at: input.expires_at,
        };
        tables.shares.push(share.clone());
        Ok(share)
    }

    async fn find_share_by_token(&self, token: &str) -> StoreResult<Option<Share>> {
        self.check_available()?;
        let tables = self.tables.read().await;
        Ok(tables.shares.iter().find(|s| s.token == token).cloned())
    }

    async fn health_check(&self) -> bool {
        !self.unavailable.load(Ordering::SeqCst)
    }
}
