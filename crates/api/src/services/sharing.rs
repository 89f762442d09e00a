//! Issuing share links and resolving them for anonymous viewers.

use chrono::Utc;
use giftlist_core::access::{authorize, Action, Caller};
use giftlist_core::error::CoreError;
use giftlist_core::sharing::{
    build_share_link, ensure_share_active, generate_share_token, is_well_formed_token,
    share_expiry,
};
use giftlist_core::types::{DbId, Timestamp};
use giftlist_db::models::share::{CreateShare, Share};
use giftlist_db::models::view::SharedWishlistView;
use giftlist_db::models::wishlist::Wishlist;
use giftlist_db::store::WishlistStore;
use serde::Serialize;

use crate::error::AppResult;
use crate::services::wishlists::load_owned;

/// A freshly minted share link.
#[derive(Debug, Serialize)]
pub struct IssuedShare {
    pub shareable_link: String,
    pub token: String,
    pub expires_at: Option<Timestamp>,
}

/// Mint a new share token for a wishlist the caller owns.
///
/// Earlier tokens for the same wishlist stay valid.
pub async fn issue(
    store: &dyn WishlistStore,
    base_url: &str,
    wishlist_id: DbId,
    caller: &Caller,
    ttl_hours: Option<i64>,
) -> AppResult<IssuedShare> {
    let wishlist = load_owned(store, wishlist_id, caller, |owner_id| Action::ShareWishlist {
        owner_id,
    })
    .await?;

    let expires_at = share_expiry(Utc::now(), ttl_hours)?;
    let share = store
        .create_share(&CreateShare {
            wishlist_id: wishlist.id,
            token: generate_share_token(),
            expires_at,
        })
        .await?;

    tracing::info!(
        wishlist_id = %wishlist.id,
        share_id = %share.id,
        expires_at = ?share.expires_at,
        "Share link issued"
    );

    Ok(IssuedShare {
        shareable_link: build_share_link(base_url, &share.token),
        token: share.token,
        expires_at: share.expires_at,
    })
}

/// Look up an active share and the wishlist it grants access to.
pub async fn resolve(store: &dyn WishlistStore, token: &str) -> AppResult<(Share, Wishlist)> {
    if !is_well_formed_token(token) {
        return Err(CoreError::InvalidShareLink.into());
    }

    let share = store
        .find_share_by_token(token)
        .await?
        .ok_or(CoreError::InvalidShareLink)?;
    ensure_share_active(share.expires_at, Utc::now())?;

    let wishlist = store
        .find_wishlist(share.wishlist_id)
        .await?
        .ok_or(CoreError::InvalidShareLink)?;

    Ok((share, wishlist))
}

/// The wishlist behind `token`, projected for `viewer`.
pub async fn shared_view(
    store: &dyn WishlistStore,
    token: &str,
    viewer: &Caller,
) -> AppResult<SharedWishlistView> {
    authorize(viewer, Action::ReadShared).into_result()?;
    let (_, wishlist) = resolve(store, token).await?;

    let items = store.list_items(wishlist.id).await?;
    let purchases = store.list_purchases(wishlist.id).await?;

    Ok(SharedWishlistView::project(wishlist, items, &purchases, viewer))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::Duration;
    use giftlist_core::sharing::SHARE_TOKEN_LEN;
    use giftlist_db::models::item::CreateItem;
    use giftlist_db::models::wishlist::CreateWishlist;
    use giftlist_db::store::MemoryStore;
    use uuid::Uuid;

    use super::*;
    use crate::error::AppError;

    const BASE: &str = "https://gifts.example.com/";

    async fn seed(store: &MemoryStore, owner: DbId) -> Wishlist {
        store
            .create_wishlist(
                owner,
                &CreateWishlist {
                    title: "Bike".into(),
                    description: String::new(),
                },
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn issue_builds_link_from_token() {
        let store = MemoryStore::new();
        let owner = Uuid::new_v4();
        let wishlist = seed(&store, owner).await;

        let issued = issue(&store, BASE, wishlist.id, &Caller::User(owner), None)
            .await
            .unwrap();

        assert_eq!(issued.token.len(), SHARE_TOKEN_LEN);
        assert_eq!(
            issued.shareable_link,
            format!("https://gifts.example.com/shared/{}", issued.token)
        );
        assert!(issued.expires_at.is_none());
    }

    #[tokio::test]
    async fn reissuing_keeps_old_tokens_valid() {
        let store = MemoryStore::new();
        let owner = Uuid::new_v4();
        let wishlist = seed(&store, owner).await;
        let caller = Caller::User(owner);

        let first = issue(&store, BASE, wishlist.id, &caller, None).await.unwrap();
        let second = issue(&store, BASE, wishlist.id, &caller, Some(24)).await.unwrap();

        assert_ne!(first.token, second.token);
        assert!(second.expires_at.is_some());
        for token in [&first.token, &second.token] {
            let (_, resolved) = resolve(&store, token).await.unwrap();
            assert_eq!(resolved.id, wishlist.id);
        }
    }

    #[tokio::test]
    async fn only_owner_may_share() {
        let store = MemoryStore::new();
        let wishlist = seed(&store, Uuid::new_v4()).await;

        let err = issue(&store, BASE, wishlist.id, &Caller::User(Uuid::new_v4()), None)
            .await
            .unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::Forbidden(ref m)) if m == "Only the creator can share the wishlist");

        let err = issue(&store, BASE, wishlist.id, &Caller::Anonymous, None)
            .await
            .unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn out_of_range_ttl_is_rejected() {
        let store = MemoryStore::new();
        let owner = Uuid::new_v4();
        let wishlist = seed(&store, owner).await;

        let err = issue(&store, BASE, wishlist.id, &Caller::User(owner), Some(0))
            .await
            .unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn unknown_and_malformed_tokens_are_invalid() {
        let store = MemoryStore::new();
        let unknown = "ab".repeat(SHARE_TOKEN_LEN / 2);
        for token in ["nope", unknown.as_str()] {
            let err = resolve(&store, token).await.unwrap_err();
            assert_matches!(err, AppError::Core(CoreError::InvalidShareLink));
        }
    }

    #[tokio::test]
    async fn expired_token_is_gone() {
        let store = MemoryStore::new();
        let wishlist = seed(&store, Uuid::new_v4()).await;
        let token = generate_share_token();
        store
            .create_share(&CreateShare {
                wishlist_id: wishlist.id,
                token: token.clone(),
                expires_at: Some(Utc::now() - Duration::hours(1)),
            })
            .await
            .unwrap();

        let err = resolve(&store, &token).await.unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::Gone(_)));
    }

    #[tokio::test]
    async fn shared_view_labels_only_the_viewers_purchase() {
        let store = MemoryStore::new();
        let owner = Uuid::new_v4();
        let buyer = Uuid::new_v4();
        let wishlist = seed(&store, owner).await;
        let item = store
            .create_item(
                wishlist.id,
                &CreateItem {
                    name: "Trek 520".into(),
                    description: String::new(),
                },
            )
            .await
            .unwrap();
        store.record_purchase(item.id, buyer).await.unwrap();
        let issued = issue(&store, BASE, wishlist.id, &Caller::User(owner), None)
            .await
            .unwrap();

        let as_buyer = shared_view(&store, &issued.token, &Caller::User(buyer))
            .await
            .unwrap();
        assert_eq!(as_buyer.items[0].purchased_by, Some("you"));

        for viewer in [Caller::User(owner), Caller::Anonymous] {
            let view = shared_view(&store, &issued.token, &viewer).await.unwrap();
            assert!(view.items[0].purchased);
            assert_eq!(view.items[0].purchased_by, None);
        }
    }
}
