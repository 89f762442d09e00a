//! Wishlist and item management for the wishlist owner.

use giftlist_core::access::{authorize, Action, Caller};
use giftlist_core::error::CoreError;
use giftlist_core::types::DbId;
use giftlist_core::validation::{validate_description, validate_item_name, validate_title};
use giftlist_db::error::{constraints, StoreError};
use giftlist_db::models::item::{CreateItem, Item};
use giftlist_db::models::view::OwnerWishlistView;
use giftlist_db::models::wishlist::{CreateWishlist, UpdateWishlist, Wishlist};
use giftlist_db::store::WishlistStore;

use crate::error::{AppError, AppResult};

fn wishlist_not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: "Wishlist",
        id,
    }
}

/// Load a wishlist and check that `caller` may perform the owner-scoped
/// action built by `action`.
///
/// Authentication is checked first, then existence (404), then ownership (403).
pub(crate) async fn load_owned(
    store: &dyn WishlistStore,
    wishlist_id: DbId,
    caller: &Caller,
    action: fn(DbId) -> Action,
) -> AppResult<Wishlist> {
    caller.require_user()?;

    let wishlist = store
        .find_wishlist(wishlist_id)
        .await?
        .ok_or_else(|| wishlist_not_found(wishlist_id))?;

    authorize(caller, action(wishlist.user_id)).into_result()?;
    Ok(wishlist)
}

/// Create a wishlist owned by the caller.
pub async fn create(
    store: &dyn WishlistStore,
    caller: &Caller,
    input: &CreateWishlist,
) -> AppResult<Wishlist> {
    authorize(caller, Action::CreateWishlist).into_result()?;
    let owner_id = caller.require_user()?;

    validate_title(&input.title)?;
    validate_description(&input.description)?;

    let input = CreateWishlist {
        title: input.title.trim().to_string(),
        description: input.description.clone(),
    };
    let wishlist = store.create_wishlist(owner_id, &input).await?;

    tracing::info!(wishlist_id = %wishlist.id, user_id = %owner_id, "Wishlist created");
    Ok(wishlist)
}

/// The caller's own wishlists, newest first.
pub async fn list(store: &dyn WishlistStore, caller: &Caller) -> AppResult<Vec<Wishlist>> {
    let owner_id = caller.require_user()?;
    Ok(store.list_wishlists(owner_id).await?)
}

/// The owner's projection of a wishlist with its items.
pub async fn owner_view(
    store: &dyn WishlistStore,
    wishlist_id: DbId,
    caller: &Caller,
) -> AppResult<OwnerWishlistView> {
    let wishlist = load_owned(store, wishlist_id, caller, |owner_id| Action::ReadWishlist {
        owner_id,
    })
    .await?;
    let items = store.list_items(wishlist.id).await?;
    Ok(OwnerWishlistView::project(wishlist, items))
}

/// Apply a partial update to a wishlist.
pub async fn update(
    store: &dyn WishlistStore,
    wishlist_id: DbId,
    caller: &Caller,
    input: &UpdateWishlist,
) -> AppResult<Wishlist> {
    load_owned(store, wishlist_id, caller, |owner_id| Action::UpdateWishlist {
        owner_id,
    })
    .await?;

    if let Some(title) = &input.title {
        validate_title(title)?;
    }
    if let Some(description) = &input.description {
        validate_description(description)?;
    }

    let input = UpdateWishlist {
        title: input.title.as_deref().map(|t| t.trim().to_string()),
        description: input.description.clone(),
    };
    let wishlist = store
        .update_wishlist(wishlist_id, &input)
        .await?
        .ok_or_else(|| wishlist_not_found(wishlist_id))?;

    tracing::info!(wishlist_id = %wishlist_id, "Wishlist updated");
    Ok(wishlist)
}

/// Delete a wishlist with its items, purchases and share links.
pub async fn delete(store: &dyn WishlistStore, wishlist_id: DbId, caller: &Caller) -> AppResult<()> {
    load_owned(store, wishlist_id, caller, |owner_id| Action::DeleteWishlist {
        owner_id,
    })
    .await?;

    if !store.delete_wishlist(wishlist_id).await? {
        return Err(wishlist_not_found(wishlist_id).into());
    }

    tracing::info!(wishlist_id = %wishlist_id, "Wishlist deleted");
    Ok(())
}

/// Add an item to a wishlist the caller owns.
pub async fn add_item(
    store: &dyn WishlistStore,
    wishlist_id: DbId,
    caller: &Caller,
    input: &CreateItem,
) -> AppResult<Item> {
    let wishlist = load_owned(store, wishlist_id, caller, |owner_id| Action::AddItem {
        owner_id,
    })
    .await?;

    validate_item_name(&input.name)?;
    validate_description(&input.description)?;

    let input = CreateItem {
        name: input.name.trim().to_string(),
        description: input.description.clone(),
    };
    let item = store
        .create_item(wishlist.id, &input)
        .await
        .map_err(|err| item_insert_error(err, wishlist.id))?;

    tracing::info!(item_id = %item.id, wishlist_id = %wishlist.id, "Item added");
    Ok(item)
}

/// A wishlist deleted between the ownership check and the insert reads as 404.
fn item_insert_error(err: StoreError, wishlist_id: DbId) -> AppError {
    if err.is_foreign_key_violation(constraints::FK_ITEMS_WISHLIST) {
        wishlist_not_found(wishlist_id).into()
    } else {
        err.into()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use giftlist_db::store::MemoryStore;
    use uuid::Uuid;

    use super::*;
    use crate::error::AppError;

    fn bike() -> CreateWishlist {
        CreateWishlist {
            title: "  Bike ".into(),
            description: "For commuting".into(),
        }
    }

    fn trek() -> CreateItem {
        CreateItem {
            name: "Trek 520".into(),
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn owner_creates_and_reads() {
        let store = MemoryStore::new();
        let owner = Caller::User(Uuid::new_v4());

        let wishlist = create(&store, &owner, &bike()).await.unwrap();
        assert_eq!(wishlist.title, "Bike");
        add_item(&store, wishlist.id, &owner, &trek()).await.unwrap();

        let view = owner_view(&store, wishlist.id, &owner).await.unwrap();
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].name, "Trek 520");
        assert!(!view.items[0].purchased);
    }

    #[tokio::test]
    async fn anonymous_cannot_create() {
        let store = MemoryStore::new();
        let err = create(&store, &Caller::Anonymous, &bike()).await.unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn blank_title_rejected() {
        let store = MemoryStore::new();
        let input = CreateWishlist {
            title: "   ".into(),
            description: String::new(),
        };
        let err = create(&store, &Caller::User(Uuid::new_v4()), &input)
            .await
            .unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn not_found_is_reported_before_forbidden() {
        let store = MemoryStore::new();
        let stranger = Caller::User(Uuid::new_v4());
        let err = owner_view(&store, Uuid::new_v4(), &stranger).await.unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::NotFound { entity: "Wishlist", .. }));
    }

    #[tokio::test]
    async fn non_owner_is_forbidden_everywhere() {
        let store = MemoryStore::new();
        let owner = Caller::User(Uuid::new_v4());
        let stranger = Caller::User(Uuid::new_v4());
        let wishlist = create(&store, &owner, &bike()).await.unwrap();

        let err = owner_view(&store, wishlist.id, &stranger).await.unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::Forbidden(ref m)) if m == "Access denied");

        let err = add_item(&store, wishlist.id, &stranger, &trek()).await.unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::Forbidden(ref m)) if m == "Only the creator can add items");

        let err = update(&store, wishlist.id, &stranger, &UpdateWishlist::default())
            .await
            .unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::Forbidden(_)));

        let err = delete(&store, wishlist.id, &stranger).await.unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::Forbidden(_)));
    }

    #[tokio::test]
    async fn update_keeps_unset_fields() {
        let store = MemoryStore::new();
        let owner = Caller::User(Uuid::new_v4());
        let wishlist = create(&store, &owner, &bike()).await.unwrap();

        let updated = update(
            &store,
            wishlist.id,
            &owner,
            &UpdateWishlist {
                title: Some("Road bike".into()),
                description: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.title, "Road bike");
        assert_eq!(updated.description, "For commuting");
    }

    #[tokio::test]
    async fn list_only_returns_own_wishlists() {
        let store = MemoryStore::new();
        let alice = Caller::User(Uuid::new_v4());
        let bob = Caller::User(Uuid::new_v4());
        create(&store, &alice, &bike()).await.unwrap();
        create(&store, &bob, &bike()).await.unwrap();

        let mine = list(&store, &alice).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(Some(mine[0].user_id), alice.user_id());
    }

    #[tokio::test]
    async fn delete_then_lookup_is_not_found() {
        let store = MemoryStore::new();
        let owner = Caller::User(Uuid::new_v4());
        let wishlist = create(&store, &owner, &bike()).await.unwrap();

        delete(&store, wishlist.id, &owner).await.unwrap();
        let err = owner_view(&store, wishlist.id, &owner).await.unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::NotFound { .. }));
    }

    #[test]
    fn item_insert_into_vanished_wishlist_is_not_found() {
        let wishlist_id = Uuid::new_v4();
        let err = item_insert_error(
            StoreError::ForeignKeyViolation(constraints::FK_ITEMS_WISHLIST.into()),
            wishlist_id,
        );
        assert_matches!(
            err,
            AppError::Core(CoreError::NotFound { entity: "Wishlist", id }) if id == wishlist_id
        );

        let err = item_insert_error(
            StoreError::ForeignKeyViolation(constraints::FK_PURCHASES_ITEM.into()),
            wishlist_id,
        );
        assert_matches!(err, AppError::Store(StoreError::ForeignKeyViolation(_)));
    }
}
