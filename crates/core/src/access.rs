//! Ownership and access policy for wishlists and items.
//!
//! Every decision is a pure function of the caller identity and the
//! requested action. Handlers resolve the caller from the request, load
//! the target (so that a missing wishlist surfaces as 404 before any
//! ownership check), then ask [`authorize`] whether to proceed.

use crate::error::CoreError;
use crate::types::DbId;

/// Message returned when an operation requires a signed-in user.
pub const NOT_AUTHENTICATED: &str = "User not authenticated";

// ---------------------------------------------------------------------------
// Caller identity
// ---------------------------------------------------------------------------

/// The identity a request is acting as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Caller {
    /// No (valid) credential was presented.
    Anonymous,
    /// A signed-in user.
    User(DbId),
}

impl Caller {
    /// The user id, if the caller is authenticated.
    pub fn user_id(&self) -> Option<DbId> {
        match self {
            Caller::Anonymous => None,
            Caller::User(id) => Some(*id),
        }
    }

    /// The user id, or an `Unauthorized` error for anonymous callers.
    pub fn require_user(&self) -> Result<DbId, CoreError> {
        self.user_id()
            .ok_or_else(|| CoreError::Unauthorized(NOT_AUTHENTICATED.into()))
    }
}

impl From<Option<DbId>> for Caller {
    fn from(id: Option<DbId>) -> Self {
        id.map_or(Caller::Anonymous, Caller::User)
    }
}

// ---------------------------------------------------------------------------
// Actions and decisions
// ---------------------------------------------------------------------------

/// An operation a caller wants to perform. Owner-scoped actions carry the
/// id of the wishlist owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CreateWishlist,
    ReadWishlist { owner_id: DbId },
    UpdateWishlist { owner_id: DbId },
    DeleteWishlist { owner_id: DbId },
    AddItem { owner_id: DbId },
    ShareWishlist { owner_id: DbId },
    /// Any signed-in user may mark an item purchased, the owner included.
    PurchaseItem,
    /// Token validity is checked by the share issuer, not here.
    ReadShared,
}

impl Action {
    /// Owner of the target wishlist, for owner-scoped actions.
    fn owner_id(&self) -> Option<DbId> {
        match *self {
            Action::ReadWishlist { owner_id }
            | Action::UpdateWishlist { owner_id }
            | Action::DeleteWishlist { owner_id }
            | Action::AddItem { owner_id }
            | Action::ShareWishlist { owner_id } => Some(owner_id),
            Action::CreateWishlist | Action::PurchaseItem | Action::ReadShared => None,
        }
    }

    /// Message shown to an authenticated caller who is not the owner.
    fn forbidden_reason(&self) -> &'static str {
        match self {
            Action::AddItem { .. } => "Only the creator can add items",
            Action::ShareWishlist { .. } => "Only the creator can share the wishlist",
            Action::UpdateWishlist { .. } => "Only the creator can update the wishlist",
            Action::DeleteWishlist { .. } => "Only the creator can delete the wishlist",
            _ => "Access denied",
        }
    }
}

/// Why a request was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Denial {
    NotAuthenticated,
    Forbidden(&'static str),
}

/// Outcome of an authorization check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(Denial),
}

impl Decision {
    /// Convert a denial into the matching [`CoreError`].
    pub fn into_result(self) -> Result<(), CoreError> {
        match self {
            Decision::Allow => Ok(()),
            Decision::Deny(Denial::NotAuthenticated) => {
                Err(CoreError::Unauthorized(NOT_AUTHENTICATED.into()))
            }
            Decision::Deny(Denial::Forbidden(reason)) => Err(CoreError::Forbidden(reason.into())),
        }
    }
}

/// Decide whether `caller` may perform `action`.
pub fn authorize(caller: &Caller, action: Action) -> Decision {
    if action == Action::ReadShared {
        return Decision::Allow;
    }

    let Some(user_id) = caller.user_id() else {
        return Decision::Deny(Denial::NotAuthenticated);
    };

    match action.owner_id() {
        Some(owner_id) if owner_id != user_id => {
            Decision::Deny(Denial::Forbidden(action.forbidden_reason()))
        }
        _ => Decision::Allow,
    }
}
