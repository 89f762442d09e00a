//! Purchaser visibility.
//!
//! The identity of whoever bought an item is disclosed to nobody except
//! that purchaser. The owner never learns who bought their gift, not even
//! when they open their own wishlist through a share link, and other
//! purchasers of the same item are not told about each other.

use crate::access::Caller;
use crate::types::DbId;

/// Label shown to a viewer on items they purchased themselves.
pub const PURCHASED_BY_YOU: &str = "you";

/// Decide what purchaser label, if any, `viewer` may see for an item
/// bought by `purchasers`.
pub fn purchaser_label<'a, I>(viewer: &Caller, purchasers: I) -> Option<&'static str>
where
    I: IntoIterator<Item = &'a DbId>,
{
    let viewer_id = viewer.user_id()?;
    purchasers
        .into_iter()
        .any(|id| *id == viewer_id)
        .then_some(PURCHASED_BY_YOU)
}
