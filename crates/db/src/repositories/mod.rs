//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod item_repo;
pub mod purchase_repo;
pub mod share_repo;
pub mod user_repo;
pub mod wishlist_repo;

pub use item_repo::ItemRepo;
pub use purchase_repo::PurchaseRepo;
pub use share_repo::ShareRepo;
pub use user_repo::UserRepo;
pub use wishlist_repo::WishlistRepo;
