pub mod auth;
pub mod items;
pub mod shared;
pub mod wishlists;
