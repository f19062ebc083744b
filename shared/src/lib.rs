//! Shared types for the gift storefront client
//!
//! Domain and wire types used by `gift-client`, together with the
//! client-side order validator. Nothing in this crate performs I/O.

pub mod error;
pub mod order;
pub mod validation;
pub mod wishlist;

// Re-exports
pub use error::OrderValidationError;
pub use order::{
    OrderDraft, OrderRequest, OrderSubmission, PointsBalance, PointsResponse, WishRequest,
};
pub use serde::{Deserialize, Serialize};
pub use validation::{MESSAGE_MAX_LEN, validate_order};
pub use wishlist::{WishlistItem, WishlistPage, WishlistProduct};
