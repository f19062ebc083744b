//! Gift Client - storefront client for the gift shop REST API
//!
//! Handles the order draft handoff between the product page and the order
//! page, client-side order validation, and the authenticated calls for
//! points, orders and the wishlist.

pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod http;
pub mod order;
pub mod points;
pub mod reporter;
pub mod session;
pub mod wishlist;

pub use client::GiftClient;
pub use config::ClientConfig;
pub use error::{
    CheckoutError, ClientError, ClientResult, OrderSubmitError, WishlistSubmitError,
};
pub use form::OrderForm;
pub use http::{ApiReply, HttpClient, NetworkHttpClient};
pub use order::OrderClient;
pub use points::PointsClient;
pub use reporter::{FailureReporter, TracingReporter};
pub use session::{MemorySessionStorage, Session, SessionStorage};
pub use wishlist::WishlistClient;

// Re-export shared types for convenience
pub use shared::{
    OrderDraft, OrderSubmission, OrderValidationError, PointsBalance, WishlistPage,
    validate_order,
};
