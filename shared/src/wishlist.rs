//! Wishlist page types returned by `GET /api/wishes`

use serde::{Deserialize, Serialize};

/// Product summary embedded in a wishlist entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistProduct {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub image_url: String,
}

/// One wishlist entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    pub id: i64,
    pub product: WishlistProduct,
}

/// Paginated wishlist envelope
///
/// Only the fields the client uses are decoded; the server's `pageable`
/// and `sort` blocks are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistPage {
    pub content: Vec<WishlistItem>,
    pub total_pages: u32,
    pub total_elements: u64,
    /// Zero-based page index
    pub number: u32,
    pub size: u32,
    pub number_of_elements: u32,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}
