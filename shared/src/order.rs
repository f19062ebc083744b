//! Order domain types and their wire forms

use crate::error::OrderValidationError;
use serde::{Deserialize, Serialize};

// ============================================================================
// Order Draft
// ============================================================================

/// A product/quantity pair staged on the detail page before checkout.
///
/// Stored in session storage as `{ "id": .., "count": .. }`. A stored record
/// with `count == 0` does not decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DraftRecord", into = "DraftRecord")]
pub struct OrderDraft {
    product_id: i64,
    quantity: u32,
}

/// Session storage layout of a draft
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct DraftRecord {
    id: i64,
    count: u32,
}

impl OrderDraft {
    /// Create a draft, rejecting a zero quantity
    pub fn new(product_id: i64, quantity: u32) -> Result<Self, OrderValidationError> {
        if quantity == 0 {
            return Err(OrderValidationError::InvalidQuantity(quantity));
        }
        Ok(Self {
            product_id,
            quantity,
        })
    }

    pub fn product_id(&self) -> i64 {
        self.product_id
    }

    /// Always greater than zero
    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

impl TryFrom<DraftRecord> for OrderDraft {
    type Error = OrderValidationError;

    fn try_from(record: DraftRecord) -> Result<Self, Self::Error> {
        Self::new(record.id, record.count)
    }
}

impl From<OrderDraft> for DraftRecord {
    fn from(draft: OrderDraft) -> Self {
        Self {
            id: draft.product_id,
            count: draft.quantity,
        }
    }
}

// ============================================================================
// Order Submission
// ============================================================================

/// Everything the order form collected for one submit attempt
///
/// Build one with [`OrderSubmission::from_draft`] (or through the client's
/// order form) so the quantity comes from a staged draft. A zero quantity
/// is rejected by validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSubmission {
    pub product_id: i64,
    pub quantity: u32,
    /// Message card text
    pub message_text: String,
    pub used_points: u64,
    pub has_cash_receipt: bool,
    pub cash_receipt_number: Option<String>,
}

impl OrderSubmission {
    /// Start a submission from a draft with an empty message and no points
    pub fn from_draft(draft: &OrderDraft) -> Self {
        Self {
            product_id: draft.product_id(),
            quantity: draft.quantity(),
            message_text: String::new(),
            used_points: 0,
            has_cash_receipt: false,
            cash_receipt_number: None,
        }
    }

    /// Body for `POST /api/orders`
    pub fn to_request(&self) -> OrderRequest {
        OrderRequest {
            option_id: self.product_id,
            quantity: self.quantity,
            message: self.message_text.clone(),
            point: self.used_points,
        }
    }
}

/// `POST /api/orders` request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub option_id: i64,
    pub quantity: u32,
    pub message: String,
    pub point: u64,
}

// ============================================================================
// Points
// ============================================================================

/// Redeemable point balance of the signed-in member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointsBalance {
    pub amount: u64,
}

impl PointsBalance {
    pub fn new(amount: u64) -> Self {
        Self { amount }
    }

    /// Limit a requested redemption to what the balance allows
    pub fn clamp(&self, requested: u64) -> u64 {
        requested.min(self.amount)
    }
}

/// `GET /api/members/points` response body
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PointsResponse {
    pub point: u64,
}

impl From<PointsResponse> for PointsBalance {
    fn from(resp: PointsResponse) -> Self {
        Self::new(resp.point)
    }
}

// ============================================================================
// Wishlist
// ============================================================================

/// `POST /api/wishes` request body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishRequest {
    pub product_id: i64,
    pub quantity: u32,
}
