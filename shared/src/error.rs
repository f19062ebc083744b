//! Order validation errors

use thiserror::Error;

/// Reasons an order is rejected before it is sent.
///
/// The `Display` text is what gets shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderValidationError {
    /// Cash receipt requested but no number given
    #[error("cash receipt number required")]
    CashReceiptNumberRequired,

    /// Cash receipt number contains something other than digits
    #[error("cash receipt number must be numeric")]
    CashReceiptNumberNotNumeric,

    /// Message card text is empty
    #[error("message required")]
    MessageRequired,

    /// Message card text exceeds the length limit
    #[error("message too long")]
    MessageTooLong,

    /// Drafts must carry at least one item
    #[error("quantity must be positive, got {0}")]
    InvalidQuantity(u32),
}
