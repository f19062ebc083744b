//! Client-side order validation
//!
//! Runs before an order is dispatched. The first failing rule wins:
//! quantity, cash receipt number, then message presence, then message length.

use crate::error::OrderValidationError;
use crate::order::OrderSubmission;

/// Longest accepted message card text, in UTF-16 code units
///
/// Characters outside the Basic Multilingual Plane (most emoji) count twice.
pub const MESSAGE_MAX_LEN: usize = 100;

/// Check an order submission against the storefront's form rules
pub fn validate_order(submission: &OrderSubmission) -> Result<(), OrderValidationError> {
    if submission.quantity == 0 {
        return Err(OrderValidationError::InvalidQuantity(0));
    }

    if submission.has_cash_receipt {
        let number = submission
            .cash_receipt_number
            .as_deref()
            .filter(|n| !n.is_empty())
            .ok_or(OrderValidationError::CashReceiptNumberRequired)?;

        if !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(OrderValidationError::CashReceiptNumberNotNumeric);
        }
    }

    let len = submission.message_text.encode_utf16().count();
    if len < 1 {
        return Err(OrderValidationError::MessageRequired);
    }
    if len > MESSAGE_MAX_LEN {
        return Err(OrderValidationError::MessageTooLong);
    }

    Ok(())
}

impl OrderSubmission {
    /// See [`validate_order`]
    pub fn validate(&self) -> Result<(), OrderValidationError> {
        validate_order(self)
    }
}
