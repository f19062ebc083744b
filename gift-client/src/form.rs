//! Order form state
//!
//! What the order page holds between opening and submitting: the staged
//! draft, the fetched point balance, and the user's input.

use shared::{OrderDraft, OrderSubmission, OrderValidationError, PointsBalance};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderForm {
    draft: OrderDraft,
    remaining_points: PointsBalance,
    used_points: u64,
    message: String,
    has_cash_receipt: bool,
    cash_receipt_number: Option<String>,
}

impl OrderForm {
    pub fn new(draft: OrderDraft, remaining_points: PointsBalance) -> Self {
        Self {
            draft,
            remaining_points,
            used_points: 0,
            message: String::new(),
            has_cash_receipt: false,
            cash_receipt_number: None,
        }
    }

    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    pub fn remaining_points(&self) -> PointsBalance {
        self.remaining_points
    }

    pub fn used_points(&self) -> u64 {
        self.used_points
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Set the points to redeem, capped at the remaining balance.
    /// Returns the value actually applied.
    pub fn set_used_points(&mut self, requested: u64) -> u64 {
        self.used_points = self.remaining_points.clamp(requested);
        self.used_points
    }

    pub fn enable_cash_receipt(&mut self, number: impl Into<String>) {
        self.has_cash_receipt = true;
        self.cash_receipt_number = Some(number.into());
    }

    pub fn disable_cash_receipt(&mut self) {
        self.has_cash_receipt = false;
        self.cash_receipt_number = None;
    }

    /// Snapshot of the form for one submit attempt
    pub fn submission(&self) -> OrderSubmission {
        OrderSubmission {
            message_text: self.message.clone(),
            used_points: self.used_points,
            has_cash_receipt: self.has_cash_receipt,
            cash_receipt_number: self.cash_receipt_number.clone(),
            ..OrderSubmission::from_draft(&self.draft)
        }
    }

    pub fn validate(&self) -> Result<OrderSubmission, OrderValidationError> {
        let submission = self.submission();
        submission.validate()?;
        Ok(submission)
    }
}
