//! Order submission client

use crate::OrderSubmitError;
use crate::http::HttpClient;
use reqwest::StatusCode;
use shared::OrderSubmission;
use std::sync::Arc;
use tracing::{info, instrument, warn};

pub const ORDERS_PATH: &str = "/api/orders";

/// Sends orders to the storefront API
///
/// Does not validate; run [`OrderSubmission::validate`] first. Concurrent
/// calls are not de-duplicated.
#[derive(Clone)]
pub struct OrderClient<H: HttpClient> {
    http: Arc<H>,
}

impl<H: HttpClient> OrderClient<H> {
    pub fn new(http: Arc<H>) -> Self {
        Self { http }
    }

    /// Submit an order; only `200 OK` counts as success
    #[instrument(skip_all, fields(product_id = submission.product_id, quantity = submission.quantity))]
    pub async fn submit_order(
        &self,
        submission: &OrderSubmission,
        token: &str,
    ) -> Result<(), OrderSubmitError> {
        let body = submission.to_request();
        match self.http.post(ORDERS_PATH, &body, Some(token)).await {
            Ok(reply) if reply.status == StatusCode::OK => {
                info!("Order placed");
                Ok(())
            }
            Ok(reply) => {
                warn!(status = %reply.status, body = %reply.body, "Order rejected");
                Err(OrderSubmitError {
                    status: Some(reply.status),
                })
            }
            Err(e) => {
                warn!(error = %e, "Order request failed");
                Err(OrderSubmitError { status: e.status() })
            }
        }
    }
}
