//! Wishlist client

use crate::http::HttpClient;
use crate::{ClientResult, WishlistSubmitError};
use reqwest::StatusCode;
use shared::{WishRequest, WishlistPage};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

pub const WISHES_PATH: &str = "/api/wishes";

#[derive(Clone)]
pub struct WishlistClient<H: HttpClient> {
    http: Arc<H>,
}

impl<H: HttpClient> WishlistClient<H> {
    pub fn new(http: Arc<H>) -> Self {
        Self { http }
    }

    /// Add a product to the wishlist
    ///
    /// Without a token this fails with
    /// [`WishlistSubmitError::AuthenticationRequired`] and sends nothing.
    #[instrument(skip(self, token))]
    pub async fn submit_wishlist(
        &self,
        product_id: i64,
        quantity: u32,
        token: Option<&str>,
    ) -> Result<(), WishlistSubmitError> {
        let Some(token) = token.filter(|t| !t.is_empty()) else {
            return Err(WishlistSubmitError::AuthenticationRequired);
        };

        let body = WishRequest {
            product_id,
            quantity,
        };
        match self.http.post(WISHES_PATH, &body, Some(token)).await {
            Ok(reply) if reply.status == StatusCode::OK => {
                debug!("Added to wishlist");
                Ok(())
            }
            Ok(reply) => {
                warn!(status = %reply.status, body = %reply.body, "Wishlist request rejected");
                Err(WishlistSubmitError::from_status(reply.status))
            }
            Err(e) => {
                warn!(error = %e, "Wishlist request failed");
                Err(e
                    .status()
                    .map(WishlistSubmitError::from_status)
                    .unwrap_or(WishlistSubmitError::Failed))
            }
        }
    }

    /// One page of the member's wishlist, zero-based
    #[instrument(skip(self, token))]
    pub async fn list_wishlist(&self, page: u32, size: u32, token: &str) -> ClientResult<WishlistPage> {
        let path = format!("{WISHES_PATH}?page={page}&size={size}");
        self.http
            .get(&path, Some(token))
            .await?
            .error_for_status()?
            .json()
    }
}
