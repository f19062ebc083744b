//! Gift client facade
//!
//! Ties config, transport, session and failure reporting together and
//! exposes the storefront flow:
//!
//! 1. detail page: [`GiftClient::send_as_gift`] stages a draft
//! 2. order page: [`GiftClient::open_order_form`] reads it and fetches points
//! 3. submit: [`GiftClient::place_order`] validates, then sends
//!
//! # Example
//!
//! ```no_run
//! use gift_client::{ClientConfig, GiftClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GiftClient::new(&ClientConfig::from_env()?)?;
//! client.sign_in_with_token("token");
//! client.send_as_gift(42, 2)?;
//!
//! let mut form = client.open_order_form().await?;
//! form.set_message("Happy birthday!");
//! form.set_used_points(500);
//! client.place_order(&form).await?;
//! # Ok(())
//! # }
//! ```

use crate::form::OrderForm;
use crate::http::{HttpClient, NetworkHttpClient};
use crate::order::OrderClient;
use crate::points::PointsClient;
use crate::reporter::{FailureReporter, TracingReporter};
use crate::session::Session;
use crate::wishlist::WishlistClient;
use crate::{CheckoutError, ClientConfig, ClientError, ClientResult, WishlistSubmitError};
use shared::{OrderDraft, PointsBalance, WishlistPage};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Storefront client over one session
pub struct GiftClient<H: HttpClient = NetworkHttpClient> {
    session: Session,
    points: PointsClient<H>,
    orders: OrderClient<H>,
    wishes: WishlistClient<H>,
}

impl GiftClient<NetworkHttpClient> {
    /// Network client with an in-memory session and tracing reporter
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let http = NetworkHttpClient::new(config)?;
        Ok(Self::with_parts(
            Arc::new(http),
            Session::in_memory(),
            Arc::new(TracingReporter),
        ))
    }
}

impl<H: HttpClient> GiftClient<H> {
    pub fn with_parts(http: Arc<H>, session: Session, reporter: Arc<dyn FailureReporter>) -> Self {
        Self {
            session,
            points: PointsClient::new(http.clone(), reporter),
            orders: OrderClient::new(http.clone()),
            wishes: WishlistClient::new(http),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    // ========== Auth ==========

    pub fn sign_in_with_token(&self, token: impl Into<String>) {
        self.session.set_token(token);
    }

    pub fn sign_out(&self) {
        self.session.clear_token();
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.token().is_some()
    }

    // ========== Checkout Flow ==========

    /// Stage `quantity` of `product_id` for the order page
    ///
    /// Requires a signed-in session.
    #[instrument(skip(self))]
    pub fn send_as_gift(&self, product_id: i64, quantity: u32) -> Result<OrderDraft, CheckoutError> {
        if !self.is_signed_in() {
            return Err(CheckoutError::AuthenticationRequired);
        }
        let draft = OrderDraft::new(product_id, quantity)?;
        self.session.set_draft(&draft);
        debug!("Draft staged");
        Ok(draft)
    }

    /// Open the order page
    ///
    /// [`CheckoutError::NoDraft`] tells the caller to send the user back to
    /// the catalog. Points are only fetched for a signed-in session.
    #[instrument(skip(self))]
    pub async fn open_order_form(&self) -> Result<OrderForm, CheckoutError> {
        let draft = self.session.get_draft().ok_or(CheckoutError::NoDraft)?;
        let points = match self.session.token() {
            Some(token) => self.points.fetch_points(&token).await,
            None => PointsBalance::default(),
        };
        Ok(OrderForm::new(draft, points))
    }

    /// Validate the form and submit it
    ///
    /// Invalid input never reaches the network.
    #[instrument(skip_all)]
    pub async fn place_order(&self, form: &OrderForm) -> Result<(), CheckoutError> {
        let submission = form.validate()?;
        let token = self
            .session
            .token()
            .ok_or(CheckoutError::AuthenticationRequired)?;
        self.orders.submit_order(&submission, &token).await?;
        info!(product_id = submission.product_id, "Gift order completed");
        Ok(())
    }

    // ========== Wishlist ==========

    pub async fn add_to_wishlist(
        &self,
        product_id: i64,
        quantity: u32,
    ) -> Result<(), WishlistSubmitError> {
        let token = self.session.token();
        self.wishes
            .submit_wishlist(product_id, quantity, token.as_deref())
            .await
    }

    pub async fn wishlist(&self, page: u32, size: u32) -> ClientResult<WishlistPage> {
        let token = self
            .session
            .token()
            .ok_or(ClientError::Unauthorized)?;
        self.wishes.list_wishlist(page, size, &token).await
    }
}
