//! Points query client

use crate::ClientResult;
use crate::http::HttpClient;
use crate::reporter::FailureReporter;
use shared::{PointsBalance, PointsResponse};
use std::sync::Arc;
use tracing::{debug, instrument};

pub const POINTS_PATH: &str = "/api/members/points";

/// Fetches the member's redeemable points
#[derive(Clone)]
pub struct PointsClient<H: HttpClient> {
    http: Arc<H>,
    reporter: Arc<dyn FailureReporter>,
}

impl<H: HttpClient> PointsClient<H> {
    pub fn new(http: Arc<H>, reporter: Arc<dyn FailureReporter>) -> Self {
        Self { http, reporter }
    }

    /// Current balance, or zero if the lookup fails for any reason
    ///
    /// Failures go to the reporter and are never returned.
    #[instrument(skip_all)]
    pub async fn fetch_points(&self, token: &str) -> PointsBalance {
        match self.try_fetch(token).await {
            Ok(balance) => {
                debug!(amount = balance.amount, "Points fetched");
                balance
            }
            Err(e) => {
                self.reporter.report("fetch_points", &e);
                PointsBalance::default()
            }
        }
    }

    async fn try_fetch(&self, token: &str) -> ClientResult<PointsBalance> {
        let reply = self
            .http
            .get(POINTS_PATH, Some(token))
            .await?
            .error_for_status()?;
        Ok(reply.json::<PointsResponse>()?.into())
    }
}
