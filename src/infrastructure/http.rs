use crate::domain::order::{OrderReceipt, OrderSubmission};
use crate::domain::ports::OrderService;
use crate::error::{CheckoutError, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Persists orders by POSTing them as JSON to `{base_url}/orders`.
///
/// Any 2xx status counts as success. A JSON body such as `{"id": "..."}` or
/// `{"id": 1}` is read into the receipt. An empty body yields an empty receipt;
/// so does a body that is not a receipt, after a warning is logged.
/// Requests are not retried.
pub struct HttpOrderService {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HttpOrderService {
    /// # Arguments
    ///
    /// * `base_url` - Root of the orders API, with or without a trailing slash.
    /// * `timeout` - Per-request timeout applied by the HTTP client.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    pub fn orders_url(&self) -> String {
        format!("{}/orders", self.base_url)
    }
}

#[async_trait]
impl OrderService for HttpOrderService {
    async fn submit_order(&self, order: &OrderSubmission) -> Result<OrderReceipt> {
        let url = self.orders_url();
        debug!(%url, "posting order");

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(order)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CheckoutError::ServiceError(format!("HTTP {status}")));
        }

        let body = response.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(OrderReceipt::default());
        }
        match serde_json::from_slice(&body) {
            Ok(receipt) => Ok(receipt),
            Err(e) => {
                warn!(%status, error = %e, "order accepted but response body is not a receipt");
                Ok(OrderReceipt::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders_url_trims_trailing_slash() {
        let service = HttpOrderService::new("http://localhost:3000/api/", DEFAULT_TIMEOUT);
        assert_eq!(service.orders_url(), "http://localhost:3000/api/orders");
    }
}
