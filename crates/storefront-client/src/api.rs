//! # Catalog & Order Services
//!
//! The two HTTP collaborators of the storefront, behind object-safe traits so
//! the runtime can be driven by fakes in tests.
//!
//! ## Endpoints
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront HTTP API                              │
//! │                                                                         │
//! │  CatalogService                                                         │
//! │    GET  {base}/lessons                 → 200 [Lesson]                   │
//! │    GET  {base}/search?query=<encoded>  → 200 [Lesson]                   │
//! │                                                                         │
//! │  OrderService                                                           │
//! │    POST {base}/orders  OrderRequest    → 2xx {orderNumber | orderId}    │
//! │                                        → 4xx/5xx {message}?             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No retries happen here. A failure is reported once and the customer decides.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use storefront_core::{Lesson, OrderReceipt, OrderRequest};
use tracing::{debug, info, warn};

use crate::config::ApiSettings;
use crate::error::{ClientError, ClientResult};

// =============================================================================
// Service Traits
// =============================================================================

/// Read-only lesson catalog.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Every lesson on offer.
    async fn load_all(&self) -> ClientResult<Vec<Lesson>>;

    /// Lessons matching `query`. The caller has already trimmed it.
    async fn search(&self, query: &str) -> ClientResult<Vec<Lesson>>;
}

/// Accepts orders.
#[async_trait]
pub trait OrderService: Send + Sync {
    async fn place_order(&self, order: &OrderRequest) -> ClientResult<OrderReceipt>;
}

// =============================================================================
// HTTP Implementation
// =============================================================================

/// Shape of a non-2xx body; anything else is ignored.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// reqwest-backed implementation of both services.
#[derive(Debug, Clone)]
pub struct StorefrontApi {
    client: Client,
    base_url: String,
}

impl StorefrontApi {
    /// Builds a client with the configured timeouts.
    pub fn new(settings: &ApiSettings) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(settings.timeout())
            .connect_timeout(settings.connect_timeout())
            .build()?;

        Ok(Self::with_client(client, &settings.base_url))
    }

    /// Wraps an existing client.
    pub fn with_client(client: Client, base_url: &str) -> Self {
        StorefrontApi {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Turns a non-2xx response into `ClientError::Status`, reading `{message}`
    /// when the body carries one.
    async fn check_status(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .text()
            .await
            .ok()
            .and_then(|body| serde_json::from_str::<ErrorBody>(&body).ok())
            .and_then(|body| body.message);

        warn!(status = status.as_u16(), ?message, "Storefront API returned an error");
        Err(ClientError::Status {
            status: status.as_u16(),
            message,
        })
    }

    async fn get_lessons(&self, request: reqwest::RequestBuilder) -> ClientResult<Vec<Lesson>> {
        let response = Self::check_status(request.send().await?).await?;
        Ok(response.json::<Vec<Lesson>>().await?)
    }
}

#[async_trait]
impl CatalogService for StorefrontApi {
    async fn load_all(&self) -> ClientResult<Vec<Lesson>> {
        let url = self.endpoint("lessons");
        debug!(%url, "Fetching lessons");

        let lessons = self.get_lessons(self.client.get(&url)).await?;
        info!(count = lessons.len(), "Loaded lessons");
        Ok(lessons)
    }

    async fn search(&self, query: &str) -> ClientResult<Vec<Lesson>> {
        let url = self.endpoint("search");
        debug!(%url, query, "Searching lessons");

        let request = self.client.get(&url).query(&[("query", query)]);
        let lessons = self.get_lessons(request).await?;
        info!(count = lessons.len(), query, "Search returned lessons");
        Ok(lessons)
    }
}

#[async_trait]
impl OrderService for StorefrontApi {
    async fn place_order(&self, order: &OrderRequest) -> ClientResult<OrderReceipt> {
        let url = self.endpoint("orders");
        debug!(
            %url,
            lessons = order.lessons.len(),
            total = %order.total_amount,
            "Placing order"
        );

        let response = self.client.post(&url).json(order).send().await?;
        let response = Self::check_status(response).await?;

        // An empty or unexpected 2xx body still means the order was accepted.
        let body = response.text().await?;
        let receipt = serde_json::from_str::<OrderReceipt>(&body).unwrap_or_default();

        info!(confirmation = ?receipt.confirmation(), "Order accepted");
        Ok(receipt)
    }
}
