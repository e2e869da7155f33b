//! HTTP client for the product endpoints.

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use thiserror::Error;

use crate::api::envelope::Envelope;
use crate::domain::product::{NewProduct, Product, ProductId, ProductPatch};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/products";

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-success status
    #[error("{status} {status_text}")]
    Status { status: u16, status_text: String },

    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Invalid response body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Client for the `/products` endpoints
///
/// Every call resolves with the parsed response envelope, or fails with
/// `ClientError::Status` whose message is the status line (`"404 Not Found"`).
#[derive(Debug, Clone)]
pub struct ApiRepo {
    http: Client,
    base_url: String,
}

impl Default for ApiRepo {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiRepo {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_products(&self) -> Result<Envelope<Product>, ClientError> {
        self.send(self.request(Method::GET, None)).await
    }

    pub async fn get_product(&self, id: ProductId) -> Result<Envelope<Product>, ClientError> {
        self.send(self.request(Method::GET, Some(id))).await
    }

    pub async fn create_product(&self, product: &NewProduct) -> Result<Envelope<Product>, ClientError> {
        self.send_json(self.request(Method::POST, None), product).await
    }

    pub async fn update_product(
        &self,
        id: ProductId,
        patch: &ProductPatch,
    ) -> Result<Envelope<Product>, ClientError> {
        self.send_json(self.request(Method::PUT, Some(id)), patch).await
    }

    pub async fn delete_product(&self, id: ProductId) -> Result<Envelope<Product>, ClientError> {
        self.send(self.request(Method::DELETE, Some(id))).await
    }

    fn request(&self, method: Method, id: Option<ProductId>) -> RequestBuilder {
        let url = match id {
            Some(id) => format!("{}/{}", self.base_url, id),
            None => self.base_url.clone(),
        };
        tracing::debug!(%method, %url, "Sending product request");
        self.http.request(method, url)
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        request: RequestBuilder,
        body: &B,
    ) -> Result<Envelope<Product>, ClientError> {
        self.send(request.json(body)).await
    }

    async fn send(&self, request: RequestBuilder) -> Result<Envelope<Product>, ClientError> {
        let response = request.send().await.map_err(ClientError::Transport)?;
        let response = check_status(response)?;

        response.json().await.map_err(ClientError::Decode)
    }
}

fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    Err(ClientError::Status {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or_default().to_string(),
    })
}
