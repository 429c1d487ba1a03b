//! HTTP cart API client.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde_json::json;
use tracing::debug;

use crate::{
    api::{CART_PATH, CartApi, CartApiError, cart_product_path},
    cart::CartPayload,
    products::ProductId,
};

/// Cart API over HTTP with JSON bodies.
#[derive(Debug, Clone)]
pub struct HttpCartApi {
    base_url: String,
    token: Option<String>,
    http: Client,
}

impl HttpCartApi {
    /// Create a client for the API rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            http: Client::new(),
        }
    }

    /// Send `Authorization: Bearer <token>` with every request.
    #[must_use]
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{path}", self.base_url);

        debug!(%method, %url, "cart api request");

        let builder = self.http.request(method, url);

        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<CartPayload, CartApiError> {
        let response = builder.send().await?;

        read_cart(response).await
    }
}

async fn read_cart(response: Response) -> Result<CartPayload, CartApiError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();

        return Err(CartApiError::from_response(status.as_u16(), &body));
    }

    Ok(response.json().await?)
}

#[async_trait(?Send)]
impl CartApi for HttpCartApi {
    async fn get_cart(&self) -> Result<CartPayload, CartApiError> {
        self.send(self.request(Method::GET, CART_PATH)).await
    }

    async fn add_product(&self, product_id: ProductId) -> Result<CartPayload, CartApiError> {
        let builder = self
            .request(Method::POST, &cart_product_path(product_id))
            .json(&json!({}));

        self.send(builder).await
    }

    async fn set_quantity(
        &self,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<CartPayload, CartApiError> {
        let builder = self
            .request(Method::PUT, &cart_product_path(product_id))
            .json(&json!({ "quantity": quantity }));

        self.send(builder).await
    }

    async fn clear_cart(&self) -> Result<CartPayload, CartApiError> {
        self.send(self.request(Method::DELETE, CART_PATH)).await
    }
}
