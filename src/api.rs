//! Cart API
//!
//! The remote service that owns cart state. Every call answers with the full
//! cart, which the caller uses to replace its local copy.

use async_trait::async_trait;
use mockall::automock;

use crate::{cart::CartPayload, products::ProductId};

pub mod errors;
pub mod http;

pub use errors::CartApiError;
pub use http::HttpCartApi;

/// Path of the current user's cart.
pub const CART_PATH: &str = "/cart";

/// Path of a single product line in the current user's cart.
pub fn cart_product_path(product_id: ProductId) -> String {
    format!("{CART_PATH}/products/{product_id}")
}

/// Remote cart operations.
#[automock]
#[async_trait(?Send)]
pub trait CartApi {
    /// Fetch the current cart.
    async fn get_cart(&self) -> Result<CartPayload, CartApiError>;

    /// Add one unit of a product.
    async fn add_product(&self, product_id: ProductId) -> Result<CartPayload, CartApiError>;

    /// Set the quantity of a product; zero removes the line.
    async fn set_quantity(
        &self,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<CartPayload, CartApiError>;

    /// Remove every line from the cart.
    async fn clear_cart(&self) -> Result<CartPayload, CartApiError>;
}
