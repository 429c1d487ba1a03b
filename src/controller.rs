//! Cart controller
//!
//! Keeps the local cart in step with the server. Every successful response
//! replaces the local cart wholesale; failures leave it untouched and are
//! reported through the view.

use std::cell::RefCell;

use tracing::{debug, warn};

use crate::{
    api::{CartApi, CartApiError},
    cart::{Cart, CartPayload},
    products::ProductId,
    render::{CartPageView, CartRenderer},
};

/// Rendering target for cart state.
pub trait CartView {
    /// Show the number of units in the cart on the badge.
    fn show_item_count(&self, count: u64);

    /// Replace the cart page with `page`.
    fn show_page(&self, page: CartPageView);

    /// Show a success notification.
    fn show_success(&self, message: &str);

    /// Show an error notification.
    fn show_error(&self, message: &str);
}

/// User-facing cart operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    /// Fetch the current cart.
    Load,

    /// Add one unit of a product.
    Add,

    /// Set a product's quantity.
    Update,

    /// Empty the cart.
    Clear,
}

impl CartAction {
    /// Name used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Load => "load_cart",
            Self::Add => "add_to_cart",
            Self::Update => "update_quantity",
            Self::Clear => "clear_cart",
        }
    }

    /// Notification shown after the action succeeds.
    pub fn success_message(self) -> Option<&'static str> {
        match self {
            Self::Load => None,
            Self::Add => Some("Added to cart."),
            Self::Update => Some("Cart updated."),
            Self::Clear => Some("Cart cleared."),
        }
    }

    /// Message shown when a failure carries no message of its own.
    pub fn failure_fallback(self) -> &'static str {
        match self {
            Self::Load => "Load cart failed.",
            Self::Add => "Add to cart failed.",
            Self::Update => "Update cart failed.",
            Self::Clear => "Clear cart failed.",
        }
    }

    /// Whether the cart page is rebuilt after the action succeeds.
    pub fn renders_page(self) -> bool {
        matches!(self, Self::Update | Self::Clear)
    }
}

/// Synchronises a local cart with the cart API and drives a [`CartView`].
#[derive(Debug)]
pub struct CartController<A, V> {
    api: A,
    view: V,
    renderer: CartRenderer,
    cart: RefCell<Cart>,
}

impl<A: CartApi, V: CartView> CartController<A, V> {
    /// Create a controller with an empty cart.
    pub fn new(api: A, view: V) -> Self {
        Self::with_renderer(api, view, CartRenderer::default())
    }

    /// Create a controller with a custom page renderer.
    pub fn with_renderer(api: A, view: V, renderer: CartRenderer) -> Self {
        Self {
            api,
            view,
            renderer,
            cart: RefCell::new(Cart::new()),
        }
    }

    /// Snapshot of the local cart.
    pub fn cart(&self) -> Cart {
        self.cart.borrow().clone()
    }

    /// The rendering target.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Fetch the current cart and refresh the badge.
    ///
    /// # Errors
    ///
    /// Returns the API error after it has been shown to the user.
    pub async fn load_cart(&self) -> Result<(), CartApiError> {
        self.apply(CartAction::Load, self.api.get_cart()).await
    }

    /// Add one unit of a product.
    ///
    /// # Errors
    ///
    /// Returns the API error after it has been shown to the user.
    pub async fn add_to_cart(&self, product_id: ProductId) -> Result<(), CartApiError> {
        self.apply(CartAction::Add, self.api.add_product(product_id))
            .await
    }

    /// Set a product's quantity; zero removes it.
    ///
    /// # Errors
    ///
    /// Returns the API error after it has been shown to the user.
    pub async fn update_quantity(
        &self,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<(), CartApiError> {
        self.apply(
            CartAction::Update,
            self.api.set_quantity(product_id, quantity),
        )
        .await
    }

    /// Remove a product from the cart.
    ///
    /// # Errors
    ///
    /// Returns the API error after it has been shown to the user.
    pub async fn remove_from_cart(&self, product_id: ProductId) -> Result<(), CartApiError> {
        self.update_quantity(product_id, 0).await
    }

    /// Remove every product from the cart.
    ///
    /// # Errors
    ///
    /// Returns the API error after it has been shown to the user.
    pub async fn clear_cart(&self) -> Result<(), CartApiError> {
        self.apply(CartAction::Clear, self.api.clear_cart()).await
    }

    /// Rebuild the cart page from the local cart.
    pub fn render_cart_page(&self) {
        let page = self.renderer.page(&self.cart.borrow());

        self.view.show_page(page);
    }

    async fn apply(
        &self,
        action: CartAction,
        request: impl Future<Output = Result<CartPayload, CartApiError>>,
    ) -> Result<(), CartApiError> {
        match request.await {
            Ok(payload) => {
                self.replace_cart(payload.into());

                debug!(
                    action = action.name(),
                    items = self.cart.borrow().len(),
                    "cart replaced"
                );

                if action.renders_page() {
                    self.render_cart_page();
                }

                if let Some(message) = action.success_message() {
                    self.view.show_success(message);
                }

                Ok(())
            }
            Err(error) => {
                warn!(action = action.name(), %error, "cart request failed");

                self.view
                    .show_error(&error.message_or(action.failure_fallback()));

                Err(error)
            }
        }
    }

    fn replace_cart(&self, cart: Cart) {
        let count = cart.total_quantity();

        self.cart.replace(cart);
        self.view.show_item_count(count);
    }
}
