//! Cart page render model
//!
//! Rendering targets receive a fully built [`CartPageView`] and replace
//! whatever they showed before with it.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::{
    cart::{Cart, CartItem},
    products::ProductId,
};

pub mod stepper;

/// Page title.
pub const CART_TITLE: &str = "Cart";

/// Label of the clear action.
pub const CLEAR_LABEL: &str = "Clear";

/// Label of the per-line remove action.
pub const REMOVE_LABEL: &str = "Remove";

/// Message shown in place of rows when the cart is empty.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty.";

/// Default directory product images are served from.
pub const DEFAULT_IMAGE_BASE_PATH: &str = "/images/products";

/// Render model for the cart page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartPageView {
    /// Page header
    pub header: CartHeaderView,

    /// Page body
    pub body: CartBodyView,
}

/// Render model for the page header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartHeaderView {
    /// Heading text, including the item count
    pub title: String,

    /// Units in the cart
    pub item_count: u64,

    /// Whether the clear action can be used
    pub clear_enabled: bool,
}

/// Render model for the page body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartBodyView {
    /// No lines; show the message instead.
    Empty {
        /// Empty-state message
        message: String,
    },

    /// One row per line, followed by the total.
    Items {
        /// Item rows
        rows: Vec<CartRowView>,

        /// Formatted total line
        total: String,
    },
}

/// Render model for an item row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRowView {
    /// Product the row controls
    pub product_id: ProductId,

    /// Image source
    pub image_src: String,

    /// Image alt text
    pub image_alt: String,

    /// Product name
    pub name: String,

    /// Formatted unit price
    pub price: String,

    /// Product description
    pub description: String,

    /// Quantity shown between the stepper buttons
    pub quantity: u32,
}

impl CartPageView {
    /// Number of item rows on the page.
    pub fn row_count(&self) -> usize {
        match &self.body {
            CartBodyView::Empty { .. } => 0,
            CartBodyView::Items { rows, .. } => rows.len(),
        }
    }
}

/// Builds [`CartPageView`]s from cart state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRenderer {
    image_base_path: String,
}

impl Default for CartRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_BASE_PATH)
    }
}

impl CartRenderer {
    /// Create a renderer that resolves images under `image_base_path`.
    pub fn new(image_base_path: impl Into<String>) -> Self {
        let image_base_path = image_base_path.into();

        Self {
            image_base_path: image_base_path.trim_end_matches('/').to_string(),
        }
    }

    /// Build the full page for a cart.
    pub fn page(&self, cart: &Cart) -> CartPageView {
        let item_count = cart.total_quantity();

        let header = CartHeaderView {
            title: format!("{CART_TITLE} ({item_count})"),
            item_count,
            clear_enabled: !cart.is_empty(),
        };

        let body = if cart.is_empty() {
            CartBodyView::Empty {
                message: EMPTY_CART_MESSAGE.to_string(),
            }
        } else {
            CartBodyView::Items {
                rows: cart.items().iter().map(|item| self.row(item)).collect(),
                total: format_total(cart.total()),
            }
        };

        CartPageView { header, body }
    }

    /// Build a single item row.
    pub fn row(&self, item: &CartItem) -> CartRowView {
        let product = &item.product;

        CartRowView {
            product_id: product.id,
            image_src: self.image_src(&product.image_url),
            image_alt: product.name.clone(),
            name: product.name.clone(),
            price: format_price(product.price),
            description: product.description.clone(),
            quantity: item.quantity,
        }
    }

    /// Resolve a product image file name to a URL path.
    pub fn image_src(&self, image_url: &str) -> String {
        format!("{}/{image_url}", self.image_base_path)
    }
}

/// Format an amount as dollars with exactly two decimal places.
pub fn format_price(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${:.2}", rounded.abs())
    } else {
        format!("${:.2}", rounded.abs())
    }
}

/// Format the cart total line.
pub fn format_total(total: Decimal) -> String {
    format!("Total: {}", format_price(total))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::products::Product;

    use super::*;

    fn item(id: ProductId, name: &str, price: Decimal, quantity: u32) -> CartItem {
        CartItem {
            product: Product {
                id,
                name: name.to_string(),
                price,
                description: format!("{name} description"),
                image_url: format!("{id}.png"),
            },
            quantity,
        }
    }

    #[test]
    fn formats_whole_amount_with_two_places() {
        assert_eq!(format_total(Decimal::from(5)), "Total: $5.00");
    }

    #[test]
    fn formats_one_place_amount_with_two_places() {
        assert_eq!(format_price(Decimal::new(125, 1)), "$12.50");
    }

    #[test]
    fn rounds_extra_places() {
        assert_eq!(format_price(Decimal::new(19_985, 3)), "$19.99");
        assert_eq!(format_price(Decimal::new(19_984, 3)), "$19.98");
    }

    #[test]
    fn formats_zero() {
        assert_eq!(format_price(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn large_amounts_have_no_grouping() {
        assert_eq!(format_price(Decimal::new(123_456, 2)), "$1234.56");
    }

    #[test]
    fn empty_cart_page_shows_message_and_disables_clear() {
        let page = CartRenderer::default().page(&Cart::new());

        assert!(!page.header.clear_enabled);
        assert_eq!(page.header.title, "Cart (0)");
        assert_eq!(
            page.body,
            CartBodyView::Empty {
                message: EMPTY_CART_MESSAGE.to_string()
            }
        );
        assert_eq!(page.row_count(), 0);
    }

    #[test]
    fn non_empty_cart_page_has_one_row_per_line() -> TestResult {
        let cart = Cart::with_items(
            vec![
                item(1, "Apple", Decimal::new(50, 2), 3),
                item(2, "Pear", Decimal::new(75, 2), 1),
            ],
            Decimal::new(225, 2),
        );

        let page = CartRenderer::default().page(&cart);

        assert!(page.header.clear_enabled);
        assert_eq!(page.header.item_count, 4);
        assert_eq!(page.row_count(), 2);

        let CartBodyView::Items { rows, total } = page.body else {
            return Err("expected item rows".into());
        };

        assert_eq!(total, "Total: $2.25");

        let names: Vec<_> = rows.iter().map(|row| row.name.as_str()).collect();

        assert_eq!(names, vec!["Apple", "Pear"]);

        Ok(())
    }

    #[test]
    fn row_exposes_product_details() {
        let row = CartRenderer::default().row(&item(7, "Widget", Decimal::new(999, 2), 2));

        assert_eq!(
            row,
            CartRowView {
                product_id: 7,
                image_src: "/images/products/7.png".to_string(),
                image_alt: "Widget".to_string(),
                name: "Widget".to_string(),
                price: "$9.99".to_string(),
                description: "Widget description".to_string(),
                quantity: 2,
            }
        );
    }

    #[test]
    fn custom_image_base_path_is_normalised() {
        let renderer = CartRenderer::new("https://cdn.test/img/");

        assert_eq!(renderer.image_src("a.jpg"), "https://cdn.test/img/a.jpg");
    }
}
