//! Cart

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, de::IgnoredAny};

use crate::products::{Product, ProductId, null_as_default};

/// A single cart line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CartItem {
    /// Product snapshot
    pub product: Product,

    /// Units of the product in the cart
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub quantity: u32,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireQuantity {
    Number(Decimal),
    Other(IgnoredAny),
}

/// Read a quantity from any JSON number or numeric string.
///
/// Fractions are truncated and negatives clamp to 0; anything that is not a
/// number counts as 0.
fn lenient_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let quantity = match WireQuantity::deserialize(deserializer)? {
        WireQuantity::Number(value) => value.trunc().max(Decimal::ZERO),
        WireQuantity::Other(_) => Decimal::ZERO,
    };

    Ok(u32::try_from(quantity).unwrap_or(u32::MAX))
}

impl CartItem {
    /// Product identifier of this line.
    pub fn product_id(&self) -> ProductId {
        self.product.id
    }
}

/// Cart payload as returned by every cart endpoint.
///
/// Items arrive keyed by product id; the mapping keeps document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CartPayload {
    /// Server computed total
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: Decimal,

    /// Items keyed by product id
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: IndexMap<String, CartItem>,
}

/// Client copy of the server's cart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartItem>,
    total: Decimal,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cart from items and a total.
    pub fn with_items(items: impl Into<Vec<CartItem>>, total: Decimal) -> Self {
        Self {
            items: items.into(),
            total,
        }
    }

    /// Cart lines, in the order the server listed them.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Server computed total.
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across all lines, as shown on the cart badge.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Find the line for a product.
    pub fn item(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items
            .iter()
            .find(|item| item.product_id() == product_id)
    }
}

impl From<CartPayload> for Cart {
    fn from(payload: CartPayload) -> Self {
        Self {
            items: payload.items.into_values().collect(),
            total: payload.total,
        }
    }
}
