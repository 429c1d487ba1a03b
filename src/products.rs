//! Products

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// Product identifier as used in cart API paths.
pub type ProductId = u64;

/// Product snapshot embedded in a cart line.
///
/// The server owns the catalogue; this is whatever it sent with the last
/// cart response, kept only for display.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product identifier; 0 when the server left it out
    #[serde(
        rename = "productId",
        alias = "id",
        default,
        deserialize_with = "null_as_default"
    )]
    pub id: ProductId,

    /// Product name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Unit price
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: Decimal,

    /// Product description
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// Image file name, relative to the product image directory
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_url: String,
}

/// Treat an explicit `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn deserializes_wire_product() -> TestResult {
        let product: Product = serde_json::from_str(
            r#"{"productId":7,"name":"Widget","price":9.99,"description":"d","imageUrl":"w.png"}"#,
        )?;

        assert_eq!(product.id, 7);
        assert_eq!(product.name, "Widget");
        assert_eq!(product.price, Decimal::new(999, 2));
        assert_eq!(product.description, "d");
        assert_eq!(product.image_url, "w.png");

        Ok(())
    }

    #[test]
    fn missing_and_null_fields_default() -> TestResult {
        let product: Product =
            serde_json::from_str(r#"{"productId":3,"name":null,"price":null}"#)?;

        assert_eq!(product.name, "");
        assert_eq!(product.price, Decimal::ZERO);
        assert_eq!(product.description, "");
        assert_eq!(product.image_url, "");

        Ok(())
    }

    #[test]
    fn accepts_plain_id_key() -> TestResult {
        let product: Product = serde_json::from_str(r#"{"id":12}"#)?;

        assert_eq!(product.id, 12);

        Ok(())
    }

    #[test]
    fn missing_id_defaults_to_zero() -> TestResult {
        let product: Product = serde_json::from_str(r#"{"name":"x"}"#)?;

        assert_eq!(product.id, 0);
        assert_eq!(product.name, "x");

        Ok(())
    }
}
