//! Cart line items.
//!
//! The cart only inspects an item's `id`, its `prix.total` and the `url` of
//! its two logos. Everything else the pricing and customization layers put on
//! an item is carried through untouched.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::CartError;

/// One line entry in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Line identifier, used as the key for removal and update.
    pub id: String,
    /// Price breakdown of this line.
    pub prix: Price,
    /// Front logo.
    #[serde(default, deserialize_with = "null_as_default")]
    pub logo_avant: Logo,
    /// Back logo.
    #[serde(default, deserialize_with = "null_as_default")]
    pub logo_arriere: Logo,
    /// Fields the cart does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CartItem {
    /// Create an item with a line total and no logos.
    pub fn new(id: impl Into<String>, total: f64) -> Self {
        Self {
            id: id.into(),
            prix: Price::new(total),
            logo_avant: Logo::default(),
            logo_arriere: Logo::default(),
            extra: Map::new(),
        }
    }

    /// Set the front logo URL.
    pub fn with_logo_avant(mut self, url: impl Into<String>) -> Self {
        self.logo_avant.url = Some(url.into());
        self
    }

    /// Set the back logo URL.
    pub fn with_logo_arriere(mut self, url: impl Into<String>) -> Self {
        self.logo_arriere.url = Some(url.into());
        self
    }

    /// Attach an opaque field.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }

    /// This line's contribution to the cart total.
    pub fn total(&self) -> f64 {
        self.prix.total
    }

    /// Copy of the item with both logo URLs cleared.
    ///
    /// Other logo fields (position, size, ...) are kept.
    pub fn stripped(&self) -> Self {
        let mut item = self.clone();
        item.logo_avant.url = None;
        item.logo_arriere.url = None;
        item
    }
}

/// Price breakdown of a line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    /// Amount added to the cart total.
    pub total: f64,
    /// Other price fields, passed through.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Price {
    /// Create a price with only a total.
    pub fn new(total: f64) -> Self {
        Self {
            total,
            extra: Map::new(),
        }
    }
}

/// A logo placed on a line item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Logo {
    /// Image location, frequently an embedded data URI.
    #[serde(default)]
    pub url: Option<String>,
    /// Other logo fields, passed through.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Encode a cart as the JSON array stored in the durable sink.
///
/// JSON has no NaN or infinity, so a line with such a total is refused
/// rather than written as `null`.
pub fn encode_items(items: &[CartItem]) -> Result<String, CartError> {
    if let Some(item) = items.iter().find(|item| !item.prix.total.is_finite()) {
        return Err(CartError::NonFiniteTotal(item.id.clone()));
    }
    Ok(serde_json::to_string(items)?)
}

/// Decode a stored JSON array back into cart items.
pub fn decode_items(json: &str) -> Result<Vec<CartItem>, CartError> {
    Ok(serde_json::from_str(json)?)
}
