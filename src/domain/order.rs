use super::cart::{Cart, CartItem, Money};
use super::contact::ContactInfo;
use super::coordinate::Coordinate;
use serde::{Deserialize, Deserializer, Serialize};

/// The complete payload sent to persist a placed order.
///
/// Built once per submit and dropped after the order service returns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSubmission {
    #[serde(flatten)]
    pub contact: ContactInfo,
    pub coordinates: Coordinate,
    pub items: Vec<CartItem>,
    pub total: Money,
}

impl OrderSubmission {
    /// Composes the payload; `total` is taken from the cart at this instant.
    pub fn compose(contact: ContactInfo, coordinates: Coordinate, cart: &Cart) -> Self {
        Self {
            contact,
            coordinates,
            items: cart.items().to_vec(),
            total: cart.total(),
        }
    }
}

/// What the order service hands back on success.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderReceipt {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: Option<String>,
}

/// Backends hand out either string or numeric ids; both are kept as text.
fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    }))
}

impl OrderReceipt {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
        }
    }
}
