use mongodb::bson::Bson;
use serde::{de, Deserialize, Deserializer, Serialize};

/// A product document from the `products` collection.
///
/// The shape matches what the page is rendered from: `_id`, `name`,
/// `price` and an optional `description`. Any other stored fields are
/// ignored. An absent description stays absent when serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Stored as an ObjectId or a string; always exposed as a string
    #[serde(rename = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    /// Unit price in dollars
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Price as shown on the page: `$4.5`, `$5`.
    pub fn price_display(&self) -> String {
        format!("${}", self.price)
    }

    /// Link to the product detail page.
    pub fn detail_href(&self) -> String {
        format!("/products/{}", urlencoding::encode(&self.id))
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Bson::deserialize(deserializer)? {
        Bson::ObjectId(oid) => Ok(oid.to_hex()),
        Bson::String(id) => Ok(id),
        other => Err(de::Error::custom(format!(
            "unsupported _id type: {:?}",
            other.element_type()
        ))),
    }
}
