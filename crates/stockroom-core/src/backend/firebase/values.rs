//! Firestore REST value codec for item documents.

use serde::Deserialize;
use serde_json::{Map, Value, json};

use crate::models::{Item, ItemFields, ItemId, Quantity};

const NAME_FIELD: &str = "name";
const QUANTITY_FIELD: &str = "quantity";

/// Field paths written by create/update, used for PATCH update masks.
pub(crate) const FIELD_PATHS: [&str; 2] = [NAME_FIELD, QUANTITY_FIELD];

/// A Firestore document as returned by the REST API.
#[derive(Debug, Deserialize)]
pub(crate) struct Document {
    /// Full resource name: `projects/{p}/databases/(default)/documents/{collection}/{id}`
    pub name: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl Document {
    /// Last path segment of the resource name.
    pub fn id(&self) -> Option<ItemId> {
        self.name
            .rsplit('/')
            .next()
            .filter(|id| !id.is_empty())
            .map(ItemId::new)
    }

    /// Decodes the document into an item, or `None` if it is malformed.
    pub fn into_item(self) -> Option<Item> {
        let id = self.id()?;
        let name = self
            .fields
            .get(NAME_FIELD)?
            .get("stringValue")?
            .as_str()?
            .to_string();
        if name.is_empty() {
            return None;
        }
        let quantity = decode_quantity(self.fields.get(QUANTITY_FIELD)?)?;
        Some(Item { id, name, quantity })
    }
}

/// Page of a collection listing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListDocumentsResponse {
    #[serde(default)]
    pub documents: Vec<Document>,
    pub next_page_token: Option<String>,
}

/// Encodes item fields as a Firestore document body.
pub(crate) fn encode_fields(fields: &ItemFields) -> Value {
    json!({
        "fields": {
            "name": { "stringValue": fields.name },
            "quantity": { "integerValue": fields.quantity.get().to_string() },
        }
    })
}

fn decode_quantity(value: &Value) -> Option<Quantity> {
    if let Some(raw) = value.get("integerValue") {
        // int64 is serialized as a JSON string, but accept bare numbers too
        let parsed = match raw {
            Value::String(s) => s.parse::<u64>().ok(),
            Value::Number(n) => n.as_u64(),
            _ => None,
        }?;
        return Quantity::new(parsed);
    }
    let double = value.get("doubleValue")?.as_f64()?;
    if !double.is_finite() || double < 1.0 || double >= Quantity::MAX as f64 {
        return None;
    }
    Quantity::new(double.trunc() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(body: Value) -> Document {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_decodes_integer_document() {
        let doc = document(json!({
            "name": "projects/p/databases/(default)/documents/items/abc123",
            "fields": {
                "name": { "stringValue": "Widget" },
                "quantity": { "integerValue": "5" }
            }
        }));
        let item = doc.into_item().unwrap();
        assert_eq!(item.id.as_str(), "abc123");
        assert_eq!(item.name, "Widget");
        assert_eq!(item.quantity.get(), 5);
    }

    #[test]
    fn test_decodes_double_quantity_by_truncation() {
        let doc = document(json!({
            "name": "projects/p/databases/(default)/documents/items/x",
            "fields": {
                "name": { "stringValue": "Bolt" },
                "quantity": { "doubleValue": 3.9 }
            }
        }));
        assert_eq!(doc.into_item().unwrap().quantity.get(), 3);
    }

    #[test]
    fn test_skips_malformed_documents() {
        let zero = document(json!({
            "name": "projects/p/databases/(default)/documents/items/x",
            "fields": {
                "name": { "stringValue": "Bolt" },
                "quantity": { "integerValue": "0" }
            }
        }));
        assert!(zero.into_item().is_none());

        let no_name = document(json!({
            "name": "projects/p/databases/(default)/documents/items/y",
            "fields": { "quantity": { "integerValue": "2" } }
        }));
        assert!(no_name.into_item().is_none());
    }

    #[test]
    fn test_encode_fields_uses_string_int64() {
        let body = encode_fields(&ItemFields {
            name: "Widget".to_string(),
            quantity: Quantity::new(12).unwrap(),
        });
        assert_eq!(body["fields"]["name"]["stringValue"], "Widget");
        assert_eq!(body["fields"]["quantity"]["integerValue"], "12");
    }
}
