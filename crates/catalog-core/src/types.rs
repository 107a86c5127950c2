//! # Domain Types
//!
//! The catalog's entity and its category enumeration.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────┐          ┌─────────────────┐                  │
//! │  │       Product        │          │    Category     │                  │
//! │  │  ──────────────────  │          │  ─────────────  │                  │
//! │  │  id: Option<i64>     │          │  UNKNOWN        │                  │
//! │  │  name                │   ┌─────►│  CLOTHS         │                  │
//! │  │  description         │   │      │  FOOD           │                  │
//! │  │  price: Price        │   │      │  HOUSEWARES     │                  │
//! │  │  available: bool     │   │      │  AUTOMOTIVE     │                  │
//! │  │  category ───────────┼───┘      │  TOOLS          │                  │
//! │  └──────────────────────┘          └─────────────────┘                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! `id` is `None` until the repository creates the row. Once assigned it
//! never changes and is never handed out again, even after a delete.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::price::Price;
use crate::validation::{validate_product, ValidationResult};

// =============================================================================
// Category
// =============================================================================

/// The product category.
///
/// Stored and serialized by symbolic name (`"CLOTHS"`), never by ordinal,
/// so reordering variants cannot corrupt stored rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Unknown,
    Cloths,
    Food,
    Housewares,
    Automotive,
    Tools,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 6] = [
        Category::Unknown,
        Category::Cloths,
        Category::Food,
        Category::Housewares,
        Category::Automotive,
        Category::Tools,
    ];

    /// The symbolic name written to storage.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Unknown => "UNKNOWN",
            Category::Cloths => "CLOTHS",
            Category::Food => "FOOD",
            Category::Housewares => "HOUSEWARES",
            Category::Automotive => "AUTOMOTIVE",
            Category::Tools => "TOOLS",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Unknown
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "category".to_string(),
                allowed: Category::ALL.iter().map(|c| c.as_str().to_string()).collect(),
            })
    }
}

// =============================================================================
// Product
// =============================================================================

/// A sellable item in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Storage-assigned identifier. `None` until created.
    pub id: Option<i64>,

    /// Short label, 1-100 characters.
    pub name: String,

    /// Free text, up to 250 characters.
    pub description: String,

    /// Exact decimal price.
    #[ts(type = "string")]
    pub price: Price,

    /// Whether the product can currently be sold.
    pub available: bool,

    pub category: Category,
}

impl Product {
    /// Creates an unpersisted product (`id = None`).
    ///
    /// No validation happens here; the repository validates before writing.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Price,
        available: bool,
        category: Category,
    ) -> Self {
        Product {
            id: None,
            name: name.into(),
            description: description.into(),
            price,
            available,
            category,
        }
    }

    /// Whether this product has been written to storage.
    #[inline]
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Dictionary form of the product.
    ///
    /// `price` is the two-digit decimal string and `category` the symbolic
    /// name.
    pub fn to_json(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "description": self.description,
            "price": self.price.to_storage(),
            "available": self.available,
            "category": self.category.as_str(),
        })
    }

    /// Builds a new, unpersisted product from untyped dictionary data.
    ///
    /// Any `id` in the input is ignored. `price` may be a decimal string or
    /// a JSON number.
    ///
    /// ## Errors
    /// - `BadData` if `data` is not an object
    /// - `Required` if a field is missing
    /// - `InvalidFormat` if a field has the wrong JSON type
    /// - `NotAllowed` for an unknown category name
    /// - any field rule from [`validate_product`]
    pub fn from_json(data: &Value) -> ValidationResult<Self> {
        let obj = data.as_object().ok_or_else(|| ValidationError::BadData {
            entity: "Product".to_string(),
        })?;

        let name = string_field(obj, "name")?;
        let description = string_field(obj, "description")?;

        let price = match field(obj, "price")? {
            Value::String(raw) => raw.parse::<Price>()?,
            // Number's textual form keeps the literal digits for short decimals
            Value::Number(n) => n.to_string().parse::<Price>()?,
            other => return Err(wrong_type("price", "a decimal string or number", other)),
        };

        let available = match field(obj, "available")? {
            Value::Bool(flag) => *flag,
            other => return Err(wrong_type("available", "a boolean", other)),
        };

        let category = match field(obj, "category")? {
            Value::String(raw) => raw.parse::<Category>()?,
            other => return Err(wrong_type("category", "a category name", other)),
        };

        let product = Product::new(name, description, price, available, category);
        validate_product(&product)?;
        Ok(product)
    }
}

fn field<'a>(obj: &'a Map<String, Value>, name: &str) -> ValidationResult<&'a Value> {
    obj.get(name).ok_or_else(|| ValidationError::required(name))
}

fn string_field(obj: &Map<String, Value>, name: &str) -> ValidationResult<String> {
    match field(obj, name)? {
        Value::String(s) => Ok(s.clone()),
        other => Err(wrong_type(name, "a string", other)),
    }
}

fn wrong_type(field: &str, expected: &str, got: &Value) -> ValidationError {
    ValidationError::invalid_format(field, format!("expected {}, got {}", expected, got))
}

/// `<Product Fedora id=[None]>` / `<Product Fedora id=[7]>`
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "<Product {} id=[{}]>", self.name, id),
            None => write!(f, "<Product {} id=[None]>", self.name),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn fedora() -> Product {
        Product::new(
            "Fedora",
            "A red hat",
            "12.50".parse().unwrap(),
            true,
            Category::Cloths,
        )
    }

    #[test]
    fn test_new_product_fields() {
        let product = fedora();
        assert_eq!(product.id, None);
        assert!(!product.is_persisted());
        assert_eq!(product.name, "Fedora");
        assert_eq!(product.description, "A red hat");
        assert!(product.available);
        assert_eq!(product.price, Price::from_cents(1250).unwrap());
        assert_eq!(product.category, Category::Cloths);
    }

    #[test]
    fn test_display_without_id() {
        assert_eq!(fedora().to_string(), "<Product Fedora id=[None]>");
    }

    #[test]
    fn test_display_with_id() {
        let mut product = fedora();
        product.id = Some(42);
        assert_eq!(product.to_string(), "<Product Fedora id=[42]>");
    }

    #[test]
    fn test_category_name_mapping() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert_eq!(Category::Cloths.to_string(), "CLOTHS");
        assert_eq!(Category::default(), Category::Unknown);
    }

    #[test]
    fn test_category_rejects_unknown_name() {
        let err = "SHOES".parse::<Category>().unwrap_err();
        match err {
            ValidationError::NotAllowed { field, allowed } => {
                assert_eq!(field, "category");
                assert_eq!(allowed.len(), Category::ALL.len());
            }
            other => panic!("unexpected error: {other:?}"),
        }

        // Names are case-sensitive, like the stored values
        assert!("cloths".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serde_uses_name() {
        let json = serde_json::to_string(&Category::Housewares).unwrap();
        assert_eq!(json, "\"HOUSEWARES\"");
    }

    #[test]
    fn test_to_json() {
        let mut product = fedora();
        product.id = Some(3);

        let value = product.to_json();
        assert_eq!(value["id"], 3);
        assert_eq!(value["name"], "Fedora");
        assert_eq!(value["description"], "A red hat");
        assert_eq!(value["price"], "12.50");
        assert_eq!(value["available"], true);
        assert_eq!(value["category"], "CLOTHS");
    }

    #[test]
    fn test_from_json_round_trip() {
        let mut product = fedora();
        product.id = Some(9);

        let restored = Product::from_json(&product.to_json()).unwrap();
        assert_eq!(restored.id, None);
        assert_eq!(restored.name, product.name);
        assert_eq!(restored.description, product.description);
        assert_eq!(restored.price, product.price);
        assert_eq!(restored.available, product.available);
        assert_eq!(restored.category, product.category);
    }

    #[test]
    fn test_from_json_accepts_numeric_price() {
        let data = json!({
            "name": "Hat",
            "description": "A nice hat",
            "price": 10.25,
            "available": true,
            "category": "CLOTHS",
        });
        let product = Product::from_json(&data).unwrap();
        assert_eq!(product.price.to_storage(), "10.25");
    }

    #[test]
    fn test_from_json_rejects_bad_available() {
        let mut data = fedora().to_json();
        data["available"] = json!("yes");
        let err = Product::from_json(&data).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { ref field, .. } if field == "available"));
    }

    #[test]
    fn test_from_json_rejects_bad_category() {
        let mut data = fedora().to_json();
        data["category"] = json!("SHOES");
        let err = Product::from_json(&data).unwrap_err();
        assert!(matches!(err, ValidationError::NotAllowed { .. }));
    }

    #[test]
    fn test_from_json_rejects_missing_field() {
        let mut data = fedora().to_json();
        data.as_object_mut().unwrap().remove("name");
        let err = Product::from_json(&data).unwrap_err();
        assert_eq!(err, ValidationError::required("name"));
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        let err = Product::from_json(&json!("this is not a dictionary")).unwrap_err();
        assert!(matches!(err, ValidationError::BadData { .. }));

        let err = Product::from_json(&Value::Null).unwrap_err();
        assert!(matches!(err, ValidationError::BadData { .. }));
    }

    #[test]
    fn test_serde_round_trip_keeps_exact_price() {
        let product = fedora();
        let text = serde_json::to_string(&product).unwrap();
        assert!(text.contains("\"price\":\"12.50\""));
        assert!(text.contains("\"category\":\"CLOTHS\""));

        let back: Product = serde_json::from_str(&text).unwrap();
        assert_eq!(back, product);
    }
}
