//! # Validation Module
//!
//! Field rules for a Product, checked before any row is written.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Types                                                        │
//! │  ├── Price: non-negative, two fractional digits                        │
//! │  └── Category: closed enum                                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── name / description lengths                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── CHECK constraints on name, description, category                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use catalog_core::validation::{validate_product_name, validate_description};
//!
//! validate_product_name("Fedora").unwrap();
//! validate_description("").unwrap();
//! assert!(validate_product_name("   ").is_err());
//! ```

use crate::error::ValidationError;
use crate::types::Product;
use crate::{DESCRIPTION_MAX_LEN, NAME_MAX_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - At most 100 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::required("name"));
    }

    if name.chars().count() > NAME_MAX_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: NAME_MAX_LEN,
        });
    }

    Ok(())
}

/// Validates a product description.
///
/// ## Rules
/// - May be empty
/// - At most 250 characters
pub fn validate_description(description: &str) -> ValidationResult<()> {
    if description.chars().count() > DESCRIPTION_MAX_LEN {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: DESCRIPTION_MAX_LEN,
        });
    }

    Ok(())
}

/// Validates every field of a product that is about to be written.
///
/// `price` and `category` are already valid by construction.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_name(&product.name)?;
    validate_description(&product.description)?;
    Ok(())
}

/// Returns the id of a product that must already exist in storage.
///
/// ## Arguments
/// * `action` - past-tense verb used in the error ("updated", "deleted")
pub fn require_id(product: &Product, action: &str) -> ValidationResult<i64> {
    product.id.ok_or_else(|| ValidationError::MissingId {
        entity: "Product".to_string(),
        action: action.to_string(),
    })
}

/// Ensures a product has not been created yet.
pub fn require_unpersisted(product: &Product) -> ValidationResult<()> {
    match product.id {
        Some(id) => Err(ValidationError::AlreadyPersisted {
            entity: "Product".to_string(),
            id,
        }),
        None => Ok(()),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price::Price;
    use crate::types::Category;

    fn hat() -> Product {
        Product::new("Hat", "A nice hat", Price::from_cents(1000).unwrap(), true, Category::Cloths)
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Fedora").is_ok());
        assert!(validate_product_name(&"A".repeat(NAME_MAX_LEN)).is_ok());

        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(NAME_MAX_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_description() {
        assert!(validate_description("").is_ok());
        assert!(validate_description("A red hat").is_ok());
        assert!(validate_description(&"x".repeat(DESCRIPTION_MAX_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_product() {
        assert!(validate_product(&hat()).is_ok());

        let mut product = hat();
        product.name = String::new();
        assert_eq!(
            validate_product(&product).unwrap_err(),
            ValidationError::required("name")
        );
    }

    #[test]
    fn test_require_id() {
        let mut product = hat();
        assert!(matches!(
            require_id(&product, "updated"),
            Err(ValidationError::MissingId { .. })
        ));

        product.id = Some(5);
        assert_eq!(require_id(&product, "updated").unwrap(), 5);
    }

    #[test]
    fn test_require_unpersisted() {
        let mut product = hat();
        assert!(require_unpersisted(&product).is_ok());

        product.id = Some(5);
        assert_eq!(
            require_unpersisted(&product).unwrap_err(),
            ValidationError::AlreadyPersisted {
                entity: "Product".to_string(),
                id: 5
            }
        );
    }
}
