//! # Error Types
//!
//! Validation errors raised by catalog-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  catalog-core errors (this file)                                       │
//! │  └── ValidationError  - Field, identity and input-shape failures       │
//! │                                                                         │
//! │  catalog-db errors (separate crate)                                    │
//! │  └── DbError          - Database failures, wraps ValidationError       │
//! │                                                                         │
//! │  Flow: ValidationError → DbError::Validation → caller                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Input validation errors.
///
/// Raised before any SQL runs, so a failing entity never reaches the
/// database.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value has the wrong shape (bad decimal, wrong JSON type, ...).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: String,
        min: String,
        max: String,
    },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Update or delete was called on a product that was never created.
    ///
    /// ## When This Occurs
    /// ```text
    /// let p = Product::new(...);   // id = None
    /// repo.update(&p)              // MissingId
    /// ```
    #[error("{entity} has no id; it must be created before it can be {action}")]
    MissingId { entity: String, action: String },

    /// Create was called on a product that already has an id.
    #[error("{entity} already has id {id}")]
    AlreadyPersisted { entity: String, id: i64 },

    /// Deserialize input was not a usable object.
    #[error("Invalid {entity}: body of request contained bad or no data")]
    BadData { entity: String },
}

impl ValidationError {
    /// Creates a Required error for a missing field.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    /// Creates an InvalidFormat error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::required("name");
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::TooLong {
            field: "name".to_string(),
            max: 100,
        };
        assert_eq!(err.to_string(), "name must be at most 100 characters");
    }

    #[test]
    fn test_missing_id_message() {
        let err = ValidationError::MissingId {
            entity: "Product".to_string(),
            action: "updated".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Product has no id; it must be created before it can be updated"
        );
    }

    #[test]
    fn test_bad_data_message() {
        let err = ValidationError::BadData {
            entity: "Product".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid Product: body of request contained bad or no data"
        );
    }
}
