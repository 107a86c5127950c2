//! # catalog-core: Domain Types for the Product Catalog
//!
//! The Product entity, its Category enumeration and the exact-decimal
//! Price, with no I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Caller (web layer, seed, tests)              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ catalog-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐                  │   │
//! │  │   │   types   │  │   price   │  │ validation │                  │   │
//! │  │   │  Product  │  │   Price   │  │   rules    │                  │   │
//! │  │   │  Category │  │ (Decimal) │  │   checks   │                  │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  catalog-db (Database Layer)                    │   │
//! │  │            SQLite queries, migrations, ProductRepository        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product and Category
//! - [`price`] - Exact decimal price (no floating point!)
//! - [`error`] - Validation error type
//! - [`validation`] - Field and identity rules
//!
//! ## Example Usage
//!
//! ```rust
//! use catalog_core::{Category, Price, Product};
//!
//! let price: Price = "12.50".parse().unwrap();
//! let product = Product::new("Fedora", "A red hat", price, true, Category::Cloths);
//!
//! assert_eq!(product.to_string(), "<Product Fedora id=[None]>");
//! ```

pub mod error;
pub mod price;
pub mod types;
pub mod validation;

pub use error::ValidationError;
pub use price::Price;
pub use types::*;
pub use validation::ValidationResult;

/// Maximum length of a product name, in characters.
pub const NAME_MAX_LEN: usize = 100;

/// Maximum length of a product description, in characters.
pub const DESCRIPTION_MAX_LEN: usize = 250;
