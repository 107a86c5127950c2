//! # Repository Module
//!
//! Database repository implementations for the catalog.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Product is plain data; it knows nothing about storage.                │
//! │                                                                         │
//! │  Caller                                                                │
//! │       │                                                                 │
//! │       │  db.products().find_by_category(Category::Cloths)              │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── create / update / delete                                          │
//! │  ├── find / all                                                        │
//! │  └── find_by_name / _category / _availability / _price                 │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD and finders

pub mod product;
