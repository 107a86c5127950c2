//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - CRUD: `create`, `find`, `update`, `delete`
//! - Finders: by name, category, availability and price
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Lifecycle                                    │
//! │                                                                         │
//! │  Product::new(..)          id = None          (never persisted)        │
//! │       │                                                                 │
//! │       │  repo.create(&mut p)   INSERT, id written back into p          │
//! │       ▼                                                                 │
//! │  persisted                 id = Some(n)                                 │
//! │       │                                                                 │
//! │       │  repo.update(&p)       UPDATE ... WHERE id = n  (id unchanged) │
//! │       │  repo.delete(&p)       DELETE ... WHERE id = n                 │
//! │       ▼                                                                 │
//! │  deleted                   repo.find(n) == None, n is never reused     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Row Mapping
//! `price` is stored as decimal text and `category` as its symbolic name.
//! Both are parsed back through the catalog-core types; a value that does
//! not parse surfaces as `DbError::CorruptRow` instead of being guessed at.

use catalog_core::validation::{require_id, require_unpersisted, validate_product};
use catalog_core::{Category, Price, Product};
use sqlx::SqlitePool;
use tracing::{debug, warn};

use crate::error::{DbError, DbResult};

/// Expands to `SELECT <all product columns> FROM products <tail>`.
macro_rules! select_products {
    ($tail:literal) => {
        concat!(
            "SELECT id, name, description, price, available, category FROM products ",
            $tail
        )
    };
}

/// Raw `products` row, before the price and category are parsed.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: String,
    price: String,
    available: bool,
    category: String,
}

impl TryFrom<ProductRow> for Product {
    type Error = DbError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let price = Price::from_storage(&row.price)
            .map_err(|e| DbError::corrupt(row.id, "price", e))?;
        let category = row
            .category
            .parse::<Category>()
            .map_err(|_| DbError::corrupt(row.id, "category", format!("unknown name '{}'", row.category)))?;

        Ok(Product {
            id: Some(row.id),
            name: row.name,
            description: row.description,
            price,
            available: row.available,
            category,
        })
    }
}

fn into_products(rows: Vec<ProductRow>) -> DbResult<Vec<Product>> {
    rows.into_iter().map(Product::try_from).collect()
}

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
///
/// let mut hat = Product::new("Fedora", "A red hat", "12.50".parse()?, true, Category::Cloths);
/// repo.create(&mut hat).await?;
///
/// let found = repo.find(hat.id.unwrap()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts a new product and writes the assigned id back into it.
    ///
    /// ## Returns
    /// * `Ok(id)` - the new id, also stored in `product.id`
    /// * `Err(DbError::Validation)` - product already has an id, or a field rule failed
    /// * `Err(DbError::ConstraintViolation)` - the row was rejected by the schema
    pub async fn create(&self, product: &mut Product) -> DbResult<i64> {
        require_unpersisted(product)?;
        validate_product(product)?;

        debug!(name = %product.name, "Creating product");

        let result = sqlx::query(
            r#"
            INSERT INTO products (name, description, price, available, category)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price.to_storage())
        .bind(product.available)
        .bind(product.category.as_str())
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        product.id = Some(id);

        debug!(id = id, "Product created");
        Ok(id)
    }

    /// Persists every field of an existing product.
    ///
    /// ## Returns
    /// * `Ok(())` - row updated, id unchanged
    /// * `Err(DbError::Validation)` - product has no id, or a field rule failed
    /// * `Err(DbError::NotFound)` - no row with that id (e.g. already deleted)
    pub async fn update(&self, product: &Product) -> DbResult<()> {
        let id = require_id(product, "updated")?;
        validate_product(product)?;

        debug!(id = id, "Updating product");

        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = ?2,
                description = ?3,
                price = ?4,
                available = ?5,
                category = ?6
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price.to_storage())
        .bind(product.available)
        .bind(product.category.as_str())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Permanently removes a product's row.
    ///
    /// Deleting a row that is already gone succeeds; afterwards
    /// `find(id)` returns `None` either way. The entity keeps its id.
    pub async fn delete(&self, product: &Product) -> DbResult<()> {
        let id = require_id(product, "deleted")?;

        debug!(id = id, name = %product.name, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            debug!(id = id, "Product was already deleted");
        }

        Ok(())
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn find(&self, id: i64) -> DbResult<Option<Product>> {
        debug!(id = id, "Finding product");

        let row = sqlx::query_as::<_, ProductRow>(select_products!("WHERE id = ?1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Product::try_from).transpose()
    }

    /// Returns every product, in id order.
    pub async fn all(&self) -> DbResult<Vec<Product>> {
        debug!("Listing all products");

        let rows = sqlx::query_as::<_, ProductRow>(select_products!("ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;

        into_products(rows)
    }

    /// Returns the first product (lowest id) whose name equals `name`.
    ///
    /// Exact match, not a substring search. Names are not unique in the
    /// schema; when more than one row matches a warning is logged and the
    /// lowest id wins. Use [`find_all_by_name`](Self::find_all_by_name) to
    /// see every match.
    pub async fn find_by_name(&self, name: &str) -> DbResult<Option<Product>> {
        debug!(name = %name, "Finding product by name");

        let rows = sqlx::query_as::<_, ProductRow>(select_products!(
            "WHERE name = ?1 ORDER BY id LIMIT 2"
        ))
        .bind(name)
        .fetch_all(&self.pool)
        .await?;

        if rows.len() > 1 {
            warn!(name = %name, "Multiple products share this name; returning the first");
        }

        rows.into_iter().next().map(Product::try_from).transpose()
    }

    /// Returns every product whose name equals `name`, in id order.
    pub async fn find_all_by_name(&self, name: &str) -> DbResult<Vec<Product>> {
        debug!(name = %name, "Finding all products by name");

        let rows = sqlx::query_as::<_, ProductRow>(select_products!("WHERE name = ?1 ORDER BY id"))
            .bind(name)
            .fetch_all(&self.pool)
            .await?;

        into_products(rows)
    }

    /// Returns every product in `category`.
    pub async fn find_by_category(&self, category: Category) -> DbResult<Vec<Product>> {
        debug!(category = %category, "Finding products by category");

        let rows =
            sqlx::query_as::<_, ProductRow>(select_products!("WHERE category = ?1 ORDER BY id"))
                .bind(category.as_str())
                .fetch_all(&self.pool)
                .await?;

        into_products(rows)
    }

    /// Returns every product whose `available` flag equals `available`.
    pub async fn find_by_availability(&self, available: bool) -> DbResult<Vec<Product>> {
        debug!(available = available, "Finding products by availability");

        let rows =
            sqlx::query_as::<_, ProductRow>(select_products!("WHERE available = ?1 ORDER BY id"))
                .bind(available)
                .fetch_all(&self.pool)
                .await?;

        into_products(rows)
    }

    /// Returns every product priced exactly at `price`.
    ///
    /// Prices are stored in one canonical text form, so `12.5` finds a
    /// product created at `12.50`.
    pub async fn find_by_price(&self, price: Price) -> DbResult<Vec<Product>> {
        debug!(price = %price, "Finding products by price");

        let rows = sqlx::query_as::<_, ProductRow>(select_products!("WHERE price = ?1 ORDER BY id"))
            .bind(price.to_storage())
            .fetch_all(&self.pool)
            .await?;

        into_products(rows)
    }

    /// Counts persisted products.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Deletes every product row and returns how many were removed.
    ///
    /// Ids handed out before are still never reused.
    pub async fn delete_all(&self) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM products")
            .execute(&self.pool)
            .await?;

        debug!(removed = result.rows_affected(), "Deleted all products");
        Ok(result.rows_affected())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
