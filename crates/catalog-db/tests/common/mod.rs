// tests/common/mod.rs
#![allow(dead_code)] // Not every test file uses every helper

use catalog_core::{Category, Price, Product};
use catalog_db::{Database, DbConfig, ProductRepository};
use std::sync::atomic::{AtomicUsize, Ordering};

/// A fresh, private in-memory database per test.
pub async fn setup() -> (Database, ProductRepository) {
    let db = Database::new(DbConfig::in_memory())
        .await
        .expect("in-memory database should open");
    let repo = db.products();
    (db, repo)
}

pub fn price(text: &str) -> Price {
    text.parse().expect("test price should parse")
}

pub fn product(name: &str, description: &str, price_text: &str, available: bool, category: Category) -> Product {
    Product::new(name, description, price(price_text), available, category)
}

static SEQUENCE: AtomicUsize = AtomicUsize::new(0);

/// Builds a varied, valid, unpersisted product.
///
/// Every call yields a distinct name; the other fields cycle through
/// the categories, both availability values and a spread of prices.
pub fn product_factory() -> Product {
    let n = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let category = Category::ALL[n % Category::ALL.len()];
    let cents = 100 + (n as i64 * 997) % 50_000;

    Product::new(
        format!("Item {}", n),
        format!("Generated product number {}", n),
        Price::from_cents(cents).expect("factory price is in range"),
        n % 2 == 0,
        category,
    )
}
