//! # Seed Data Generator
//!
//! Populates the database with generated products for development.
//!
//! ## Usage
//! ```bash
//! # Generate 200 products (default) into $DATABASE_URI or ./catalog.db
//! cargo run -p catalog-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p catalog-db --bin seed -- --count 1000
//!
//! # Specify database path
//! cargo run -p catalog-db --bin seed -- --db ./data/catalog.db
//! ```
//!
//! ## Generated Products
//! Every category gets products, cycling through the names below. Each one
//! has a price of 1.99 - 99.99 and roughly one in five is unavailable.

use catalog_core::{Category, Price, Product};
use catalog_db::{Database, DbConfig};
use std::env;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Product names per category.
const NAMES: &[(Category, &[&str])] = &[
    (
        Category::Cloths,
        &["Fedora", "Hat", "Shirt", "Scarf", "Jacket", "Socks", "Gloves", "Jeans"],
    ),
    (
        Category::Food,
        &["Bread", "Cheese", "Apples", "Coffee", "Pasta", "Rice", "Honey", "Olive Oil"],
    ),
    (
        Category::Housewares,
        &["Mug", "Kettle", "Towel", "Lamp", "Frying Pan", "Vase", "Broom", "Candle"],
    ),
    (
        Category::Automotive,
        &["Wiper Blade", "Motor Oil", "Air Filter", "Tire Gauge", "Jumper Cables"],
    ),
    (
        Category::Tools,
        &["Hammer", "Screwdriver", "Wrench", "Pliers", "Tape Measure", "Drill"],
    ),
    (Category::Unknown, &["Mystery Box", "Gift Card"]),
];

const DEFAULT_COUNT: usize = 200;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    let mut count = DEFAULT_COUNT;
    let mut db_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = parse_count(&args[i + 1]);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Product Catalog Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: {})", DEFAULT_COUNT);
                println!("  -d, --db <PATH>    Database file path (default: $DATABASE_URI or ./catalog.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            other => warn!(arg = %other, "Ignoring unknown argument"),
        }
        i += 1;
    }

    let config = match db_path {
        Some(path) => DbConfig::new(path),
        None => DbConfig::from_env()?,
    };
    let db = Database::new(config).await?;
    let repo = db.products();

    let existing = repo.count().await?;
    if existing > 0 {
        warn!(
            existing = existing,
            "Database already has products; skipping seed to avoid duplicates"
        );
        return Ok(());
    }

    info!(count = count, "Generating products");
    let start = std::time::Instant::now();
    let mut generated = 0;

    for seed in 0..count {
        let mut product = generate_product(seed)?;

        if let Err(e) = repo.create(&mut product).await {
            error!(name = %product.name, error = %e, "Failed to insert product");
            continue;
        }

        generated += 1;
        if generated % 50 == 0 {
            info!(generated = generated, "Seeding in progress");
        }
    }

    info!(
        generated = generated,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Seed complete"
    );

    for category in Category::ALL {
        let in_category = repo.find_by_category(category).await?.len();
        info!(category = %category, products = in_category, "Category summary");
    }

    db.close().await;
    Ok(())
}

/// Parses `--count`, falling back to the default on garbage.
fn parse_count(raw: &str) -> usize {
    match raw.trim().parse() {
        Ok(count) => count,
        Err(_) => {
            warn!(value = %raw, default = DEFAULT_COUNT, "Invalid --count, using default");
            DEFAULT_COUNT
        }
    }
}

/// Builds one product deterministically from its sequence number.
fn generate_product(seed: usize) -> Result<Product, catalog_core::ValidationError> {
    let (category, names) = NAMES[seed % NAMES.len()];
    let base = names[(seed / NAMES.len()) % names.len()];
    let edition = seed / (NAMES.len() * names.len()) + 1;

    let name = if edition == 1 {
        base.to_string()
    } else {
        format!("{} #{}", base, edition)
    };

    // 1.99 - 99.99
    let price = Price::from_cents(199 + ((seed as i64 * 1_733) % 9_801))?;
    let available = seed % 5 != 4;

    Ok(Product::new(
        name,
        format!("A fine {} from the {} aisle", base.to_lowercase(), category.as_str().to_lowercase()),
        price,
        available,
        category,
    ))
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every repository call
/// - Default: `info,catalog=debug,sqlx=warn`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,catalog=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("1000"), 1000);
        assert_eq!(parse_count(" 7 "), 7);
        assert_eq!(parse_count("lots"), DEFAULT_COUNT);
        assert_eq!(parse_count("-3"), DEFAULT_COUNT);
    }

    #[test]
    fn test_generated_products_are_valid() {
        for seed in 0..NAMES.len() * 10 {
            let product = generate_product(seed).unwrap();
            catalog_core::validation::validate_product(&product).unwrap();
            assert_eq!(product.id, None);
        }
    }
}
