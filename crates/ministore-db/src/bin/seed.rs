//! # Seed Data Installer
//!
//! Writes the five sample products into a MiniStore database.
//!
//! ## Usage
//! ```bash
//! # Seed ./ministore_dev.db (skipped if it already has products)
//! cargo run -p ministore-db --bin seed
//!
//! # Overwrite whatever catalog is there
//! cargo run -p ministore-db --bin seed -- --force
//!
//! # Specify database path and storage key
//! cargo run -p ministore-db --bin seed -- --db ./data/ministore.db --key ministore_products
//! ```

use ministore_core::DEFAULT_STORAGE_KEY;
use ministore_db::{CatalogStore, Database, DbConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    let mut db_path = String::from("./ministore_dev.db");
    let mut key = String::from(DEFAULT_STORAGE_KEY);
    let mut force = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--key" | "-k" => {
                if i + 1 < args.len() {
                    key = args[i + 1].clone();
                    i += 1;
                }
            }
            "--force" | "-f" => force = true,
            "--help" | "-h" => {
                println!("MiniStore Seed Data Installer");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./ministore_dev.db)");
                println!("  -k, --key <KEY>    Durable storage key (default: {})", DEFAULT_STORAGE_KEY);
                println!("  -f, --force        Replace an existing catalog");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            other => eprintln!("Ignoring unknown argument: {}", other),
        }
        i += 1;
    }

    println!("🌱 MiniStore Seed Data Installer");
    println!("================================");
    println!("Database: {}", db_path);
    println!("Key:      {}", key);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let mut store = CatalogStore::open(db.storage(), key).await?;

    if !store.products().is_empty() && !force {
        println!("⚠ Catalog already has {} products", store.products().len());
        println!("  Skipping seed. Pass --force to replace it.");
        return Ok(());
    }

    store.reset_to_samples().await?;

    println!();
    for product in store.products() {
        println!("  {:<10} {:<32} {:<12} {:>8.2}", product.id, product.name, product.category, product.price);
    }

    let used = store.storage().usage_bytes().await?;
    println!();
    println!("✓ Installed {} products ({} bytes of storage used)", store.products().len(), used);

    db.close().await;
    Ok(())
}
