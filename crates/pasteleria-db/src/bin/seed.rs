//! # Seed Data Generator
//!
//! Populates the database with sample bakery data for development.
//!
//! ## Usage
//! ```bash
//! # Seed ./pasteleria.db with the default sample set
//! cargo run -p pasteleria-db --bin seed
//!
//! # Generate more orders
//! cargo run -p pasteleria-db --bin seed -- --orders 200
//!
//! # Specify database path
//! cargo run -p pasteleria-db --bin seed -- --db ./data/pasteleria.db
//! ```
//!
//! ## Generated Data
//! - One product per cake in `CAKES`, priced from the table
//! - One employee per entry in `STAFF`
//! - `--orders` orders pairing customers with cakes round-robin
//!
//! Users are not seeded: registration goes through `/registro` so the
//! password hashing cost matches the server configuration.

use pasteleria_core::{Employee, Order, Product};
use pasteleria_db::{Database, DbConfig};
use serde_json::Number;
use std::env;

/// Cakes and their prices.
const CAKES: &[(&str, f64)] = &[
    ("Torta de chocolate", 18.5),
    ("Tres leches", 16.0),
    ("Cheesecake de frutilla", 21.0),
    ("Selva negra", 19.5),
    ("Pie de limón", 12.0),
    ("Brownie", 3.5),
    ("Alfajor de maicena", 1.8),
    ("Churro relleno", 1.2),
    ("Medialuna", 0.9),
    ("Flan casero", 4.5),
    ("Torta de zanahoria", 17.0),
    ("Lemon pie", 13.0),
];

/// Staff names and roles.
const STAFF: &[(&str, &str)] = &[
    ("Ana", "Pastelera"),
    ("Luis", "Cajero"),
    ("Marta", "Repostera"),
    ("Jorge", "Repartidor"),
    ("Lucía", "Encargada"),
];

/// Customers used for generated orders.
const CUSTOMERS: &[&str] = &[
    "Carlos", "Sofía", "Diego", "Valentina", "Mateo", "Camila", "Julián", "Martina",
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut order_count: usize = 25;
    let mut db_path = String::from("./pasteleria.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--orders" | "-o" => {
                if i + 1 < args.len() {
                    order_count = args[i + 1].parse().unwrap_or(25);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Pastelería Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -o, --orders <N>   Number of orders to generate (default: 25)");
                println!("  -d, --db <PATH>    Database file path (default: ./pasteleria.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Pastelería Seed Data Generator");
    println!("=================================");
    println!("Database: {}", db_path);
    println!("Orders:   {}", order_count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let start = std::time::Instant::now();

    for (name, price) in CAKES {
        db.products()
            .insert(Product {
                name: Some(name.to_string()),
                price: Number::from_f64(*price),
            })
            .await?;
    }
    println!("✓ {} products", CAKES.len());

    for (name, role) in STAFF {
        db.employees()
            .insert(Employee {
                name: Some(name.to_string()),
                role: Some(role.to_string()),
            })
            .await?;
    }
    println!("✓ {} employees", STAFF.len());

    for seed in 0..order_count {
        let order = generate_order(seed);
        if let Err(e) = db.orders().insert(order).await {
            eprintln!("Failed to insert order {}: {}", seed, e);
        }
    }
    println!("✓ {} orders", db.orders().count().await?);

    println!();
    println!("✓ Seed complete in {:?}", start.elapsed());

    db.close().await;
    Ok(())
}

/// Pairs a customer with a cake, cycling through both lists at
/// different strides so pairs don't repeat in lockstep.
fn generate_order(seed: usize) -> Order {
    let customer = CUSTOMERS[seed % CUSTOMERS.len()];
    let (cake, _) = CAKES[(seed * 7) % CAKES.len()];

    Order {
        customer: Some(customer.to_string()),
        product: Some(cake.to_string()),
    }
}
