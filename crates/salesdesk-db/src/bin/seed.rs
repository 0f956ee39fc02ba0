//! # Seed Data Generator
//!
//! Populates the database with departments and sellers for development.
//!
//! ## Usage
//! ```bash
//! # Seed with defaults
//! cargo run -p salesdesk-db --bin seed
//!
//! # Custom amounts
//! cargo run -p salesdesk-db --bin seed -- --sellers-per-dept 8
//!
//! # Specify database path
//! cargo run -p salesdesk-db --bin seed -- --db ./data/salesdesk.db
//! ```
//!
//! Each department gets a roster of sellers with deterministic names,
//! emails, birth dates and salaries, inserted through the repositories so
//! generated keys flow exactly as they do in the application.

use std::env;

use chrono::NaiveDate;
use salesdesk_core::{Department, Seller};
use salesdesk_db::{Database, DbConfig};
use tracing_subscriber::EnvFilter;

/// Departments created by the seeder.
const DEPARTMENTS: &[&str] = &["Books", "Computers", "Electronics", "Sales"];

/// First names cycled through per department roster.
const FIRST_NAMES: &[&str] = &[
    "Alice", "Bob", "Carol", "David", "Eve", "Frank", "Grace", "Henry", "Iris", "Jack", "Karen",
    "Liam", "Mona", "Nathan", "Olivia", "Peter",
];

/// Surnames cycled through with a stride so pairings vary.
const SURNAMES: &[&str] = &[
    "Almeida", "Brown", "Costa", "Davis", "Evans", "Ferreira", "Green", "Harris", "Iglesias",
    "Jones", "King", "Lopes", "Martins", "Nunes", "Oliveira", "Pereira",
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut sellers_per_dept: usize = 5;
    let mut db_path = String::from("./salesdesk_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--sellers-per-dept" | "-s" => {
                if i + 1 < args.len() {
                    sellers_per_dept = args[i + 1].parse().unwrap_or(5);
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
                println!("Salesdesk Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -s, --sellers-per-dept <N>  Sellers per department (default: 5)");
                println!("  -d, --db <PATH>             Database file path (default: ./salesdesk_dev.db)");
                println!("  -h, --help                  Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Salesdesk Seed Data Generator");
    println!("=============================");
    println!("Database: {}", db_path);
    println!("Sellers per department: {}", sellers_per_dept);
    println!();

    // Connect to database (runs migrations)
    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // Check existing data
    let existing = db.departments().find_all().await?;
    if !existing.is_empty() {
        println!("⚠ Database already has {} departments", existing.len());
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Generating data...");

    let start = std::time::Instant::now();
    let mut seller_count = 0usize;

    for (dept_idx, dept_name) in DEPARTMENTS.iter().enumerate() {
        let mut department = Department::new(*dept_name);
        db.departments().insert(&mut department).await?;

        for n in 0..sellers_per_dept {
            let seed = dept_idx * sellers_per_dept + n;
            let mut seller = generate_seller(seed, department.clone());

            if let Err(e) = db.sellers().insert(&mut seller).await {
                eprintln!("Failed to insert {}: {}", seller.name, e);
                continue;
            }

            seller_count += 1;
        }

        println!("  {} ({} sellers)", dept_name, sellers_per_dept);
    }

    let elapsed = start.elapsed();
    println!();
    println!(
        "✓ Seeded {} departments, {} sellers in {:?}",
        DEPARTMENTS.len(),
        seller_count,
        elapsed
    );

    let roster = db.sellers().find_all().await?;
    println!("  find_all(): {} sellers, ordered by department", roster.len());

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Generates a single seller with deterministic data.
fn generate_seller(seed: usize, department: Department) -> Seller {
    let first = FIRST_NAMES[seed % FIRST_NAMES.len()];
    let last = SURNAMES[(seed * 7 + 3) % SURNAMES.len()];
    let name = format!("{first} {last}");

    let email = format!(
        "{}.{}@salesdesk.example",
        first.to_lowercase(),
        last.to_lowercase()
    );

    // Birth dates spread across 1970-2001
    let year = 1970 + (seed * 11 % 32) as i32;
    let month = 1 + (seed % 12) as u32;
    let day = 1 + (seed * 5 % 28) as u32;
    let birth_date = NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 1, 1).unwrap());

    // Salaries between 2000.0 and 5975.0 in 25.0 steps
    let base_salary = 2000.0 + (seed * 159 % 160) as f64 * 25.0;

    Seller::new(name, email, birth_date, base_salary, department)
}
