//! # Seed Data Generator
//!
//! Populates the catalog store with a café menu for development.
//!
//! ## Usage
//! ```bash
//! # Seed ./storefront_dev.db
//! cargo run -p storefront-db --bin seed
//!
//! # Specify database path
//! cargo run -p storefront-db --bin seed -- --db ./data/storefront.db
//! ```
//!
//! ## Generated Catalog
//! - Four categories: Hot Coffee, Iced Drinks, Pastries, All-Day Meals
//! - Drinks come in Regular/Large with milk and syrup add-ons
//! - A couple of items on discount, one marked unavailable
//! - Default site settings

use std::env;

use storefront_core::{AddOn, Category, MenuItem, Money, SiteSettings, SiteSettingsUpdate, Variation};
use storefront_db::{Database, DbConfig};
use uuid::Uuid;

/// (id, name, icon)
const CATEGORIES: &[(&str, &str, &str)] = &[
    ("hot-coffee", "Hot Coffee", "☕"),
    ("iced-drinks", "Iced Drinks", "🧊"),
    ("pastries", "Pastries", "🥐"),
    ("meals", "All-Day Meals", "🍳"),
];

/// (category, name, description, price in pesos, discount in pesos, drink)
const ITEMS: &[(&str, &str, &str, i64, Option<i64>, bool)] = &[
    ("hot-coffee", "Americano", "Double shot over hot water", 110, None, true),
    ("hot-coffee", "Café Latte", "Espresso with steamed milk", 140, Some(120), true),
    ("hot-coffee", "Spanish Latte", "Latte sweetened with condensed milk", 160, None, true),
    ("hot-coffee", "Cappuccino", "Equal parts espresso, milk and foam", 140, None, true),
    ("iced-drinks", "Iced Americano", "Chilled double shot", 120, None, true),
    ("iced-drinks", "Iced Caramel Macchiato", "Vanilla milk, espresso, caramel drizzle", 170, Some(150), true),
    ("iced-drinks", "Iced Matcha Latte", "Ceremonial matcha with milk", 180, None, true),
    ("pastries", "Butter Croissant", "Baked every morning", 95, None, false),
    ("pastries", "Ensaymada", "Buttery brioche with cheese and sugar", 85, None, false),
    ("pastries", "Ube Cheese Pandesal", "Three pieces", 75, None, false),
    ("meals", "Tapsilog", "Beef tapa, garlic rice, fried egg", 220, None, false),
    ("meals", "Longsilog", "Sweet pork longganisa, garlic rice, fried egg", 200, None, false),
];

/// Items seeded as sold out.
const UNAVAILABLE: &[&str] = &["Ube Cheese Pandesal"];

/// Items flagged as popular.
const POPULAR: &[&str] = &["Spanish Latte", "Iced Caramel Macchiato", "Tapsilog"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./storefront_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Storefront Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./storefront_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Storefront Seed Data Generator");
    println!("================================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.menu().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} menu items", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    for (position, (id, name, icon)) in CATEGORIES.iter().enumerate() {
        let category = Category {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            sort_order: position as i32 + 1,
            active: true,
        };
        db.categories().insert(&category).await?;
    }
    println!("✓ Inserted {} categories", CATEGORIES.len());

    let mut inserted = 0;
    for (category, name, description, pesos, discount, drink) in ITEMS {
        let item = build_item(category, name, description, *pesos, *discount, *drink);

        if let Err(e) = db.menu().insert(&item).await {
            eprintln!("Failed to insert {}: {}", item.name, e);
            continue;
        }
        inserted += 1;
    }
    println!("✓ Inserted {} menu items", inserted);

    let defaults = SiteSettings::default();
    let update = SiteSettingsUpdate {
        site_name: Some(defaults.site_name),
        site_logo: Some(defaults.site_logo),
        site_description: Some("Coffee, pastries and all-day silog".to_string()),
        currency: Some(defaults.currency),
        currency_code: Some(defaults.currency_code),
        instagram_url: Some(defaults.instagram_url),
    };
    db.settings().upsert(&update.into_rows()).await?;
    println!("✓ Stored default site settings");

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Builds one catalog record. Drinks get sizes and add-ons.
fn build_item(
    category: &str,
    name: &str,
    description: &str,
    pesos: i64,
    discount: Option<i64>,
    drink: bool,
) -> MenuItem {
    let mut item = MenuItem::new(
        Uuid::new_v4().to_string(),
        name,
        category,
        Money::from_major_minor(pesos, 0),
    );
    item.description = description.to_string();
    item.available = !UNAVAILABLE.contains(&name);
    item.popular = POPULAR.contains(&name);
    item.image = Some(format!(
        "https://images.storefront.local/menu/{}.jpg",
        name.to_lowercase().replace(' ', "-")
    ));

    if let Some(discount) = discount {
        item.discount_price = Some(Money::from_major_minor(discount, 0));
        item.on_discount = true;
    }

    if drink {
        item.variations = vec![
            variation("regular", "Regular (12oz)", 0),
            variation("large", "Large (16oz)", 20),
        ];
        item.add_ons = vec![
            add_on("extra-shot", "Extra Shot", "Coffee", 35),
            add_on("oat-milk", "Oat Milk", "Milk", 40),
            add_on("soy-milk", "Soy Milk", "Milk", 30),
            add_on("vanilla", "Vanilla Syrup", "Syrups", 25),
            add_on("caramel", "Caramel Syrup", "Syrups", 25),
        ];
    }

    item
}

fn variation(id: &str, name: &str, pesos: i64) -> Variation {
    Variation {
        id: id.to_string(),
        name: name.to_string(),
        price: Money::from_major_minor(pesos, 0),
    }
}

fn add_on(id: &str, name: &str, category: &str, pesos: i64) -> AddOn {
    AddOn {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        price: Money::from_major_minor(pesos, 0),
    }
}
