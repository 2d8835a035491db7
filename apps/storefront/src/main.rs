//! # Storefront Entry Point
//!
//! Opens the catalog and prints the menu as the storefront would show it.
//!
//! ```text
//! ☕ Hot Coffee
//!   Americano ............................. ₱110.00
//!   Café Latte .................. ₱140.00 → ₱120.00  14% OFF
//!   ...
//! ```
//!
//! ## Usage
//! ```bash
//! cargo run -p storefront-db --bin seed -- --db ./storefront_dev.db
//! STOREFRONT_DB_PATH=./storefront_dev.db cargo run -p storefront
//! ```

use std::process::ExitCode;

use storefront_lib::commands::menu::get_menu;
use storefront_lib::commands::settings::get_site_settings;
use storefront_lib::state::ConfigState;
use storefront_lib::{init_tracing, Storefront};
use tracing::error;

const LINE_WIDTH: usize = 48;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let config = ConfigState::from_env();
    let storefront = match Storefront::open(config).await {
        Ok(storefront) => storefront,
        Err(e) => {
            error!(code = ?e.code, "{}", e.message);
            return ExitCode::FAILURE;
        }
    };

    let site = get_site_settings(&storefront.settings);
    println!("{}", site.site_name);
    if !site.site_description.is_empty() {
        println!("{}", site.site_description);
    }
    println!();

    let menu = get_menu(&storefront.catalog);
    if menu.sections.is_empty() {
        println!("The menu is empty. Run the seed binary to populate it.");
    }

    for section in &menu.sections {
        println!("{} {}", section.category.icon, section.category.name);

        for item in &section.items {
            let price = if item.is_discounted() {
                format!(
                    "{} → {}",
                    storefront.config.format_currency(item.base_price),
                    storefront.config.format_currency(item.effective_price())
                )
            } else {
                storefront.config.format_currency(item.effective_price())
            };

            let mut line = format!("  {} ", item.name);
            let dots = LINE_WIDTH.saturating_sub(line.chars().count() + price.chars().count() + 1);
            line.push_str(&".".repeat(dots));
            line.push(' ');
            line.push_str(&price);

            if let Some(percent) = item.discount_percent() {
                line.push_str(&format!("  {}% OFF", percent));
            }
            if !item.available {
                line.push_str("  (unavailable)");
            }
            println!("{}", line);
        }
        println!();
    }

    storefront.db.inner().close().await;
    ExitCode::SUCCESS
}
