//! Aroma Bills CLI - catalog inspection for operators.
//!
//! # Usage
//!
//! ```bash
//! # Every product, cheapest first
//! aroma-cli catalog list --sort price-low
//!
//! # Floral scents for women between $150 and $200
//! aroma-cli catalog list --audience Women --category Floral --min-price 150 --max-price 200
//!
//! # A single product
//! aroma-cli catalog show 2
//! ```
//!
//! # Commands
//!
//! - `catalog list` - Filtered, sorted listing
//! - `catalog show` - Product detail
//! - `catalog featured` - Featured products
//! - `catalog categories` - Distinct categories

#![cfg_attr(not(test), forbid(unsafe_code))]

use aroma_storefront::catalog::CatalogParams;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "aroma-cli")]
#[command(author, version, about = "Aroma Bills CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List products, filtered and sorted the same way as `GET /catalog`
    List {
        /// Case-insensitive text to find in name, description or notes
        #[arg(short, long)]
        search: Option<String>,

        /// Audience (`Men`, `Women`, `Unisex`)
        #[arg(short, long)]
        audience: Option<String>,

        /// Category (`Oriental`, `Floral`, `Aquatic`, `Citrus`, `Woody`)
        #[arg(short, long)]
        category: Option<String>,

        /// Lowest price, whole dollars
        #[arg(long)]
        min_price: Option<String>,

        /// Highest price, whole dollars
        #[arg(long)]
        max_price: Option<String>,

        /// Sort key (`price-low`, `price-high`, `rating`, `newest`)
        #[arg(long)]
        sort: Option<String>,
    },
    /// Show a single product
    Show {
        /// Product id
        id: String,
    },
    /// List featured products
    Featured,
    /// List the categories present in the catalog
    Categories,
}

fn main() {
    // Optional .env so RUST_LOG can be set per checkout
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aroma_cli=info".into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let output = match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List {
                search,
                audience,
                category,
                min_price,
                max_price,
                sort,
            } => commands::catalog::list(CatalogParams {
                search,
                audience,
                category,
                min_price,
                max_price,
                sort,
            })?,
            CatalogAction::Show { id } => commands::catalog::show(&id)?,
            CatalogAction::Featured => commands::catalog::featured()?,
            CatalogAction::Categories => commands::catalog::categories()?,
        },
    };

    #[allow(clippy::print_stdout)]
    {
        println!("{output}");
    }
    Ok(())
}
