//! Marketplace CLI - Cart inspection and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Print the persisted cart
//! mkt-cli cart show
//!
//! # Add a product to the cart
//! mkt-cli cart add -i prod-42 -t "Shirt" -u https://cdn.example.com/shirt.png -p 19.99
//!
//! # Change quantities
//! mkt-cli cart increment prod-42
//! mkt-cli cart decrement prod-42
//! ```
//!
//! # Commands
//!
//! - `cart show` - Print the cart contents and subtotal
//! - `cart add` - Add a product to the cart
//! - `cart increment` - Increase a product's quantity by one
//! - `cart decrement` - Decrease a product's quantity by one
//!
//! The data directory is taken from `MARKETPLACE_DATA_DIR` (default `./data`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "mkt-cli")]
#[command(author, version, about = "Marketplace CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect and mutate the persisted cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Print the cart contents and subtotal
    Show,
    /// Add a product to the cart
    Add {
        /// Product ID
        #[arg(short, long)]
        id: String,

        /// Display title
        #[arg(short, long)]
        title: String,

        /// Display image URL
        #[arg(short = 'u', long)]
        image_url: String,

        /// Unit price (e.g. 19.99)
        #[arg(short, long)]
        price: String,
    },
    /// Increase a product's quantity by one
    Increment {
        /// Product ID
        id: String,
    },
    /// Decrease a product's quantity by one
    Decrement {
        /// Product ID
        id: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show().await?,
            CartAction::Add {
                id,
                title,
                image_url,
                price,
            } => commands::cart::add(&id, title, image_url, &price).await?,
            CartAction::Increment { id } => commands::cart::increment(&id).await?,
            CartAction::Decrement { id } => commands::cart::decrement(&id).await?,
        },
    }
    Ok(())
}
