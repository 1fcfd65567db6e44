//! ShopEase CLI - Demo-state management tools.
//!
//! # Usage
//!
//! ```bash
//! # Seed the data directory with sample cart/wishlist state
//! shopease-cli seed
//!
//! # Inspect or empty the persisted cart
//! shopease-cli cart show
//! shopease-cli cart clear
//!
//! # Same for the wishlist
//! shopease-cli wishlist show
//! shopease-cli wishlist clear
//! ```
//!
//! The CLI works on the same key-value directory as the storefront
//! (`SHOPEASE_DATA_DIR`, default `.shopease-data`). It is a separate
//! process: the storefront finds out about CLI writes the same way a
//! second browser tab would; by re-reading storage, last write wins.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "shopease-cli")]
#[command(author, version, about = "ShopEase CLI tools")]
struct Cli {
    /// Key-value storage directory (defaults to SHOPEASE_DATA_DIR or
    /// .shopease-data)
    #[arg(long, global = true)]
    data_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the data directory with sample cart/wishlist state
    Seed,
    /// Inspect or clear the persisted cart
    Cart {
        #[command(subcommand)]
        action: ListAction,
    },
    /// Inspect or clear the persisted wishlist
    Wishlist {
        #[command(subcommand)]
        action: ListAction,
    },
}

#[derive(Subcommand)]
enum ListAction {
    /// Print the current entries and totals
    Show,
    /// Empty the list
    Clear,
}

fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn data_dir(flag: Option<String>) -> String {
    flag.or_else(|| std::env::var("SHOPEASE_DATA_DIR").ok())
        .unwrap_or_else(|| ".shopease-data".to_owned())
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let dir = data_dir(cli.data_dir);

    match cli.command {
        Commands::Seed => commands::seed::run(&dir)?,
        Commands::Cart { action } => match action {
            ListAction::Show => commands::cart::show(&dir)?,
            ListAction::Clear => commands::cart::clear(&dir)?,
        },
        Commands::Wishlist { action } => match action {
            ListAction::Show => commands::wishlist::show(&dir)?,
            ListAction::Clear => commands::wishlist::clear(&dir)?,
        },
    }
    Ok(())
}
