//! Tea House CLI - inspect and reset the storefront's local data.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog
//! th-cli catalog
//!
//! # Show or empty the saved cart
//! th-cli cart show
//! th-cli cart clear
//!
//! # Browse recorded orders
//! th-cli orders list
//! th-cli orders show 1718000000000
//!
//! # Point at another data directory
//! th-cli --data-dir /tmp/tea cart show
//! ```
//!
//! The storefront reads the cart once at startup and keeps it in memory, so
//! stop it before `cart clear`; the order commands are safe while it runs.
//!
//! # Environment Variables
//!
//! - `TEA_HOUSE_DATA_DIR` - Data directory shared with the storefront
//!   (default: `data`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tea_house_core::{CartStore, Catalog, OrderHistory, OrderId};
use tea_house_storefront::config::{DATA_DIR_VAR, DEFAULT_DATA_DIR};
use tea_house_storefront::storage::FileStorage;

mod commands;

use commands::CommandError;

#[derive(Parser)]
#[command(name = "th-cli")]
#[command(author, version, about = "Tea House CLI tools")]
struct Cli {
    /// Directory holding the cart and order history
    #[arg(long, global = true, env = DATA_DIR_VAR, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every product in the catalog
    Catalog,
    /// Inspect or reset the saved cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Browse recorded orders
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart lines and totals
    Show,
    /// Remove every entry from the cart (stop the storefront first)
    Clear,
}

#[derive(Subcommand)]
enum OrdersAction {
    /// One line per recorded order, oldest first
    List,
    /// Full details of one order
    Show {
        /// Order id as shown by `orders list`
        id: i64,
    },
}

fn main() {
    // .env must be loaded before clap reads TEA_HOUSE_DATA_DIR
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CommandError> {
    let catalog = Catalog::tea_house();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Catalog => commands::catalog::list(&catalog, &mut out)?,
        Commands::Cart { action } => {
            let mut store = CartStore::open(open_storage(cli.data_dir)?);
            match action {
                CartAction::Show => commands::cart::show(store.cart(), &catalog, &mut out)?,
                CartAction::Clear => commands::cart::clear(&mut store, &mut out)?,
            }
        }
        Commands::Orders { action } => {
            let history = OrderHistory::new(open_storage(cli.data_dir)?);
            match action {
                OrdersAction::List => commands::orders::list(&history, &mut out)?,
                OrdersAction::Show { id } => {
                    commands::orders::show(&history, &catalog, OrderId::new(id), &mut out)?;
                }
            }
        }
    }
    Ok(out.flush()?)
}

fn open_storage(data_dir: PathBuf) -> Result<FileStorage, CommandError> {
    let storage = FileStorage::open(data_dir)?;
    tracing::debug!(data_dir = %storage.root().display(), "Using local storage");
    Ok(storage)
}
