//! Naked Pineapple cart CLI - Drive a file-backed cart from the shell.
//!
//! # Usage
//!
//! ```bash
//! # Add two lines and bump the first
//! np-cart add --id sku-1 --price 24.00 --attr title="Pineapple Tee"
//! np-cart add --id sku-2 --quantity 2
//! np-cart plus sku-1
//! np-cart update --id sku-2 --attr gift_wrap=true
//!
//! # Inspect the cart
//! np-cart show
//! np-cart contains sku-2
//!
//! # Dispatch a raw action
//! np-cart apply '{"type":"MINUS_ONE","payload":{"id":"sku-1"}}'
//!
//! # Use a different slot and directory
//! np-cart --key wishlist --dir /tmp/carts show
//! ```
//!
//! # Environment Variables
//!
//! - `CART_STORAGE_KEY` - Storage slot (default: cart), overridden by `--key`
//! - `CART_STORAGE_DIR` - Storage directory (default: .np-cart), overridden by `--dir`
//! - `RUST_LOG` - Log filter (default: `naked_pineapple_cart=info,np_cart=info`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

use commands::cart::{ItemArgs, Session};

#[derive(Parser)]
#[command(name = "np-cart")]
#[command(author, version, about = "Naked Pineapple cart tools")]
struct Cli {
    /// Storage slot to use (overrides `CART_STORAGE_KEY`)
    #[arg(long, global = true)]
    key: Option<String>,

    /// Storage directory to use (overrides `CART_STORAGE_DIR`)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the cart contents and totals
    Show,
    /// Add a line, or add to the quantity of an existing line
    Add(ItemArgs),
    /// Change only the given fields of an existing line
    Update(ItemArgs),
    /// Remove a line
    Remove {
        /// Line item id
        id: String,
    },
    /// Raise a line's quantity by one
    Plus {
        /// Line item id
        id: String,
    },
    /// Lower a line's quantity by one (never below 1)
    Minus {
        /// Line item id
        id: String,
    },
    /// Remove every line
    Clear,
    /// Print whether a line is in the cart
    Contains {
        /// Line item id
        id: String,
    },
    /// Dispatch a raw action given as JSON
    Apply {
        /// Action, e.g. '{"type":"PLUS_ONE","payload":{"id":"sku-1"}}'
        action: String,
    },
}

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "naked_pineapple_cart=info,np_cart=info".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::open(cli.key, cli.dir)?;

    match cli.command {
        Commands::Show => session.show()?,
        Commands::Add(args) => session.add(args)?,
        Commands::Update(args) => session.update(args)?,
        Commands::Remove { id } => session.cart_mut().remove_item(&id),
        Commands::Plus { id } => session.cart_mut().plus_one(&id),
        Commands::Minus { id } => session.cart_mut().minus_one(&id),
        Commands::Clear => session.cart_mut().clear_cart(),
        Commands::Contains { id } => session.contains(&id),
        Commands::Apply { action } => session.apply(&action)?,
    }
    Ok(())
}
