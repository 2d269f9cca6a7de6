//! gilded CLI - End-of-day inventory aging from the command line.

mod commands;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "gilded")]
#[command(author, version, about = "Inventory aging CLI")]
#[command(propagate_version = true)]
struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    format: output::OutputFormat,

    /// Store path (defaults to current directory)
    #[arg(long, short = 'C', global = true)]
    path: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new store
    Init {
        /// Shop name
        #[arg(long, short = 'n')]
        name: Option<String>,

        /// Stock the store with the standard fixture items
        #[arg(long)]
        fixture: bool,
    },

    /// Add an item to the inventory
    Add {
        /// Item name (selects the aging rule by prefix)
        name: String,

        /// Days left to sell
        #[arg(long, short = 's', allow_negative_numbers = true)]
        sell_in: i32,

        /// Starting quality
        #[arg(long, short = 'q', allow_negative_numbers = true)]
        quality: i32,
    },

    /// Add items from a text file of `name, sellIn, quality` lines
    Import {
        /// File to read (blank lines and `#` comments are skipped)
        file: std::path::PathBuf,
    },

    /// List items in the inventory
    #[command(alias = "ls")]
    List,

    /// Show one item by SKU
    Show {
        /// Item SKU (e.g., aged-brie)
        sku: String,
    },

    /// Run the end-of-day aging and save the result
    Age {
        /// Days to age (defaults to the configured value)
        #[arg(long, short = 'd')]
        days: Option<u32>,
    },

    /// Show aging history
    History {
        /// Only events for this SKU
        sku: Option<String>,
    },

    /// Print the standard fixture day by day without touching any store
    Simulate {
        /// Days to simulate
        #[arg(long, short = 'd', default_value = "2")]
        days: u32,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let store_path = match cli.path {
        Some(path) => path,
        None => std::env::current_dir().context("Failed to get current directory")?,
    };

    match cli.command {
        Commands::Init { name, fixture } => commands::init(&store_path, name, fixture, cli.format),
        Commands::Add {
            name,
            sell_in,
            quality,
        } => commands::add(&store_path, name, sell_in, quality, cli.format),
        Commands::Import { file } => commands::import(&store_path, &file, cli.format),
        Commands::List => commands::list(&store_path, cli.format),
        Commands::Show { sku } => commands::show(&store_path, &sku, cli.format),
        Commands::Age { days } => commands::age(&store_path, days, cli.format),
        Commands::History { sku } => commands::history(&store_path, sku.as_deref(), cli.format),
        Commands::Simulate { days } => commands::simulate(days, cli.format),
    }
}
