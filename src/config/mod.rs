use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "shipquote")]
#[command(about = "Shipping zone resolution, courier rate quotes, and order records")]
pub struct CliConfig {
    /// Directory holding couriers.toml, multipliers.toml and zones.csv
    #[arg(long, default_value = "./data")]
    pub data_dir: String,

    /// JSON file the order store persists to
    #[arg(long, default_value = "./orders.json")]
    pub orders_file: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Compute per-courier quotes for a package weight and postal-code pair
    Quote {
        /// Package weight in kilograms
        #[arg(long)]
        weight: Option<f64>,

        #[arg(long)]
        pickup: Option<String>,

        #[arg(long)]
        delivery: Option<String>,
    },

    /// List the courier catalog, or a single courier by id
    Couriers {
        #[arg(long)]
        id: Option<u32>,
    },

    /// Record a new order from a JSON draft file
    CreateOrder {
        /// Path to a JSON file with the order draft
        #[arg(long)]
        draft: String,
    },

    /// List recorded orders, or fetch a single order by id
    Orders {
        #[arg(long)]
        id: Option<u64>,

        #[arg(long)]
        user_id: Option<u64>,
    },

    /// Update an order's status
    SetStatus {
        #[arg(long)]
        id: u64,

        /// One of: pending, in_transit, delivered, cancelled
        #[arg(long)]
        status: String,
    },
}
