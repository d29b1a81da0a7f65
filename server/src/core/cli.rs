use clap::{Args, Parser, Subcommand};

use std::path::PathBuf;

use crate::data::PropertyFilters;

use super::config::StoreBackend;
use super::constants::{
    ENV_CONFIG, ENV_DEFAULT_LIMIT, ENV_POSTGRES_URL, ENV_SQLITE_PATH, ENV_STORE_BACKEND,
};

#[derive(Parser)]
#[command(name = "lightbnb")]
#[command(version, about = "LightBnB listing store", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, short = 'c', global = true, env = ENV_CONFIG)]
    pub config: Option<PathBuf>,

    /// Store backend (sqlite or postgres)
    #[arg(long, global = true, env = ENV_STORE_BACKEND, value_parser = parse_store_backend)]
    pub backend: Option<StoreBackend>,

    /// PostgreSQL connection URL (when using postgres backend)
    #[arg(long, global = true, env = ENV_POSTGRES_URL)]
    pub postgres_url: Option<String>,

    /// SQLite database file (when using sqlite backend)
    #[arg(long, global = true, env = ENV_SQLITE_PATH)]
    pub sqlite_path: Option<PathBuf>,

    /// Rows returned when a command gives no --limit
    #[arg(long, global = true, env = ENV_DEFAULT_LIMIT, allow_negative_numbers = true)]
    pub default_limit: Option<i64>,
}

/// Parse store backend from CLI/env string
fn parse_store_backend(s: &str) -> Result<StoreBackend, String> {
    match s.to_lowercase().as_str() {
        "sqlite" => Ok(StoreBackend::Sqlite),
        "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
        _ => Err(format!(
            "Invalid store backend '{}'. Valid options: sqlite, postgres",
            s
        )),
    }
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Create the tables if they do not exist yet
    InitDb,
    /// Search properties, cheapest first
    Properties(PropertySearchArgs),
    /// List a guest's completed reservations
    Reservations {
        /// Guest user ID
        #[arg(long)]
        guest_id: i32,
        /// Maximum rows to return
        #[arg(long, allow_negative_numbers = true)]
        limit: Option<i64>,
    },
    /// User lookups and registration
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
}

#[derive(Args, Clone, Debug, Default)]
pub struct PropertySearchArgs {
    /// Substring of the city name
    #[arg(long)]
    pub city: Option<String>,
    /// Only properties of this owner
    #[arg(long)]
    pub owner_id: Option<i32>,
    /// Minimum cost per night
    #[arg(long)]
    pub min_price: Option<i32>,
    /// Maximum cost per night
    #[arg(long)]
    pub max_price: Option<i32>,
    /// Only count reviews rated at least this
    #[arg(long)]
    pub min_rating: Option<f64>,
    /// Maximum rows to return
    #[arg(long, allow_negative_numbers = true)]
    pub limit: Option<i64>,
}

impl PropertySearchArgs {
    pub fn filters(&self) -> PropertyFilters {
        PropertyFilters {
            city: self.city.clone(),
            owner_id: self.owner_id,
            minimum_price_per_night: self.min_price,
            maximum_price_per_night: self.max_price,
            minimum_rating: self.min_rating,
        }
    }
}

#[derive(Subcommand, Clone, Debug)]
pub enum UserCommands {
    /// Look up a user by email or ID
    Get {
        #[arg(long, required_unless_present = "id", conflicts_with = "id")]
        email: Option<String>,
        #[arg(long)]
        id: Option<i32>,
    },
    /// Register a new user
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// Stored as given; hash it before calling
        #[arg(long)]
        password: String,
    },
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub config: Option<PathBuf>,
    pub backend: Option<StoreBackend>,
    pub postgres_url: Option<String>,
    pub sqlite_path: Option<PathBuf>,
    pub default_limit: Option<i64>,
}

impl From<&Cli> for CliConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            config: cli.config.clone(),
            backend: cli.backend,
            postgres_url: cli.postgres_url.clone(),
            sqlite_path: cli.sqlite_path.clone(),
            default_limit: cli.default_limit,
        }
    }
}

/// Parse CLI arguments and return config with command
pub fn parse() -> (CliConfig, Commands) {
    let cli = Cli::parse();
    (CliConfig::from(&cli), cli.command)
}
