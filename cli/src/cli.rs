use std::path::PathBuf;

use clap::Parser;

/// Demo driver for the asynchronous order-statistics pipeline.
#[derive(Parser, Debug)]
#[command(name = "shop-stats")]
pub struct Cli {
    /// SQLite connection string for the shop store.
    #[arg(long, default_value = "sqlite::memory:")]
    pub database_url: String,

    /// JSON seed file ({"users": [...], "orders": [...]}). Defaults to the
    /// embedded demo data.
    #[arg(long)]
    pub seed_file: Option<PathBuf>,

    /// Run a single query for this user instead of the demo scenarios.
    #[arg(long, requires = "password")]
    pub username: Option<String>,

    /// Password for --username.
    #[arg(long, requires = "username")]
    pub password: Option<String>,
}
