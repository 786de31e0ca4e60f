use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cosmo_core::catalog::ProductId;

mod app;
mod commands;
mod logging;
mod render;

use app::AppContext;

#[derive(Parser, Debug)]
#[command(name = "cosmocart")]
#[command(version, about = "CosmoCart - browse the catalog, fill a cart, get recommendations", long_about = None)]
struct Cli {
    /// Directory holding config.toml and session.toml
    #[arg(long, global = true, env = "COSMOCART_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    /// Personalization service base URL (overrides config.toml)
    #[arg(long, global = true)]
    service_url: Option<String>,

    /// Log filter directive, e.g. "debug" (overrides config.toml and RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List catalog products
    Catalog {
        /// Case-insensitive match on name or description
        #[arg(short, long, default_value = "")]
        search: String,
        /// Category to show, or "All"
        #[arg(short, long, default_value = "All")]
        category: String,
    },
    /// List product categories
    Categories,
    /// Add products to a fresh cart, one add-to-cart action per id
    Add {
        #[arg(required = true)]
        ids: Vec<ProductId>,
        /// Print each outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show or reset the persisted session token
    Session {
        /// Forget the token so the next run mints a new one
        #[arg(long)]
        reset: bool,
    },
    /// Inspect or create config.toml
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Interactive shopping shell
    Shop,
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write config.toml with default values if it does not exist
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let ctx = AppContext::load(cli.config_dir.clone(), cli.service_url.clone())?;
    let _log_guard = logging::init(&ctx, cli.log_level.as_deref())?;

    match cli.command {
        Commands::Catalog { search, category } => {
            commands::catalog::list(&search, &category)
        }
        Commands::Categories => commands::catalog::categories(),
        Commands::Add { ids, json } => commands::cart::add(&ctx, &ids, json).await,
        Commands::Session { reset } => commands::session::run(&ctx, reset).await,
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&ctx),
            ConfigAction::Init => commands::config::init(&ctx),
        },
        Commands::Shop => commands::shop::run(&ctx).await,
    }
}
