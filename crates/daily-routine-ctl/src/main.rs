use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod menu;

use commands::activity::FieldArgs;
use config::CtlConfig;
use daily_routine_db::ActivityStore;
use menu::Console;

const STARTUP_LOG_LEVEL: &str = "warn";

#[derive(Parser)]
#[command(name = "daily-routine")]
#[command(about = "Manage daily routine activities", long_about = None)]
struct Cli {
    #[arg(long, global = true, help = "Configuration file to use")]
    config: Option<PathBuf>,

    #[arg(long, global = true, help = "SQLite database file, overrides the configuration")]
    database: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (the default)
    Menu,

    Add {
        #[arg(long)]
        id: String,
        #[command(flatten)]
        fields: FieldArgs,
    },

    List {
        #[arg(long, help = "Print as JSON instead of a table")]
        json: bool,
    },

    /// One summary line with duration per activity
    Show,

    Update {
        id: String,
        #[command(flatten)]
        fields: FieldArgs,
    },

    Delete {
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(CtlConfig::default_config_path);

    // The configured level is not known yet, so loading runs under a
    // temporary subscriber.
    let startup = tracing_subscriber::fmt()
        .with_env_filter(log_filter(STARTUP_LOG_LEVEL))
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    let mut config = load_config(&config_path, startup)?;
    if let Some(database) = cli.database {
        config.database.path = database;
    }

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&config.general.log_level))
        .with_target(false)
        .with_writer(io::stderr)
        .init();
    info!("Using configuration at {:?}", config_path);

    let store = match ActivityStore::open((&config.database).into()).await {
        Ok(store) => store,
        Err(e) => {
            error!("Cannot open activity store at {}: {}", config.database.path, e);
            eprintln!("Database connection failed: {}", e);
            std::process::exit(1);
        }
    };
    info!("Using activity store at {}", config.database.path);

    let result = match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let stdin = io::stdin();
            Console::new(stdin.lock(), io::stdout(), io::stderr()).run(&store).await
        }
        Commands::Add { id, fields } => commands::activity::add(&store, &id, &fields).await,
        Commands::List { json } => commands::activity::list(&store, json).await,
        Commands::Show => commands::activity::show(&store).await,
        Commands::Update { id, fields } => commands::activity::update(&store, &id, &fields).await,
        Commands::Delete { id } => commands::activity::delete(&store, &id).await,
    };

    store.close().await;
    result
}

/// `RUST_LOG` wins over the configured level.
fn log_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

fn load_config<S>(path: &Path, subscriber: S) -> Result<CtlConfig>
where
    S: tracing::Subscriber + Send + Sync + 'static,
{
    tracing::subscriber::with_default(subscriber, || CtlConfig::load_from_path(path))
}
