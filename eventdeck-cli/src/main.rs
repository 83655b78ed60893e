mod app;
mod cache;
mod client;
mod commands;
mod config;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::App;
use crate::commands::EventFields;
use crate::config::GlobalConfig;

#[derive(Parser)]
#[command(name = "eventdeck")]
#[command(about = "Browse, search and manage events in a remote event store")]
struct Cli {
    /// Base URL of the event store (overrides the config file)
    #[arg(long, global = true)]
    store_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List events, with optional search and category filters
    List {
        /// Match against title, description, location and categories
        #[arg(short, long)]
        search: Option<String>,

        /// Only show events with this category (repeat for several)
        #[arg(short, long = "category")]
        category: Vec<String>,

        /// Print the visible events as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one event in full
    Show { id: String },
    /// Create a new event
    Add {
        #[command(flatten)]
        fields: EventFields,
    },
    /// Edit an event, resending the full record
    Edit {
        id: String,

        #[command(flatten)]
        fields: EventFields,
    },
    /// Delete an event
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// List every category in use
    Categories,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eventdeck_cli=warn".parse().expect("valid env filter")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = GlobalConfig::load()?;
    let store_url = cli.store_url.unwrap_or(config.store_url);
    let app = App::new(store_url);

    match cli.command {
        Commands::List {
            search,
            category,
            json,
        } => commands::list::run(&app, search, category, json).await,
        Commands::Show { id } => commands::show::run(&app, &id).await,
        Commands::Add { fields } => commands::add::run(&app, fields).await,
        Commands::Edit { id, fields } => commands::edit::run(&app, &id, fields).await,
        Commands::Delete { id, force } => commands::delete::run(&app, &id, force).await,
        Commands::Categories => commands::categories::run(&app).await,
    }
}
