use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "devdeck")]
#[command(about = "Project dashboard - notes, links, commands and coding-agent launchers")]
#[command(version)]
struct Cli {
    /// Path to the dashboard file (defaults to ~/.devdeck/dashboard.json)
    #[arg(short, long, global = true)]
    store: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the dashboard GUI (the default when no command is given)
    Gui,

    /// List registered projects
    Projects,

    /// Register a project folder without opening the GUI
    Add {
        /// Folder to register
        path: PathBuf,

        /// Project name (defaults to the folder name)
        #[arg(long)]
        name: Option<String>,
    },

    /// Initialize a default ~/.devdeck/config.toml
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    match cli.command {
        None | Some(Commands::Gui) => {
            devdeck::gui::run_gui(cli.store)?;
        }
        Some(Commands::Projects) => {
            cli::projects_command(cli.store).await?;
        }
        Some(Commands::Add { path, name }) => {
            cli::add_command(cli.store, path, name).await?;
        }
        Some(Commands::Init { force }) => {
            cli::init_command(force).await?;
        }
    }

    Ok(())
}
