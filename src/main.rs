use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "fazendinha")]
#[command(about = "Fazendinha do Saber - grow your farm by completing learning missions")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.fazendinha/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the storage file (defaults to ~/.fazendinha/storage.json)
    #[arg(short, long, global = true)]
    storage: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in to the farm
    Login {
        username: String,

        /// Password (read from stdin when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Log out and forget the stored session
    Logout,

    /// Show the farm, missions and class ranking
    Status,

    /// Complete one or more missions
    Complete {
        /// Mission ids, as shown by `status`
        #[arg(required = true)]
        missions: Vec<String>,
    },

    /// Claim today's coin reward
    Reward,

    /// List the items in the store
    Shop,

    /// Buy an item from the store
    Buy {
        /// Item id, as shown by `shop`
        item: u32,
    },

    /// List the available courses
    Courses,

    /// Show found and missing collectibles
    Collection,

    /// Scan a discovery point QR code
    Scan {
        /// Code printed on the discovery point (e.g. BIBLIO_01)
        code: String,
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
        .with_writer(std::io::stderr)
        .init();

    let mut app = cli::App::open(cli.config.as_deref(), cli.storage.as_deref())?;

    match cli.command {
        Some(Commands::Login { username, password }) => {
            cli::login::login_command(&mut app, &username, password).await?;
        }
        Some(Commands::Logout) => {
            cli::login::logout_command(&mut app)?;
        }
        Some(Commands::Complete { missions }) => {
            cli::complete::complete_command(&mut app, &missions).await?;
        }
        Some(Commands::Reward) => {
            cli::reward::reward_command(&mut app)?;
        }
        Some(Commands::Shop) => {
            cli::shop::shop_command(&app);
        }
        Some(Commands::Buy { item }) => {
            cli::shop::buy_command(&mut app, item)?;
        }
        Some(Commands::Courses) => {
            cli::shop::courses_command();
        }
        Some(Commands::Collection) => {
            cli::collection::collection_command(&app)?;
        }
        Some(Commands::Scan { code }) => {
            cli::collection::scan_command(&mut app, &code)?;
        }
        Some(Commands::Status) | None => {
            cli::status::status_command(&app).await?;
        }
    }

    Ok(())
}
