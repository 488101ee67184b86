//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use nuber_core::config::{self, Config};

use crate::logging;

mod commands;

#[derive(Parser)]
#[command(name = "nuber")]
#[command(version = "0.1")]
#[command(about = "Nuber login flow from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: $NUBER_HOME/config.toml)
    #[arg(long, global = true, value_name = "PATH", env = "NUBER_CONFIG")]
    config: Option<PathBuf>,

    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Check a phone number and print it in international form
    Validate {
        #[command(flatten)]
        number: NumberArgs,
    },

    /// Request an SMS sign-in code for a phone number
    Phone {
        #[command(flatten)]
        number: NumberArgs,
    },

    /// Log in with a Facebook login callback payload
    Facebook {
        /// JSON file with the provider callback, or `-` for stdin
        #[arg(long, value_name = "FILE")]
        profile: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Args, Debug, Clone)]
struct NumberArgs {
    /// Dial code such as +82 (default: from config)
    #[arg(long, value_name = "CODE")]
    country: Option<String>,

    /// National number, without the dial code
    #[arg(value_name = "NUMBER")]
    number: String,
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Print the config file path
    Path,
    /// Write a config file with default values
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => config::paths::config_path()?,
    };

    if let Commands::Config { command } = &cli.command {
        return match command {
            ConfigCommands::Path => {
                commands::config::path(&config_path);
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(&config_path),
        };
    }

    let config = Config::load_from(&config_path).context("load config")?;

    match cli.command {
        Commands::Validate { number } => {
            commands::validate::run(&config, number.country.as_deref(), &number.number)
        }
        Commands::Phone { number } => commands::phone::run(config, number.country, number.number).await,
        Commands::Facebook { profile } => commands::facebook::run(config, &profile).await,
        Commands::Config { .. } => Ok(()),
    }
}
