use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use myrfx::cli::check::parse_amount;
use myrfx::core::CurrencyPair;
use myrfx::core::config::Theme;
use myrfx::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    /// Colour scheme: dark or light (overrides the config file)
    #[arg(short, long, global = true, value_parser = parse_theme)]
    theme: Option<Theme>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Check the latest rate of one currency against MYR
    Check {
        /// Base currency, e.g. USD or USDMYR
        #[arg(short, long, default_value = "USD", value_parser = parse_pair)]
        pair: CurrencyPair,

        /// Amount of the base currency to convert
        #[arg(short, long, default_value = "1.00", value_parser = parse_amount)]
        amount: f64,
    },
    /// Check rates repeatedly from a prompt
    Interactive,
    /// List supported currencies
    Pairs,
}

impl From<Commands> for myrfx::AppCommand {
    fn from(cmd: Commands) -> myrfx::AppCommand {
        match cmd {
            Commands::Check { pair, amount } => myrfx::AppCommand::Check { pair, amount },
            Commands::Interactive => myrfx::AppCommand::Interactive,
            Commands::Pairs => myrfx::AppCommand::Pairs,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

fn parse_pair(s: &str) -> Result<CurrencyPair, String> {
    s.parse().map_err(|e: anyhow::Error| e.to_string())
}

fn parse_theme(s: &str) -> Result<Theme, String> {
    s.parse().map_err(|e: anyhow::Error| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => myrfx::cli::setup::setup(),
        Some(cmd) => {
            myrfx::run_command(cmd.into(), cli.config_path.as_deref(), cli.theme).await
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
