mod commands;
mod error;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{completions, numbers, Context};
use crate::error::{exit_code_for, report_error};
use msisdn_ph_config as config;

#[derive(Debug, Parser)]
#[command(name = "msisdn-ph", version, about = "Philippine mobile number toolkit")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    Validate(numbers::ValidateArgs),
    Inspect(numbers::InspectArgs),
    Format(numbers::FormatArgs),
    Operator(numbers::OperatorArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        json,
        command,
        ..
    } = cli;

    match command {
        Command::Completions(args) => completions::emit(args),
        command => {
            let app_config = config::load(config_path).with_context(|| "load config")?;
            debug!("config loaded, country prefix {}", app_config.country_prefix);
            let ctx = Context {
                config: &app_config,
                json,
            };
            match command {
                Command::Validate(args) => numbers::validate(&ctx, args),
                Command::Inspect(args) => numbers::inspect(&ctx, args),
                Command::Format(args) => numbers::format(&ctx, args),
                Command::Operator(args) => numbers::operator(&ctx, args),
                Command::Completions(_) => {
                    unreachable!("completions command handled before config load")
                }
            }
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}
