//! Calculator CLI - interactive menu calculator and one-shot evaluation

mod logging;
mod settings;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;
use tracing::info;

use calculator_core::application::shell::view;
use calculator_core::application::{Operations, OverflowPolicy, Shell};
use calculator_core::domain::{OperationKind, OperationRequest, Outcome};
use calculator_infra_console as console;

use crate::settings::Settings;

#[derive(Parser)]
#[command(name = "calculator")]
#[command(about = "Interactive command-line calculator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Settings file (TOML); defaults to ./calculator.toml when present
    #[arg(long, global = true, env = "CALCULATOR_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the menu-driven calculator (default)
    Interactive {
        /// Do not clear the screen between views
        #[arg(long)]
        no_clear: bool,

        /// End the session on overflow instead of returning to the menu
        #[arg(long)]
        abort_on_overflow: bool,
    },

    /// Evaluate a single operation and print the result
    Eval {
        /// add, subtract, multiply, divide, power, square-root
        operation: OperationKind,

        /// Operands in order (add/subtract take one or more)
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        operands: Vec<f64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct EvalReport<'a> {
    operation: OperationKind,
    operands: &'a [f64],
    outcome: Outcome,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load configuration
    let mut settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;

    // 2. Initialize logging
    logging::init_logging(&settings.log).context("Failed to initialize logging")?;

    info!("Calculator v{} starting...", calculator_core::VERSION);

    match cli.command {
        None => run_interactive(&settings),

        Some(Commands::Interactive {
            no_clear,
            abort_on_overflow,
        }) => {
            if no_clear {
                settings.shell.clear_screen = false;
            }
            if abort_on_overflow {
                settings.shell.overflow_policy = OverflowPolicy::Abort;
            }
            run_interactive(&settings)
        }

        Some(Commands::Eval {
            operation,
            operands,
            json,
        }) => run_eval(operation, operands, json),
    }
}

fn run_interactive(settings: &Settings) -> Result<()> {
    let mut shell = Shell::new(console::stdin(), console::stdout(), &settings.shell);
    shell.run().context("Calculator session failed")?;
    Ok(())
}

fn run_eval(operation: OperationKind, operands: Vec<f64>, json: bool) -> Result<()> {
    let request = OperationRequest::new(operation, operands);
    let outcome = Operations::new()
        .evaluate(&request)
        .with_context(|| format!("Failed to evaluate {operation}"))?;

    if json {
        println!("{}", json_report(&request, outcome)?);
        return Ok(());
    }

    match outcome.value() {
        Some(value) => println!("{}", value.to_string().green().bold()),
        None => println!("{}", view::uncomputable_message(operation).yellow()),
    }

    Ok(())
}

fn json_report(request: &OperationRequest, outcome: Outcome) -> Result<String> {
    let report = EvalReport {
        operation: request.kind,
        operands: &request.operands,
        outcome,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
