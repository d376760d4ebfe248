use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use penny::cli::{handle_expense_command, handle_history_command, ExpenseCommands};
use penny::config::{paths::PennyPaths, settings::Settings};
use penny::storage::Storage;

const LOG_ENV: &str = "PENNY_LOG";

#[derive(Parser)]
#[command(
    name = "penny",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Penny keeps track of everyday expenses in a plain CSV file. \
                  Expenses are addressed by their number in `penny view`.",
    after_help = "Examples:\n  \
                  penny add --amount 50 --category food --date 15-02-2026 --note \"lunch\"\n  \
                  penny view\n  \
                  penny filter --category food\n  \
                  penny filter --from 01-02-2026 --to 15-02-2026\n  \
                  penny summary --month 2 --year 2026\n  \
                  penny edit 1 --amount 75\n  \
                  penny delete 1"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the config file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let rendered = e.to_string();
            eprint!(
                "✗ Error: {}",
                rendered.strip_prefix("error: ").unwrap_or(&rendered)
            );
            return ExitCode::FAILURE;
        }
    };

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("✗ Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let paths = PennyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings);

    let storage = Storage::new(paths.clone()).with_audit(settings.audit_enabled);

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::History { limit }) => {
            handle_history_command(&storage, limit)?;
        }
        Some(Commands::Config { init }) => {
            if init {
                settings.save(&paths)?;
                println!("✓ Settings written to {}", paths.settings_file().display());
                println!();
            }
            println!("Penny Configuration");
            println!("===================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Expenses file:  {}", paths.expenses_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Log level:       {}", settings.log_level);
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
        None => {
            Cli::command().print_help()?;
            return Ok(ExitCode::FAILURE);
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Diagnostics go to stderr so listings on stdout stay clean
fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(settings.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
