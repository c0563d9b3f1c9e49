mod commands;
mod config;

use clap::{Parser, Subcommand};
use lotto_core::LottoError;
use lotto_engine::DrawError;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "lotto")]
#[command(about = "Numbered-ticket lottery with twice-monthly draws")]
#[command(version)]
struct Cli {
    /// Directory holding config.json
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Explicit config file (overrides --data-dir lookup)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Seed for winning numbers
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, global = true)]
    date: Option<String>,

    /// Settlement policy for repeated draws (pending-only, overwrite)
    #[arg(long, global = true)]
    policy: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the next draw date
    NextDate,
    /// Generate winning numbers
    Generate {
        /// How many numbers to print
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },
    /// Check a ticket against a winning number
    Check {
        /// Ticket number (6 digits)
        ticket: String,
        /// Winning number (6 digits)
        winning: String,
    },
    /// Run players, tickets and draws in memory and print the result
    Simulate {
        /// Number of players
        #[arg(short, long, default_value = "5")]
        players: usize,
        /// Tickets per player
        #[arg(short, long, default_value = "3")]
        tickets: usize,
        /// Draws to trigger
        #[arg(long, default_value = "1")]
        draws: usize,
    },
    /// Interactive session
    Session,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "lotto={},lotto_core={},lotto_engine={}",
            log_level, log_level, log_level
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run(cli).await {
        report_error(&e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let path = config::config_path(cli.data_dir.as_deref(), cli.config.as_deref());
    let overrides = config::Overrides {
        seed: cli.seed,
        date: cli.date,
        policy: cli.policy,
    };
    let config = config::resolve(&path, &overrides)?;

    match cli.command {
        Commands::NextDate => commands::show_next_date(config),
        Commands::Generate { count } => commands::generate_numbers(config, count),
        Commands::Check { ticket, winning } => commands::check_number(&ticket, &winning),
        Commands::Simulate {
            players,
            tickets,
            draws,
        } => commands::run_simulation(config, players, tickets, draws).await,
        Commands::Session => commands::run_session(config).await,
    }
}

fn report_error(e: &anyhow::Error) {
    let core = e
        .downcast_ref::<LottoError>()
        .or_else(|| match e.downcast_ref::<DrawError>() {
            Some(DrawError::Core(inner)) => Some(inner),
            _ => None,
        });

    match core {
        Some(LottoError::InvalidTicketNumber(number)) => {
            eprintln!("Error: '{}' is not a valid ticket number", number);
            eprintln!("Ticket numbers are exactly 6 digits, e.g. 012345");
        }
        Some(LottoError::InvalidDate(msg)) => {
            eprintln!("Error: Invalid date: {}", msg);
        }
        Some(LottoError::Config(msg)) => {
            eprintln!("Error: Invalid configuration: {}", msg);
            eprintln!("Check --config or <data-dir>/config.json");
        }
        _ => {
            eprintln!("Error: {:#}", e);
        }
    }
}
