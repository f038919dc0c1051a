use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use brightday_core::Config;

mod commands;

#[derive(Parser)]
#[command(name = "brightday", version, about = "BrightDay daily habit companion")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log today's status
    Log {
        #[arg(value_enum)]
        status: commands::log::LogStatus,
        /// Gratitude note to attach to today's entry
        #[arg(long)]
        gratitude: Option<String>,
    },
    /// Attach a gratitude note to today's entry
    Gratitude { text: String },
    /// Show today's entry
    Today {
        #[arg(long)]
        json: bool,
    },
    /// Show the entry for a specific date
    Show {
        /// Date as YYYY-MM-DD
        date: String,
        #[arg(long)]
        json: bool,
    },
    /// List recent entries
    Entries {
        /// How many entries to show (defaults to config)
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Show streak state
    Streak {
        #[arg(long)]
        json: bool,
    },
    /// Progress insights
    Insights {
        #[arg(long)]
        json: bool,
    },
    /// Month calendar of logged days
    Calendar {
        /// Month to show as YYYY-MM (defaults to the current month)
        #[arg(long)]
        month: Option<String>,
    },
    /// A random pick-me-up
    Cheer,
    /// A random quote
    Quote,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Erase all entries and derived state
    Reset {
        /// Confirm the irreversible wipe
        #[arg(long)]
        yes: bool,
    },
}

fn init_tracing(config: &Config) {
    // Log to stderr so stdout stays clean for JSON output.
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    let config = Config::load_or_default();
    init_tracing(&config);

    let result = match cli.command {
        Commands::Log { status, gratitude } => commands::log::run(status, gratitude),
        Commands::Gratitude { text } => commands::gratitude::run(&text),
        Commands::Today { json } => commands::today::run(json),
        Commands::Show { date, json } => commands::show::run(&date, json),
        Commands::Entries { limit, json } => commands::entries::run(&config, limit, json),
        Commands::Streak { json } => commands::streak::run(&config, json),
        Commands::Insights { json } => commands::insights::run(json),
        Commands::Calendar { month } => commands::calendar::run(month.as_deref()),
        Commands::Cheer => commands::cheer::run_cheer(),
        Commands::Quote => commands::cheer::run_quote(),
        Commands::Config { action } => commands::config::run(action),
        Commands::Reset { yes } => commands::reset::run(yes),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
