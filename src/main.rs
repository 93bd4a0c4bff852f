use clap::{Parser, Subcommand, ValueEnum};
use league::commands;
use league::config::{self, Config};
use league::data_provider::JsonDirectory;
use league::sorting::{SortDirection, SortKey};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "league")]
#[command(about = "League site renderer", long_about = "Renders league standings, power rankings, history and team pages from JSON data files.\n\nIf no command is specified, the program opens the interactive standings view.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Directory holding the JSON data files (overrides config)
    #[arg(short = 'D', long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Column {
    Rank,
    Team,
    Record,
    #[value(name = "pf")]
    PointsFor,
    #[value(name = "pa")]
    PointsAgainst,
    #[value(name = "champs")]
    Championships,
}

impl Column {
    fn to_sort_key(self) -> SortKey {
        match self {
            Column::Rank => SortKey::Rank,
            Column::Team => SortKey::Team,
            Column::Record => SortKey::Record,
            Column::PointsFor => SortKey::PointsFor,
            Column::PointsAgainst => SortKey::PointsAgainst,
            Column::Championships => SortKey::Championships,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Direction {
    None,
    Asc,
    Desc,
}

impl Direction {
    fn to_sort_direction(self) -> SortDirection {
        match self {
            Direction::None => SortDirection::None,
            Direction::Asc => SortDirection::Ascending,
            Direction::Desc => SortDirection::Descending,
        }
    }
}

fn sort_selection(sort: Option<Column>, direction: Direction) -> Option<(SortKey, SortDirection)> {
    sort.map(|column| (column.to_sort_key(), direction.to_sort_direction()))
}

#[derive(Subcommand)]
enum Commands {
    /// Print the power rankings fragment
    Power,
    /// Print the standings table fragment
    Standings {
        /// Column to sort by (load order when omitted)
        #[arg(short, long)]
        sort: Option<Column>,

        /// Sort direction for --sort
        #[arg(short, long, default_value = "asc")]
        direction: Direction,
    },
    /// Print the league history fragment
    History,
    /// Print the team bios fragment
    Teams,
    /// Render every page into the output directory
    Build {
        /// Output directory (overrides config)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Column the standings page is sorted by
        #[arg(short, long)]
        sort: Option<Column>,

        /// Sort direction for --sort
        #[arg(short, long, default_value = "asc")]
        direction: Direction,
    },
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command(cfg: &Config) {
    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("data_dir: {}", cfg.data_dir.display());
    println!("output_dir: {}", cfg.output_dir.display());
    println!("time_format: {}", cfg.time_format);
    println!();
    println!("[theme]");
    println!("selection_fg: {:?}", cfg.theme.selection_fg);
    println!("null_fg: {:?}", cfg.theme.null_fg);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(
    provider: &JsonDirectory,
    config: &Config,
    command: Commands,
) -> anyhow::Result<()> {
    match command {
        Commands::Config => unreachable!("Config command should be handled before execute_command"),
        Commands::Power => commands::power::run(provider).await,
        Commands::Standings { sort, direction } => {
            commands::standings::run(provider, sort_selection(sort, direction)).await
        }
        Commands::History => commands::history::run(provider).await,
        Commands::Teams => commands::teams::run(provider).await,
        Commands::Build { out, sort, direction } => {
            let out_dir = out.unwrap_or_else(|| config.output_dir.clone());
            commands::build::run(
                provider,
                &out_dir,
                sort_selection(sort, direction),
                &config.time_format,
            )
            .await
            .map(|_| ())
        }
    }
}

#[tokio::main]
async fn main() {
    let mut config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    if let Some(data_dir) = cli.data_dir.clone() {
        config.data_dir = data_dir;
    }
    let provider = JsonDirectory::new(config.data_dir.clone());

    // If no subcommand, run the interactive standings view
    let command = match cli.command {
        Some(command) => command,
        None => {
            if let Err(e) = league::tui::run(Arc::new(provider), config).await {
                eprintln!("Error running TUI: {}", e);
                std::process::exit(1);
            }
            return;
        }
    };

    // Handle Config command separately (doesn't read data)
    if let Commands::Config = command {
        handle_config_command(&config);
        return;
    }

    if let Err(e) = execute_command(&provider, &config, command).await {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
