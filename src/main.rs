//! Detective Quest - Main entrypoint.
//!
//! Loads configuration, initializes logging and runs the requested command.
//! Narration goes to stdout; logs go to stderr.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use detective_quest_lib::config::{ConfigLoader, LogConfig, QuestConfig, ENV_PREFIX};
use detective_quest_lib::data_structures::RoomGraph;
use detective_quest_lib::error::{report_error, ErrorContext, QuestError, QuestResult};
use detective_quest_lib::game::{Session, TerminalConsole};
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Detective Quest.
#[derive(Parser, Debug)]
#[clap(name = "Detective Quest", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Play a game on the terminal
    Play,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file (.toml or .json)
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },

    /// Print the mansion layout
    Map,
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> QuestResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&log.level)
            .map_err(|e| QuestError::Custom(format!("Invalid log filter: {e}")))?,
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(ErrorLayer::default());

    let result = if log.json {
        registry.with(fmt_layer.json()).try_init()
    } else {
        registry.with(fmt_layer.pretty()).try_init()
    };

    result.map_err(|e| QuestError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn write_default_config(output: &Path) -> QuestResult<()> {
    let default_config = QuestConfig::default();

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let contents = match output.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::to_string_pretty(&default_config)?,
        _ => toml::to_string_pretty(&default_config)?,
    };
    std::fs::write(output, contents)?;

    info!(path = ?output, "Default configuration written");
    Ok(())
}

fn print_map() {
    let mansion = RoomGraph::build();
    for (depth, room) in mansion.iter_preorder() {
        println!("{}{}", "  ".repeat(depth), room.name());
    }
}

fn run(args: Args, config: QuestConfig) -> QuestResult<()> {
    match args.command.unwrap_or(Command::Play) {
        Command::Play => {
            info!("Starting Detective Quest {}", detective_quest_lib::VERSION);
            let mut session = Session::new(config.game)?;
            let mut console = TerminalConsole::stdio();
            let report = session.play(&mut console)?;
            info!(
                clues = report.clues_collected,
                rooms = report.rooms_visited,
                solved = report.is_solved(),
                "Game finished"
            );
            Ok(())
        }
        Command::Validate => {
            println!("Configuration is valid");
            Ok(())
        }
        Command::GenConfig { output } => write_default_config(&output),
        Command::Map => {
            print_map();
            Ok(())
        }
    }
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    let loaded = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX).load();

    // Logs must be up before any error can be reported, even a config error.
    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    if let Err(e) = init_logging(&log_config) {
        eprintln!("{e}");
    }
    detective_quest_lib::init();

    let result = loaded
        .map_err(QuestError::from)
        .and_then(|config| run(args, config));

    if let Err(error) = result {
        report_error(ErrorContext::new(error, "main").with_span_trace());
        process::exit(1);
    }
}
