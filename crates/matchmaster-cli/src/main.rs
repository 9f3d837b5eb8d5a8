use clap::{Parser, Subcommand};
use colored::Colorize;
use matchmaster_core::{
    load_participants, match_participants, normalize, Error, ResultSet, Session, SessionLimits,
    Tier,
};
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, info};

/// MatchMaster — find what a group has in common
///
/// Match item lists across participants, inspect canonical keys,
/// and scaffold new sessions.
#[derive(Parser)]
#[command(name = "matchmaster", version, about, long_about = None)]
struct Cli {
    /// Suppress normal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Match a participants file and print ranked shared items
    Match {
        /// Path to participants .json file
        file: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the canonical key of each text
    Normalize {
        /// Texts to normalize
        #[arg(required = true)]
        texts: Vec<String>,
    },

    /// Print an empty session template
    Init {
        /// Number of participants (clamped to 2-5)
        #[arg(short, long, default_value_t = 3)]
        participants: usize,
        /// Items per participant (clamped to 5-20)
        #[arg(short, long, default_value_t = 10)]
        items: usize,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match cli.command {
        Commands::Match { file, json } => cmd_match(&file, json, cli.quiet),
        Commands::Normalize { texts } => cmd_normalize(&texts),
        Commands::Init {
            participants,
            items,
        } => cmd_init(participants, items),
        Commands::Version => {
            println!(
                "matchmaster {} (matchmaster-core {})",
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_VERSION")
            );
            0
        }
    };

    process::exit(exit_code);
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_writer(io::stderr)
        .init();
}

// ── Commands ──────────────────────────────────────────────

fn cmd_match(file: &Path, json: bool, quiet: bool) -> i32 {
    let participants = match read_file(file).and_then(|text| load_participants(&text)) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            return 2;
        }
    };
    info!(file = %file.display(), participants = participants.len(), "loaded snapshot");

    let result = match_participants(&participants);
    debug!(records = result.results.len(), "matched");

    if quiet {
        return 0;
    }

    if json {
        match serde_json::to_string_pretty(&result) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("{} {}", "error:".red().bold(), e);
                return 2;
            }
        }
    } else {
        print_results(&result);
    }
    0
}

fn cmd_normalize(texts: &[String]) -> i32 {
    for text in texts {
        println!("{}", normalize(text));
    }
    0
}

fn cmd_init(participants: usize, items: usize) -> i32 {
    let session = Session::start(participants, items, &SessionLimits::default());
    let template = serde_json::json!({ "participants": session.participants() });
    match serde_json::to_string_pretty(&template) {
        Ok(out) => {
            println!("{}", out);
            0
        }
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            2
        }
    }
}

// ── Output ────────────────────────────────────────────────

fn read_file(path: &Path) -> Result<String, Error> {
    std::fs::read_to_string(path).map_err(|e| Error::Io(format!("{}: {}", path.display(), e)))
}

fn print_results(result: &ResultSet) {
    if result.is_empty() {
        println!("No shared items ({} participants)", result.total_participants);
        return;
    }

    let width = result
        .results
        .iter()
        .map(|r| r.label.chars().count())
        .max()
        .unwrap_or(0);

    for record in &result.results {
        let tier = result.tier_of(record);
        let badge = match tier {
            Tier::Everyone => tier.label().cyan().bold(),
            Tier::Shared => tier.label().blue(),
            Tier::Unique => tier.label().dimmed(),
        };
        println!(
            "{:<width$}  {:>6}  [{}]",
            record.label,
            format!("{}/{}", record.count, result.total_participants),
            badge,
            width = width
        );
    }
}
