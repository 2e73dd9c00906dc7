//! Baseball CLI
//!
//! Command-line interface for the in-memory baseball store

use std::path::PathBuf;

use baseball_core::logging_facility::{self, Profile};
use clap::{Parser, Subcommand, ValueEnum};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "baseball")]
#[command(about = "Baseball - in-memory parks, teams and games", long_about = None)]
struct Cli {
    /// Game-log file or directory to load before running (repeatable)
    #[arg(long = "gamelogs", value_name = "PATH", global = true)]
    gamelogs: Vec<PathBuf>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogProfile::Development, global = true)]
    log_profile: LogProfile,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogProfile {
    Development,
    Production,
}

impl From<LogProfile> for Profile {
    fn from(profile: LogProfile) -> Self {
        match profile {
            LogProfile::Development => Profile::Development,
            LogProfile::Production => Profile::Production,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Execute one command: VERB [COLLECTION] [KEY VALUE]...
    Exec(commands::exec::ExecArgs),
    /// Print the games matching a filter: [KEY VALUE]...
    Select(commands::select::SelectArgs),
    /// Execute a file of commands, one per line
    Script(commands::script::ScriptArgs),
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log_profile.into());

    let result = commands::load_store(&cli.gamelogs).and_then(|mut store| match cli.command {
        Commands::Exec(args) => commands::exec::execute(&mut store, args),
        Commands::Select(args) => commands::select::execute(&store, args),
        Commands::Script(args) => commands::script::execute(&mut store, args),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
