//! Script execution
//!
//! Usage: baseball script <FILE>
//!
//! One command per line, whitespace separated. Blank lines and lines
//! starting with `#` are skipped. Every line runs against the same store,
//! so `begin`/`commit`/`rollback` behave as they would in a session.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use super::output::{write_games, write_store};
use super::{run_tokens, CliResult, Outcome};
use baseball_core::Store;

#[derive(Debug, Args)]
pub struct ScriptArgs {
    /// Path to the script file
    pub path: PathBuf,
}

/// Run every line in order, stopping at the first failure
pub fn execute(store: &mut Store, args: ScriptArgs) -> CliResult<()> {
    let script = std::fs::read_to_string(&args.path)
        .map_err(|e| format!("cannot read {}: {}", args.path.display(), e))?;
    let mut out = std::io::stdout().lock();

    for (index, line) in script.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match run_tokens(store, &tokens) {
            Ok(Outcome::Executed) => {}
            Ok(Outcome::Selected(query)) => {
                writeln!(out, "{}:", line)?;
                write_games(&mut out, query.run(store), false)?;
            }
            Err(err) => return Err(format!("line {}: {}", index + 1, err).into()),
        }
    }

    write_store(&mut out, store)
}
