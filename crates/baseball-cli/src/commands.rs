//! Subcommand implementations

pub mod exec;
pub mod output;
pub mod script;
pub mod select;

use std::path::PathBuf;

use baseball_core::{Args, Command, CommandDescriptor, Query, Store};

pub type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Build a store and load every game-log path into it, in order
pub fn load_store(gamelogs: &[PathBuf]) -> CliResult<Store> {
    let mut store = Store::new();
    for path in gamelogs {
        let summary = baseball_store::import_gamelogs(path, &mut store)?;
        tracing::info!(
            op = "load_gamelogs",
            path = %path.display(),
            files = summary.files,
            imported = summary.imported,
            skipped = summary.skipped
        );
    }
    Ok(store)
}

/// What a line of input turned into
pub enum Outcome {
    Executed,
    Selected(Query),
}

/// Run one tokenized line against the store
///
/// `select` lines are queries whose remaining tokens are all filter
/// pairs; anything else goes through the command factory.
pub fn run_tokens<S: AsRef<str>>(store: &mut Store, tokens: &[S]) -> CliResult<Outcome> {
    if let Some((verb, pairs)) = tokens.split_first() {
        if verb.as_ref().eq_ignore_ascii_case("select") {
            let args = Args::from_pairs("select", pairs)?;
            return Ok(Outcome::Selected(Query::from_args(&args)?));
        }
    }
    let desc = CommandDescriptor::from_tokens(tokens)?;
    store.execute(Command::try_from(&desc)?)?;
    Ok(Outcome::Executed)
}
