//! Single-command execution
//!
//! Usage: baseball exec <VERB> [COLLECTION] [KEY VALUE]...

use clap::Args;

use super::output::{write_games, write_store};
use super::{run_tokens, CliResult, Outcome};
use baseball_core::Store;

#[derive(Debug, Args)]
pub struct ExecArgs {
    /// Verb, optional collection, then key/value pairs
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub tokens: Vec<String>,
}

/// Execute one command, then dump the store
pub fn execute(store: &mut Store, args: ExecArgs) -> CliResult<()> {
    let mut out = std::io::stdout().lock();
    match run_tokens(store, &args.tokens)? {
        Outcome::Executed => write_store(&mut out, store),
        Outcome::Selected(query) => write_games(&mut out, query.run(store), false),
    }
}
