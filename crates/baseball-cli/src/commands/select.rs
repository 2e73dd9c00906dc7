//! Filter query
//!
//! Usage: baseball select [dateFrom D] [dateTo D] [homeTeam T] [visitorTeam T] [--json]

use clap::Args;

use super::output::write_games;
use super::CliResult;
use baseball_core::{Args as Pairs, Query, Store};

#[derive(Debug, Args)]
pub struct SelectArgs {
    /// Filter key/value pairs, applied in order
    #[arg(num_args = 0..)]
    pub filters: Vec<String>,

    /// Print matching games as a JSON array
    #[arg(long)]
    pub json: bool,
}

pub fn execute(store: &Store, args: SelectArgs) -> CliResult<()> {
    let pairs = Pairs::from_pairs("select", &args.filters)?;
    let query = Query::from_args(&pairs)?;
    let mut out = std::io::stdout().lock();
    write_games(&mut out, query.run(store), args.json)
}
