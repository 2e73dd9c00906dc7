//! Plain-text and JSON rendering of store contents

use std::io::Write;

use baseball_core::{Game, Store};

use super::CliResult;

pub fn write_game<W: Write>(out: &mut W, game: &Game) -> std::io::Result<()> {
    writeln!(
        out,
        "  {} | {} vs {} | {}:{} | {} fans at {}",
        game.date,
        game.home_team_id,
        game.visitor_team_id,
        game.home_score,
        game.visitor_score,
        game.attendance,
        game.park_id
    )
}

/// Print matching games, one per line, or as a JSON array
pub fn write_games<'a, W, I>(out: &mut W, games: I, json: bool) -> CliResult<()>
where
    W: Write,
    I: Iterator<Item = &'a Game>,
{
    if json {
        let games: Vec<&Game> = games.collect();
        serde_json::to_writer_pretty(&mut *out, &games)?;
        writeln!(out)?;
        return Ok(());
    }
    for game in games {
        write_game(out, game)?;
    }
    Ok(())
}

/// Dump parks, teams and games
pub fn write_store<W: Write>(out: &mut W, store: &Store) -> CliResult<()> {
    writeln!(out, "Parks:")?;
    for park in store.parks() {
        writeln!(out, "  {}", park)?;
    }
    writeln!(out, "Teams:")?;
    for team in store.teams() {
        writeln!(out, "  {} {}", team.name, team.league)?;
    }
    writeln!(out, "Games:")?;
    write_games(out, store.games().iter(), false)
}
