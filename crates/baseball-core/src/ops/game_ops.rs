use crate::errors::{BaseballError, Result};
use crate::model::{Game, GameKey};
use crate::ops::Store;

/// Insert a game
///
/// The park and both teams must already exist. A game structurally equal to
/// one already stored is not added again.
///
/// # Errors
///
/// Returns `ReferenceNotFound` for a missing park or team.
pub fn insert_game(store: &mut Store, game: &Game) -> Result<()> {
    store.get_park(&game.park_id)?;
    store.get_team(&game.home_team_id)?;
    store.get_team(&game.visitor_team_id)?;

    if !store.games.contains(game) {
        store.games.push(game.clone());
    }
    Ok(())
}

/// Update the single game matching `key`
///
/// The park is always overwritten; scores and attendance only when supplied.
///
/// # Errors
///
/// - `Multiplicity` if zero or more than one game matches `key`
/// - `ReferenceNotFound` if `park_id` is not a known park
///
/// Nothing is modified when an error is returned.
pub fn update_game(
    store: &mut Store,
    key: &GameKey,
    park_id: &str,
    home_score: Option<u32>,
    visitor_score: Option<u32>,
    attendance: Option<u32>,
) -> Result<()> {
    let matched: Vec<usize> = store
        .games
        .iter()
        .enumerate()
        .filter(|(_, game)| game.matches_key(key))
        .map(|(index, _)| index)
        .collect();

    let index = match matched.as_slice() {
        [index] => *index,
        _ => {
            return Err(BaseballError::Multiplicity {
                date: key.date,
                home: key.home_team_id.clone(),
                visitor: key.visitor_team_id.clone(),
                matches: matched.len(),
            })
        }
    };

    let park_id = store.get_park(park_id)?.id.clone();

    let game = &mut store.games[index];
    game.park_id = park_id;
    if let Some(attendance) = attendance {
        game.attendance = attendance;
    }
    if let Some(visitor_score) = visitor_score {
        game.visitor_score = visitor_score;
    }
    if let Some(home_score) = home_score {
        game.home_score = home_score;
    }
    Ok(())
}
