use crate::errors::Result;
use crate::model::{League, Team};
use crate::ops::Store;

/// Create a team if absent
///
/// An existing team is left untouched, including its league.
///
/// # Errors
///
/// Never fails.
pub fn insert_team(store: &mut Store, team_id: &str, league: League) -> Result<()> {
    store.load_team(Team::new(team_id, league));
    Ok(())
}

/// Overwrite a team's league
///
/// No-op when the team doesn't exist or no league was supplied; never
/// creates a team.
///
/// # Errors
///
/// Never fails.
pub fn update_team(store: &mut Store, team_id: &str, league: Option<League>) -> Result<()> {
    if let (Some(team), Some(league)) = (store.teams.get_mut(team_id), league) {
        team.league = league;
    }
    Ok(())
}
