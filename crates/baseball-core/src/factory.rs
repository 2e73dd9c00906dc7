//! Command factory
//!
//! Translates a [`CommandDescriptor`] into a typed [`Command`]. Verbs are
//! matched case-insensitively; collections must be one of `park`, `team`
//! or `game`.

use crate::commands::Command;
use crate::dates::parse_date;
use crate::descriptor::CommandDescriptor;
use crate::errors::{BaseballError, Result};
use crate::model::{Game, GameKey, League};

pub const ARG_PARK_ID: &str = "ParkId";
pub const ARG_TEAM_ID: &str = "TeamId";
pub const ARG_LEAGUE: &str = "League";
pub const ARG_DATE: &str = "Date";
pub const ARG_HOME_TEAM_ID: &str = "HomeTeamId";
pub const ARG_VISITOR_TEAM_ID: &str = "VisitorTeamId";
pub const ARG_HOME_SCORE: &str = "HomeScore";
pub const ARG_VISITOR_SCORE: &str = "VisitorScore";
pub const ARG_ATTENDANCE: &str = "Attendance";

impl TryFrom<&CommandDescriptor> for Command {
    type Error = BaseballError;

    fn try_from(desc: &CommandDescriptor) -> Result<Self> {
        build_command(desc)
    }
}

/// Build a typed command from a descriptor
///
/// # Errors
///
/// - `UnrecognizedVerb` / `UnrecognizedCollection` when the descriptor
///   cannot be classified
/// - `UnsupportedOperation` for `delete`
/// - `MissingArgument` / `FormatError` for absent or malformed arguments
pub fn build_command(desc: &CommandDescriptor) -> Result<Command> {
    let verb = desc.verb.to_lowercase();
    match verb.as_str() {
        "insert" => match desc.collection.as_str() {
            "park" => Ok(Command::InsertPark {
                park_id: required(desc, ARG_PARK_ID)?.to_string(),
            }),
            "team" => Ok(Command::InsertTeam {
                team_id: required(desc, ARG_TEAM_ID)?.to_string(),
                league: League::parse(required(desc, ARG_LEAGUE)?),
            }),
            "game" => Ok(Command::InsertGame {
                game: Game {
                    date: parse_date(ARG_DATE, required(desc, ARG_DATE)?)?,
                    home_team_id: required(desc, ARG_HOME_TEAM_ID)?.to_string(),
                    visitor_team_id: required(desc, ARG_VISITOR_TEAM_ID)?.to_string(),
                    home_score: required_count(desc, ARG_HOME_SCORE)?,
                    visitor_score: required_count(desc, ARG_VISITOR_SCORE)?,
                    park_id: required(desc, ARG_PARK_ID)?.to_string(),
                    attendance: required_count(desc, ARG_ATTENDANCE)?,
                },
            }),
            _ => Err(unrecognized_collection(desc)),
        },
        "update" => match desc.collection.as_str() {
            "park" => Ok(Command::UpdatePark {
                park_id: required(desc, ARG_PARK_ID)?.to_string(),
            }),
            "team" => Ok(Command::UpdateTeam {
                team_id: required(desc, ARG_TEAM_ID)?.to_string(),
                league: desc
                    .args
                    .get(ARG_LEAGUE)
                    .filter(|code| !code.is_empty())
                    .map(League::parse),
            }),
            "game" => Ok(Command::UpdateGame {
                key: GameKey {
                    date: parse_date(ARG_DATE, required(desc, ARG_DATE)?)?,
                    home_team_id: required(desc, ARG_HOME_TEAM_ID)?.to_string(),
                    visitor_team_id: required(desc, ARG_VISITOR_TEAM_ID)?.to_string(),
                },
                park_id: required(desc, ARG_PARK_ID)?.to_string(),
                home_score: optional_count(desc, ARG_HOME_SCORE)?,
                visitor_score: optional_count(desc, ARG_VISITOR_SCORE)?,
                attendance: optional_count(desc, ARG_ATTENDANCE)?,
            }),
            _ => Err(unrecognized_collection(desc)),
        },
        "delete" => Err(BaseballError::UnsupportedOperation {
            verb: "delete".to_string(),
        }),
        "begin" => Ok(Command::Begin),
        "commit" => Ok(Command::Commit),
        "rollback" => Ok(Command::Rollback),
        _ => Err(BaseballError::UnrecognizedVerb {
            verb: desc.verb.clone(),
        }),
    }
}

fn required<'a>(desc: &'a CommandDescriptor, key: &str) -> Result<&'a str> {
    desc.args
        .get(key)
        .ok_or_else(|| BaseballError::MissingArgument {
            command: desc.label(),
            key: key.to_string(),
        })
}

fn required_count(desc: &CommandDescriptor, key: &str) -> Result<u32> {
    parse_count(key, required(desc, key)?)
}

fn optional_count(desc: &CommandDescriptor, key: &str) -> Result<Option<u32>> {
    desc.args
        .get(key)
        .map(|value| parse_count(key, value))
        .transpose()
}

/// Parse a non-negative integer field (scores, attendance)
///
/// Narrower than a plain integer parse: negative values are rejected since
/// no score or attendance can be below zero.
///
/// # Errors
///
/// Returns `FormatError` naming `key` when `value` is not a non-negative
/// integer.
pub fn parse_count(key: &str, value: &str) -> Result<u32> {
    value
        .trim()
        .parse()
        .map_err(|_| BaseballError::format(key, value, "a non-negative integer"))
}

fn unrecognized_collection(desc: &CommandDescriptor) -> BaseballError {
    BaseballError::UnrecognizedCollection {
        verb: desc.verb.clone(),
        collection: desc.collection.clone(),
    }
}
