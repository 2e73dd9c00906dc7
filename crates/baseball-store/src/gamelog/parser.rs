//! Positional game-log record parser

use baseball_core::dates::parse_compact;
use baseball_core::factory::parse_count;
use baseball_core::{Game, League, Park, Store, Team};
use chrono::NaiveDate;

use crate::errors::{record_error, Result};

const IDX_DATE: usize = 0;
const IDX_VISITOR_TEAM: usize = 3;
const IDX_VISITOR_LEAGUE: usize = 4;
const IDX_HOME_TEAM: usize = 6;
const IDX_HOME_LEAGUE: usize = 7;
const IDX_VISITOR_SCORE: usize = 9;
const IDX_HOME_SCORE: usize = 10;
const IDX_PARK_ID: usize = 16;
const IDX_ATTENDANCE: usize = 17;

/// Minimum number of fields a record must carry
pub const MIN_FIELDS: usize = IDX_ATTENDANCE + 1;

/// One parsed game-log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameLogRecord {
    pub date: NaiveDate,
    pub visitor_team: String,
    pub visitor_league: League,
    pub home_team: String,
    pub home_league: League,
    pub visitor_score: u32,
    pub home_score: u32,
    pub park_id: String,
    pub attendance: u32,
}

/// Remove one pair of surrounding double quotes, if present
pub fn strip_quotes(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(value)
}

fn field<S: AsRef<str>>(fields: &[S], idx: usize) -> &str {
    strip_quotes(fields[idx].as_ref().trim())
}

/// Parse one record's fields
///
/// # Errors
///
/// Returns an `InvalidFormat` error when the record is too short, the date
/// is not `YYYYMMDD`, or a score/attendance is not a non-negative integer.
pub fn parse_record<S: AsRef<str>>(fields: &[S]) -> Result<GameLogRecord> {
    if fields.len() < MIN_FIELDS {
        return Err(record_error(&format!(
            "expected at least {} fields, found {}",
            MIN_FIELDS,
            fields.len()
        )));
    }
    let raw_date = field(fields, IDX_DATE);
    let date = parse_compact(raw_date)
        .ok_or_else(|| record_error(&format!("invalid date '{}'", raw_date)))?;

    Ok(GameLogRecord {
        date,
        visitor_team: field(fields, IDX_VISITOR_TEAM).to_string(),
        visitor_league: League::parse(field(fields, IDX_VISITOR_LEAGUE)),
        home_team: field(fields, IDX_HOME_TEAM).to_string(),
        home_league: League::parse(field(fields, IDX_HOME_LEAGUE)),
        visitor_score: parse_count("visitor_score", field(fields, IDX_VISITOR_SCORE))?,
        home_score: parse_count("home_score", field(fields, IDX_HOME_SCORE))?,
        park_id: field(fields, IDX_PARK_ID).to_string(),
        attendance: parse_count("attendance", field(fields, IDX_ATTENDANCE))?,
    })
}

impl GameLogRecord {
    pub fn game(&self) -> Game {
        Game {
            date: self.date,
            home_team_id: self.home_team.clone(),
            visitor_team_id: self.visitor_team.clone(),
            home_score: self.home_score,
            visitor_score: self.visitor_score,
            park_id: self.park_id.clone(),
            attendance: self.attendance,
        }
    }

    /// Load the record into the store
    ///
    /// Both teams and the park are created when missing; an existing team
    /// keeps its league. The game is appended without deduplication.
    pub fn apply_to(&self, store: &mut Store) {
        store.load_team(Team::new(self.visitor_team.clone(), self.visitor_league));
        store.load_team(Team::new(self.home_team.clone(), self.home_league));
        store.load_park(Park::new(self.park_id.clone()));
        store.load_game(self.game());
    }
}
