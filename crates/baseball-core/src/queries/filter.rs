use chrono::NaiveDate;

use crate::dates::parse_date;
use crate::descriptor::Args;
use crate::errors::Result;
use crate::model::Game;

pub const KEY_DATE_FROM: &str = "dateFrom";
pub const KEY_DATE_TO: &str = "dateTo";
pub const KEY_HOME_TEAM: &str = "homeTeam";
pub const KEY_VISITOR_TEAM: &str = "visitorTeam";

/// Predicate narrowing the game collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Games strictly after the date
    DateFrom(NaiveDate),
    /// Games strictly before the date
    DateTo(NaiveDate),
    /// Games whose home team name equals the value exactly
    HomeTeam(String),
    /// Games whose visitor team name equals the value exactly
    VisitorTeam(String),
}

impl Filter {
    pub fn matches(&self, game: &Game) -> bool {
        match self {
            Filter::DateFrom(date) => game.date > *date,
            Filter::DateTo(date) => game.date < *date,
            Filter::HomeTeam(team) => game.home_team_id == *team,
            Filter::VisitorTeam(team) => game.visitor_team_id == *team,
        }
    }

    /// Build filters from a key/value mapping
    ///
    /// One filter per recognized key, in argument order; unknown keys are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns `FormatError` when a date value cannot be parsed.
    pub fn from_args(args: &Args) -> Result<Vec<Filter>> {
        let mut filters = Vec::new();
        for (key, value) in args.iter() {
            let filter = match key {
                KEY_DATE_FROM => Filter::DateFrom(parse_date(key, value)?),
                KEY_DATE_TO => Filter::DateTo(parse_date(key, value)?),
                KEY_HOME_TEAM => Filter::HomeTeam(value.to_string()),
                KEY_VISITOR_TEAM => Filter::VisitorTeam(value.to_string()),
                _ => continue,
            };
            filters.push(filter);
        }
        Ok(filters)
    }
}
