//! Query module for read-only game selection
//!
//! A query is an ordered list of [`Filter`]s folded left to right over the
//! game collection; each stage narrows what the previous one produced.
//! Results are lazy iterators borrowed from the store, so evaluating a
//! query again always reflects the store's current contents.

pub mod filter;

pub use filter::Filter;

use crate::descriptor::Args;
use crate::errors::Result;
use crate::model::Game;
use crate::ops::Store;

/// Fold `filters` over `games`, narrowing stage by stage
pub fn select<'a, I>(games: I, filters: &'a [Filter]) -> Box<dyn Iterator<Item = &'a Game> + 'a>
where
    I: Iterator<Item = &'a Game> + 'a,
{
    let all: Box<dyn Iterator<Item = &'a Game> + 'a> = Box::new(games);
    filters
        .iter()
        .fold(all, |stage, filter| -> Box<dyn Iterator<Item = &'a Game> + 'a> {
            Box::new(stage.filter(move |game| filter.matches(game)))
        })
}

/// Reusable query: an owned, ordered filter list
///
/// Running the same query twice re-evaluates it against whatever the store
/// holds at that moment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    filters: Vec<Filter>,
}

impl Query {
    pub fn new(filters: Vec<Filter>) -> Self {
        Self { filters }
    }

    /// Build a query from descriptor arguments
    ///
    /// # Errors
    ///
    /// Returns `FormatError` for an unparseable date filter.
    pub fn from_args(args: &Args) -> Result<Self> {
        Filter::from_args(args).map(Self::new)
    }

    /// Append a filter stage
    pub fn and(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// Evaluate against the store's current games
    pub fn run<'a>(&'a self, store: &'a Store) -> impl Iterator<Item = &'a Game> + 'a {
        store.query(&self.filters)
    }
}

impl Store {
    /// Run a filter list over the games, in insertion order
    ///
    /// An empty filter list yields every game.
    pub fn query<'a>(&'a self, filters: &'a [Filter]) -> impl Iterator<Item = &'a Game> + 'a {
        tracing::debug!(op = "query", filters = filters.len(), games = self.games.len());
        select(self.games.iter(), filters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, m, d).unwrap()
    }

    fn game(date: NaiveDate, home: &str, visitor: &str) -> Game {
        Game {
            date,
            home_team_id: home.to_string(),
            visitor_team_id: visitor.to_string(),
            home_score: 0,
            visitor_score: 0,
            park_id: "P".to_string(),
            attendance: 0,
        }
    }

    #[test]
    fn test_select_with_no_filters_keeps_order() {
        let games = vec![game(day(4, 2), "A", "B"), game(day(4, 1), "B", "A")];
        let selected: Vec<&Game> = select(games.iter(), &[]).collect();
        assert_eq!(selected, vec![&games[0], &games[1]]);
    }

    #[test]
    fn test_select_composes_stages() {
        let games = vec![
            game(day(4, 1), "A", "B"),
            game(day(4, 2), "A", "C"),
            game(day(4, 3), "B", "A"),
        ];
        let filters = [
            Filter::HomeTeam("A".to_string()),
            Filter::DateFrom(day(4, 1)),
        ];
        let selected: Vec<&Game> = select(games.iter(), &filters).collect();
        assert_eq!(selected, vec![&games[1]]);
    }

    #[test]
    fn test_query_builder() {
        let query = Query::default()
            .and(Filter::VisitorTeam("B".to_string()))
            .and(Filter::DateTo(day(5, 1)));
        assert_eq!(query.filters().len(), 2);
    }
}
