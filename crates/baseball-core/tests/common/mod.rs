use baseball_core::{Args, Command, CommandDescriptor, Game, League, Park, Store, Team};
use chrono::NaiveDate;

/// Calendar day helper
#[allow(dead_code)]
pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Store seeded with parks P1/P2 and teams A (AL), B (NA), C (AL)
///
/// Seeding bypasses commands so the transaction log stays idle.
#[allow(dead_code)]
pub fn seeded_store() -> Store {
    let mut store = Store::new();
    store.load_park(Park::new("P1"));
    store.load_park(Park::new("P2"));
    store.load_team(Team::new("A", League::AL));
    store.load_team(Team::new("B", League::NA));
    store.load_team(Team::new("C", League::AL));
    store
}

/// Game at park P1 with fixed scores and attendance
#[allow(dead_code)]
pub fn game(date: NaiveDate, home: &str, visitor: &str) -> Game {
    Game {
        date,
        home_team_id: home.to_string(),
        visitor_team_id: visitor.to_string(),
        home_score: 4,
        visitor_score: 3,
        park_id: "P1".to_string(),
        attendance: 20000,
    }
}

#[allow(dead_code)]
pub fn insert_game(game: Game) -> Command {
    Command::InsertGame { game }
}

#[allow(dead_code)]
pub fn insert_park(id: &str) -> Command {
    Command::InsertPark {
        park_id: id.to_string(),
    }
}

#[allow(dead_code)]
pub fn insert_team(id: &str, league: League) -> Command {
    Command::InsertTeam {
        team_id: id.to_string(),
        league,
    }
}

/// Descriptor from a verb, collection and key/value pairs
#[allow(dead_code)]
pub fn descriptor(verb: &str, collection: &str, pairs: &[(&str, &str)]) -> CommandDescriptor {
    CommandDescriptor::new(verb, collection, pairs.iter().copied().collect::<Args>())
}
