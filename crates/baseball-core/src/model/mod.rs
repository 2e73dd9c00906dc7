pub mod game;
pub mod park;
pub mod team;

pub use game::{Game, GameKey};
pub use park::Park;
pub use team::{League, Team};
