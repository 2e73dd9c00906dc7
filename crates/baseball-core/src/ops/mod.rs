pub mod game_ops;
pub mod park_ops;
pub mod store;
pub mod team_ops;

pub use store::Store;
