mod game_snapshot;
mod team;

pub use game_snapshot::*;
pub use team::*;
