mod join_game;
mod list_players;

pub use join_game::*;
pub use list_players::*;
