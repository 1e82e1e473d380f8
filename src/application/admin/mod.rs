mod admin_login;
mod assign_chickens;
mod reset_game;

pub use admin_login::*;
pub use assign_chickens::*;
pub use reset_game::*;
