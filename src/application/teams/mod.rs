mod choose_chickens;
mod list_teams;
mod set_partner;

pub use choose_chickens::*;
pub use list_teams::*;
pub use set_partner::*;
