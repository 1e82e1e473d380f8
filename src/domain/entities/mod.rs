mod announcement;
mod expense;
mod photo;
mod player;

pub use announcement::*;
pub use expense::*;
pub use photo::*;
pub use player::*;
