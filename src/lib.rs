pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use infrastructure::app_state::AppState;
