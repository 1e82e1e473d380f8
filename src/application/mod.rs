pub mod admin;
pub mod photos;
pub mod players;
pub mod tab;
pub mod teams;
