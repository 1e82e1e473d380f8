use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Announcement, Expense, Photo, Player};

/// A single partner nomination (player -> nominated partner)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerChoice {
    pub player_id: String,
    pub partner_id: String,
}

/// Game-wide metadata aggregate: everything except players and photos
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMeta {
    #[serde(default)]
    pub balance: Decimal,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    /// Kept in first-nomination order so team discovery is stable
    #[serde(default)]
    pub partner_choices: Vec<PartnerChoice>,
    #[serde(default)]
    pub chickens_assigned: bool,
    #[serde(default)]
    pub announcement: Option<Announcement>,
}

/// Whole game state split into the three persisted aggregates
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameSnapshot {
    pub players: Vec<Player>,
    pub photos: Vec<Photo>,
    pub meta: GameMeta,
}
