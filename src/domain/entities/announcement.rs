use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Player;

/// Announcement type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnouncementType {
    ChickensChosen,
}

impl AnnouncementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnnouncementType::ChickensChosen => "chickens_chosen",
        }
    }
}

/// Player reference carried by an announcement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnouncedPlayer {
    pub id: String,
    pub name: String,
}

impl From<&Player> for AnnouncedPlayer {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id.clone(),
            name: player.name.clone(),
        }
    }
}

/// Announcement entity - the latest broadcast-worthy event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: String,
    #[serde(rename = "type")]
    pub announcement_type: AnnouncementType,
    pub message: String,
    pub players: Vec<AnnouncedPlayer>,
    pub timestamp: DateTime<Utc>,
}

impl Announcement {
    /// Announcement for a team drawn as the chickens
    pub fn chickens_chosen(first: &Player, second: &Player) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            announcement_type: AnnouncementType::ChickensChosen,
            message: format!(
                "{} and {} are the chickens! Go find them!",
                first.name, second.name
            ),
            players: vec![first.into(), second.into()],
            timestamp: Utc::now(),
        }
    }
}
