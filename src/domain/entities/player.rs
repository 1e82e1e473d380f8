use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Player role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerRole {
    Player,
    Chicken,
}

impl PlayerRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerRole::Player => "player",
            PlayerRole::Chicken => "chicken",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "player" => Some(PlayerRole::Player),
            "chicken" => Some(PlayerRole::Chicken),
            _ => None,
        }
    }
}

/// Player entity - a participant who joined the current game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    pub role: PlayerRole,
    pub joined_at: DateTime<Utc>,
}

impl Player {
    /// Create a new player with a fresh id and the default role
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            role: PlayerRole::Player,
            joined_at: Utc::now(),
        }
    }

    pub fn is_chicken(&self) -> bool {
        self.role == PlayerRole::Chicken
    }
}
