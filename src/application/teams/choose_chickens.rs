use std::sync::Arc;

use crate::domain::entities::Announcement;
use crate::domain::services::{ChickenDraw, GameError};
use crate::infrastructure::services::GameSession;

/// Choose chickens use case - draws the chickens from the confirmed teams
pub struct ChooseChickens {
    session: Arc<GameSession>,
}

impl ChooseChickens {
    pub fn new(session: Arc<GameSession>) -> Self {
        Self { session }
    }

    pub async fn execute(&self) -> Result<ChickenDraw, GameError> {
        let draw = self
            .session
            .mutate(|store| store.choose_chickens_from_teams())
            .await?;

        if draw == ChickenDraw::AlreadyAssigned {
            tracing::info!("Chicken draw requested but chickens are already assigned");
        }
        Ok(draw)
    }

    /// The latest announcement, if chickens were drawn from a team
    pub async fn announcement(&self) -> Option<Announcement> {
        self.session.read(|store| store.announcement().cloned()).await
    }
}
