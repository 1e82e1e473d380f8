use std::sync::Arc;

use super::list_teams::{team_details, TeamDetails};
use crate::domain::services::GameError;
use crate::infrastructure::services::GameSession;

/// Set partner input
pub struct SetPartnerInput {
    pub player_id: String,
    pub partner_id: String,
}

/// Set partner use case - records a nomination, returns the confirmed teams
pub struct SetPartner {
    session: Arc<GameSession>,
}

impl SetPartner {
    pub fn new(session: Arc<GameSession>) -> Self {
        Self { session }
    }

    pub async fn execute(&self, input: SetPartnerInput) -> Result<Vec<TeamDetails>, GameError> {
        let teams = self
            .session
            .mutate(|store| {
                store.set_partner(&input.player_id, &input.partner_id)?;
                Ok(team_details(store))
            })
            .await?;

        tracing::debug!(
            "{} nominated {} - {} confirmed team(s)",
            input.player_id,
            input.partner_id,
            teams.len()
        );
        Ok(teams)
    }
}
