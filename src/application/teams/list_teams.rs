use std::sync::Arc;

use crate::domain::entities::Player;
use crate::domain::services::GameStore;
use crate::domain::value_objects::Team;
use crate::infrastructure::services::GameSession;

/// A confirmed team with its members resolved
#[derive(Debug, Clone)]
pub struct TeamDetails {
    pub team: Team,
    pub members: Vec<Player>,
}

pub(crate) fn team_details(store: &GameStore) -> Vec<TeamDetails> {
    store
        .compute_teams()
        .into_iter()
        .map(|team| {
            let members = team
                .members()
                .iter()
                .filter_map(|id| store.get_player(id).cloned())
                .collect();
            TeamDetails { team, members }
        })
        .collect()
}

/// List teams use case
pub struct ListTeams {
    session: Arc<GameSession>,
}

impl ListTeams {
    pub fn new(session: Arc<GameSession>) -> Self {
        Self { session }
    }

    pub async fn execute(&self) -> Vec<TeamDetails> {
        self.session.read(team_details).await
    }
}
