use std::sync::Arc;

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::AppState;
use crate::application::teams::{
    ChooseChickens, ListTeams, SetPartner, SetPartnerInput, TeamDetails,
};
use crate::domain::entities::Announcement;
use crate::domain::services::ChickenDraw;

// ============================================================================
// Request/Response DTOs
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResponse {
    pub player_ids: [String; 2],
    pub names: Vec<String>,
}

impl From<TeamDetails> for TeamResponse {
    fn from(details: TeamDetails) -> Self {
        Self {
            player_ids: [details.team.0, details.team.1],
            names: details.members.into_iter().map(|p| p.name).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TeamsResponse {
    pub teams: Vec<TeamResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerRequest {
    #[serde(default)]
    pub player_id: Option<String>,
    #[serde(default)]
    pub partner_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SetPartnerResponse {
    pub success: bool,
    pub teams: Vec<TeamResponse>,
}

#[derive(Debug, Serialize)]
pub struct AnnouncementResponse {
    pub announcement: Option<Announcement>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChooseChickensResponse {
    pub success: bool,
    pub already_assigned: bool,
    pub team: Option<[String; 2]>,
    pub announcement: Option<Announcement>,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /api/partners - Confirmed (mutual) teams
pub async fn list_teams(State(state): State<Arc<AppState>>) -> Json<TeamsResponse> {
    let use_case = ListTeams::new(state.game.clone());
    let teams = use_case.execute().await.into_iter().map(Into::into).collect();
    Json(TeamsResponse { teams })
}

/// POST /api/partners - Nominate a partner
pub async fn set_partner(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PartnerRequest>,
) -> Result<Json<SetPartnerResponse>, ApiError> {
    let (player_id, partner_id) = match (req.player_id, req.partner_id) {
        (Some(player_id), Some(partner_id)) if !player_id.is_empty() && !partner_id.is_empty() => {
            (player_id, partner_id)
        }
        _ => {
            return Err(ApiError::Validation(
                "playerId and partnerId are required".to_string(),
            ))
        }
    };

    let use_case = SetPartner::new(state.game.clone());
    let teams = use_case
        .execute(SetPartnerInput {
            player_id,
            partner_id,
        })
        .await?;

    Ok(Json(SetPartnerResponse {
        success: true,
        teams: teams.into_iter().map(Into::into).collect(),
    }))
}

/// GET /api/choose-chickens - Latest announcement
pub async fn get_announcement(State(state): State<Arc<AppState>>) -> Json<AnnouncementResponse> {
    let use_case = ChooseChickens::new(state.game.clone());
    Json(AnnouncementResponse {
        announcement: use_case.announcement().await,
    })
}

/// POST /api/choose-chickens - Draw the chickens from the confirmed teams (admin)
pub async fn choose_chickens(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ChooseChickensResponse>, ApiError> {
    let use_case = ChooseChickens::new(state.game.clone());

    let response = match use_case.execute().await? {
        ChickenDraw::AlreadyAssigned => ChooseChickensResponse {
            success: false,
            already_assigned: true,
            team: None,
            announcement: use_case.announcement().await,
        },
        ChickenDraw::Chosen { team, announcement } => ChooseChickensResponse {
            success: true,
            already_assigned: false,
            team: Some([team.0, team.1]),
            announcement: Some(announcement),
        },
    };

    Ok(Json(response))
}
