use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Link between a player and the team they play for
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerTeam {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub player_id: i32,
    pub team_id: i32,
    #[serde(default)]
    pub current_team: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}

/// Request body linking a player to a team, `make_current` closes the previous link
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayerTeam {
    pub player_id: i32,
    pub team_id: i32,
    pub make_current: bool,
    pub start_date: DateTime<Utc>,
}

/// Request body moving an existing link to another team
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlayerTeam {
    pub team_id: i32,
    pub current_team: bool,
}
