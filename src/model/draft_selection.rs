use serde::{Deserialize, Serialize};

use crate::model::Entity;

/// A draft pick joined with the selected player and team
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftSelection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(default)]
    pub draft_year: Option<i32>,
    #[serde(default, alias = "round")]
    pub draft_round: Option<i32>,
    pub pick_number: i32,
    #[serde(default)]
    pub player_id: Option<i32>,
    #[serde(default, alias = "currentTeamId")]
    pub team_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_name: Option<String>,
    #[serde(default)]
    pub position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub college: Option<String>,
}

impl Entity for DraftSelection {
    const NAME: &'static str = "DraftSelection";
    const LABEL: &'static str = "draft selection";

    fn id(&self) -> Option<i32> {
        self.id
    }
}
