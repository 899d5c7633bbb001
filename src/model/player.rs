use serde::{Deserialize, Serialize};

use crate::model::{
    CombineScore, DraftPick, Entity, NaturalKey, PlayerAward, Position, Team,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub age: i32,
    /// Height in inches
    #[serde(default)]
    pub height: f64,
    /// Weight in pounds
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub hand_size: f64,
    #[serde(default)]
    pub arm_length: f64,
    #[serde(default)]
    pub home_city: String,
    #[serde(default)]
    pub home_state: String,
    pub university: String,
    #[serde(default)]
    pub year_entered_league: Option<i32>,
    pub position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i32>,

    // Relations embedded by the backend on some endpoints, copies owned by this record
    #[serde(default, alias = "Team", skip_serializing_if = "Option::is_none")]
    pub team: Option<Box<Team>>,
    #[serde(default, alias = "award", skip_serializing_if = "Option::is_none")]
    pub awards: Option<Vec<PlayerAward>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pick: Option<Box<DraftPick>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combine_score: Option<Box<CombineScore>>,
}

impl Player {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Entity for Player {
    const NAME: &'static str = "Player";
    const LABEL: &'static str = "player";

    fn id(&self) -> Option<i32> {
        self.id
    }
}

/// Players are identified by first name, last name and university
impl NaturalKey for Player {
    type Key = (String, String, String);

    fn natural_key(&self) -> Self::Key {
        (
            self.first_name.to_lowercase(),
            self.last_name.to_lowercase(),
            self.university.to_lowercase(),
        )
    }
}
