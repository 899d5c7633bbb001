use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::model::{Entity, NaturalKey};

/// Side of the field for the scheduled team
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HomeOrAway {
    #[serde(rename = "H")]
    Home,
    #[serde(rename = "A")]
    Away,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opp_team_id: Option<i32>,
    #[serde(deserialize_with = "number_or_string")]
    pub season_year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_week: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_state_province: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opp_team_conference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opp_team_division: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub won_lost_flag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_or_away: Option<HomeOrAway>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_score: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opp_team_score: Option<i32>,
}

impl Schedule {
    /// Team the schedule belongs to.
    ///
    /// Uses `team_id` when present, otherwise falls back to `opp_team_id` for away games.
    pub fn effective_team_id(&self) -> Option<i32> {
        match (self.team_id, self.home_or_away) {
            (Some(team_id), _) => Some(team_id),
            (None, Some(HomeOrAway::Away)) => self.opp_team_id,
            (None, _) => None,
        }
    }
}

impl Entity for Schedule {
    const NAME: &'static str = "Schedule";
    const LABEL: &'static str = "schedule";

    fn id(&self) -> Option<i32> {
        self.id
    }
}

impl NaturalKey for Schedule {
    type Key = (Option<i32>, i32);

    fn natural_key(&self) -> Self::Key {
        (self.effective_team_id(), self.season_year)
    }
}

/// Season years arrive either as a number or as a numeric string
fn number_or_string<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Year {
        Number(i32),
        Text(String),
    }

    match Year::deserialize(deserializer)? {
        Year::Number(year) => Ok(year),
        Year::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}
