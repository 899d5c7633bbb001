use serde::{Deserialize, Serialize};

use crate::model::{Entity, NaturalKey, Player, Team};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftPick {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub draft_year: i32,
    pub round: i32,
    pub pick_number: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_id: Option<i32>,
    pub team_id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pick_from: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pick_to: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combine_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<Box<Team>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<Box<Player>>,
}

impl Entity for DraftPick {
    const NAME: &'static str = "DraftPick";
    const LABEL: &'static str = "draft pick";

    fn id(&self) -> Option<i32> {
        self.id
    }
}

/// Draft slot `(draft_year, round, pick_number)`.
///
/// A pick is also unique by `player_id`, that second key is checked separately by the
/// draft pick service.
impl NaturalKey for DraftPick {
    type Key = (i32, i32, i32);

    fn natural_key(&self) -> Self::Key {
        (self.draft_year, self.round, self.pick_number)
    }
}
