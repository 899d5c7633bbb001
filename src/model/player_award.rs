use serde::{Deserialize, Serialize};

use crate::model::{Entity, NaturalKey, Player};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAward {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub player_id: i32,
    pub name: String,
    pub year_awarded: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<Box<Player>>,
}

impl Entity for PlayerAward {
    const NAME: &'static str = "PlayerAward";
    const LABEL: &'static str = "player award";

    fn id(&self) -> Option<i32> {
        self.id
    }
}

impl NaturalKey for PlayerAward {
    type Key = (i32, String, i32);

    fn natural_key(&self) -> Self::Key {
        (self.player_id, self.name.to_lowercase(), self.year_awarded)
    }
}
