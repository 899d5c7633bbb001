use serde::{Deserialize, Serialize};

use crate::model::{Entity, NaturalKey};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub conference: String,
    #[serde(default)]
    pub division: String,
    #[serde(default)]
    pub stadium: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_id: Option<i32>,
}

impl Entity for Team {
    const NAME: &'static str = "Team";
    const LABEL: &'static str = "team";

    fn id(&self) -> Option<i32> {
        self.id
    }
}

/// Teams are identified by name alone
impl NaturalKey for Team {
    type Key = String;

    fn natural_key(&self) -> Self::Key {
        self.name.to_lowercase()
    }
}
