use serde::{Deserialize, Serialize};

use crate::model::{Entity, NaturalKey};

/// Scouting combine results, at most one per player
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombineScore {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub player_id: i32,
    #[serde(default, alias = "fortyTime", skip_serializing_if = "Option::is_none")]
    pub forty_yard_dash: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bench_press: Option<f64>,
    #[serde(default, alias = "verticalLeap", skip_serializing_if = "Option::is_none")]
    pub vertical_jump: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broad_jump: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub three_cone: Option<f64>,
    #[serde(default, alias = "twentyYardShuttle", skip_serializing_if = "Option::is_none")]
    pub shuttle_run: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

/// Drill recorded in a [`CombineScore`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CombineMetric {
    FortyYardDash,
    BenchPress,
    VerticalJump,
    BroadJump,
    ThreeCone,
    ShuttleRun,
}

impl CombineMetric {
    /// Timed drills rank lower values first, measured drills rank higher values first
    pub fn lower_is_better(&self) -> bool {
        matches!(self, Self::FortyYardDash | Self::ThreeCone | Self::ShuttleRun)
    }
}

impl CombineScore {
    pub fn metric(&self, metric: CombineMetric) -> Option<f64> {
        match metric {
            CombineMetric::FortyYardDash => self.forty_yard_dash,
            CombineMetric::BenchPress => self.bench_press,
            CombineMetric::VerticalJump => self.vertical_jump,
            CombineMetric::BroadJump => self.broad_jump,
            CombineMetric::ThreeCone => self.three_cone,
            CombineMetric::ShuttleRun => self.shuttle_run,
        }
    }
}

impl Entity for CombineScore {
    const NAME: &'static str = "CombineScore";
    const LABEL: &'static str = "combine score";

    fn id(&self) -> Option<i32> {
        self.id
    }
}

impl NaturalKey for CombineScore {
    type Key = i32;

    fn natural_key(&self) -> Self::Key {
        self.player_id
    }
}
