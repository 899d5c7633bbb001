use crate::{
    client::{error::Error, service::combine_score::CombineScoreService, store::EntityStore},
    model::{combine_score::CombineMetric, CombineScore},
};

pub type CombineScoreStore<'a> = EntityStore<CombineScoreService<'a>>;

impl CombineScoreStore<'_> {
    /// Makes the score of a player current and adds it to the cache
    ///
    /// A player without score clears the current score.
    pub async fn fetch_by_player(
        &mut self,
        player_id: i32,
    ) -> Result<Option<CombineScore>, Error> {
        self.state.begin();
        let result = self.service.get_by_player_id(player_id).await;
        let score = self.state.settle("fetch", result)?;

        match &score {
            Some(score) => self.state.apply_saved(score.clone()),
            None => self.state.set_current(None),
        }

        Ok(score)
    }

    pub fn score_by_player(&self, player_id: i32) -> Option<&CombineScore> {
        self.items()
            .iter()
            .find(|score| score.player_id == player_id)
    }

    /// Best `limit` listed scores for a drill, fastest times or largest measurements first
    ///
    /// Scores without a result for the drill are left out.
    pub fn top_performers(&self, metric: CombineMetric, limit: usize) -> Vec<&CombineScore> {
        let mut ranked: Vec<(f64, &CombineScore)> = self
            .items()
            .iter()
            .filter_map(|score| score.metric(metric).map(|value| (value, score)))
            .collect();

        if metric.lower_is_better() {
            ranked.sort_by(|(a, _), (b, _)| a.total_cmp(b));
        } else {
            ranked.sort_by(|(a, _), (b, _)| b.total_cmp(a));
        }

        ranked
            .into_iter()
            .take(limit)
            .map(|(_, score)| score)
            .collect()
    }
}
