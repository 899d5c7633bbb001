use crate::{
    client::{error::Error, service::player_award::PlayerAwardService, store::EntityStore},
    model::PlayerAward,
};

pub type PlayerAwardStore<'a> = EntityStore<PlayerAwardService<'a>>;

impl PlayerAwardStore<'_> {
    /// Fetches the awards of a player and adds them to the cache
    pub async fn fetch_by_player(&mut self, player_id: i32) -> Result<Vec<PlayerAward>, Error> {
        let service = self.service;
        self.fetch_matching(service.get_by_player_id(player_id))
            .await
    }

    /// Listed awards of a player, most recent first
    pub fn awards_by_player(&self, player_id: i32) -> Vec<&PlayerAward> {
        let mut awards: Vec<&PlayerAward> = self
            .items()
            .iter()
            .filter(|award| award.player_id == player_id)
            .collect();
        awards.sort_by(|a, b| b.year_awarded.cmp(&a.year_awarded));

        awards
    }
}
