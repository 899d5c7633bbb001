use crate::{
    client::{error::Error, service::draft_pick::DraftPickService, store::EntityStore},
    model::DraftPick,
};

pub type DraftPickStore<'a> = EntityStore<DraftPickService<'a>>;

impl DraftPickStore<'_> {
    /// Fetches the picks of a draft and adds them to the cache
    pub async fn fetch_by_year(&mut self, draft_year: i32) -> Result<Vec<DraftPick>, Error> {
        let service = self.service;
        self.fetch_matching(service.get_by_year(draft_year)).await
    }

    /// Fetches the picks owned by a team and adds them to the cache
    pub async fn fetch_by_team(&mut self, team_id: i32) -> Result<Vec<DraftPick>, Error> {
        let service = self.service;
        self.fetch_matching(service.get_by_team_id(team_id)).await
    }

    /// Listed picks of a draft in selection order
    pub fn picks_by_year(&self, draft_year: i32) -> Vec<&DraftPick> {
        self.picks_in_order(|pick| pick.draft_year == draft_year)
    }

    pub fn picks_by_team(&self, team_id: i32) -> Vec<&DraftPick> {
        self.picks_in_order(|pick| pick.team_id == team_id)
    }

    pub fn picks_by_round(&self, draft_year: i32, round: i32) -> Vec<&DraftPick> {
        self.picks_in_order(|pick| pick.draft_year == draft_year && pick.round == round)
    }

    /// Listed pick that selected `player_id`
    pub fn pick_by_player(&self, player_id: i32) -> Option<&DraftPick> {
        self.items()
            .iter()
            .find(|pick| pick.player_id == Some(player_id))
    }

    fn picks_in_order<P: Fn(&DraftPick) -> bool>(&self, predicate: P) -> Vec<&DraftPick> {
        let mut picks: Vec<&DraftPick> = self.items().iter().filter(|p| predicate(p)).collect();
        picks.sort_by_key(|pick| (pick.draft_year, pick.round, pick.pick_number));

        picks
    }
}
