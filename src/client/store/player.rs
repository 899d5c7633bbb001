use crate::{
    client::{error::Error, service::player::PlayerService, store::EntityStore},
    model::{api::PaginationMeta, Player, Position},
};

pub type PlayerStore<'a> = EntityStore<PlayerService<'a>>;

impl PlayerStore<'_> {
    /// Replaces the cache with one page of players
    ///
    /// # Returns
    /// - `Ok(Some(PaginationMeta))` - Page loaded, backend reported pagination
    /// - `Ok(None)` - Page loaded, backend answered without pagination
    /// - `Err(Error)` - Request failed, the cache is left as is
    pub async fn fetch_page(
        &mut self,
        page: u32,
        limit: u32,
    ) -> Result<Option<PaginationMeta>, Error> {
        self.state.begin();
        let result = self.service.get_page(page, limit).await;
        let page = self.state.settle("fetch", result)?;

        self.state.replace_all(page.data);

        Ok(page.pagination)
    }

    /// Fetches the players matching `name` and adds them to the cache
    pub async fn search(&mut self, name: &str) -> Result<Vec<Player>, Error> {
        let service = self.service;
        self.fetch_matching(service.search_by_name(name)).await
    }

    /// Fetches the roster of a team and adds it to the cache
    pub async fn fetch_by_team(&mut self, team_id: i32) -> Result<Vec<Player>, Error> {
        let service = self.service;
        self.fetch_matching(service.get_by_team_id(team_id)).await
    }

    pub fn players_by_team(&self, team_id: i32) -> Vec<&Player> {
        self.items()
            .iter()
            .filter(|player| player.team_id == Some(team_id))
            .collect()
    }

    pub fn players_by_position(&self, position: &Position) -> Vec<&Player> {
        self.items()
            .iter()
            .filter(|player| player.position == *position)
            .collect()
    }
}
