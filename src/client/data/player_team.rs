use crate::{
    client::{error::Error, transport::ApiClient},
    model::player_team::{CreatePlayerTeam, PlayerTeam, UpdatePlayerTeam},
};

pub struct PlayerTeamRepository<'a> {
    client: &'a ApiClient,
}

impl<'a> PlayerTeamRepository<'a> {
    /// Creates a new instance of [`PlayerTeamRepository`]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Current team link of a player, `None` when the player has no current team
    pub async fn get_current_team(&self, player_id: i32) -> Result<Option<PlayerTeam>, Error> {
        self.client
            .get_optional(&format!("/player-teams/player/{}/current-team", player_id))
            .await
    }

    pub async fn create(&self, link: &CreatePlayerTeam) -> Result<PlayerTeam, Error> {
        self.client.post("/player-teams", link).await
    }

    pub async fn update(&self, id: i32, link: &UpdatePlayerTeam) -> Result<PlayerTeam, Error> {
        self.client
            .put(&format!("/player-teams/{}", id), link)
            .await
    }
}
