use crate::{
    client::{error::Error, transport::ApiClient},
    model::{api::Page, NaturalKey, Player},
};

pub struct PlayerRepository<'a> {
    client: &'a ApiClient,
}

impl<'a> PlayerRepository<'a> {
    /// Creates a new instance of [`PlayerRepository`]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all(&self) -> Result<Vec<Player>, Error> {
        self.client.get("/players").await
    }

    /// One page of players, `page` is 1-based
    pub async fn get_page(&self, page: u32, limit: u32) -> Result<Page<Player>, Error> {
        self.client
            .get_page(
                "/players",
                &[("page", page.to_string()), ("limit", limit.to_string())],
            )
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Player, Error> {
        self.client.get(&format!("/players/{}", id)).await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Vec<Player>, Error> {
        self.client
            .get_with_query("/players/filter", &[("name", name.to_string())])
            .await
    }

    pub async fn get_by_team_id(&self, team_id: i32) -> Result<Vec<Player>, Error> {
        self.client.get(&format!("/teams/{}/players", team_id)).await
    }

    /// Finds a player with the same first name, last name and university, ignoring case
    ///
    /// Fetches every player, the backend has no lookup by these fields.
    pub async fn find_duplicate(&self, player: &Player) -> Result<Option<Player>, Error> {
        let key = player.natural_key();
        let players = self.get_all().await?;

        Ok(players.into_iter().find(|p| p.natural_key() == key))
    }

    pub async fn create(&self, player: &Player) -> Result<Player, Error> {
        self.client.post("/players", player).await
    }

    pub async fn update(&self, id: i32, player: &Player) -> Result<Player, Error> {
        self.client.put(&format!("/players/{}", id), player).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        self.client.delete(&format!("/players/{}", id)).await
    }
}
