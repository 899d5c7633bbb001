use crate::{
    client::{error::Error, transport::ApiClient},
    model::{NaturalKey, Player, Team},
};

pub struct TeamRepository<'a> {
    client: &'a ApiClient,
}

impl<'a> TeamRepository<'a> {
    /// Creates a new instance of [`TeamRepository`]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all(&self) -> Result<Vec<Team>, Error> {
        self.client.get("/teams").await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Team, Error> {
        self.client.get(&format!("/teams/{}", id)).await
    }

    /// Teams whose name matches `name` according to the backend's filter
    pub async fn get_by_name(&self, name: &str) -> Result<Vec<Team>, Error> {
        self.client
            .get_with_query("/teams/filter", &[("name", name.to_string())])
            .await
    }

    pub async fn get_team_players(&self, team_id: i32) -> Result<Vec<Player>, Error> {
        self.client.get(&format!("/teams/{}/players", team_id)).await
    }

    /// Finds a team with the same name, ignoring case
    ///
    /// Fetches every team, the backend has no lookup by exact name.
    pub async fn find_duplicate(&self, team: &Team) -> Result<Option<Team>, Error> {
        let key = team.natural_key();
        let teams = self.get_all().await?;

        Ok(teams.into_iter().find(|t| t.natural_key() == key))
    }

    pub async fn create(&self, team: &Team) -> Result<Team, Error> {
        self.client.post("/teams", team).await
    }

    pub async fn update(&self, id: i32, team: &Team) -> Result<Team, Error> {
        self.client.put(&format!("/teams/{}", id), team).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        self.client.delete(&format!("/teams/{}", id)).await
    }
}
