use crate::{
    client::{error::Error, transport::ApiClient},
    model::{NaturalKey, PlayerAward},
};

pub struct PlayerAwardRepository<'a> {
    client: &'a ApiClient,
}

impl<'a> PlayerAwardRepository<'a> {
    /// Creates a new instance of [`PlayerAwardRepository`]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all(&self) -> Result<Vec<PlayerAward>, Error> {
        self.client.get("/player-awards").await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<PlayerAward, Error> {
        self.client.get(&format!("/player-awards/{}", id)).await
    }

    pub async fn get_by_player_id(&self, player_id: i32) -> Result<Vec<PlayerAward>, Error> {
        self.client
            .get(&format!("/players/{}/awards", player_id))
            .await
    }

    /// Finds an award of the same player with the same name and year, name ignoring case
    ///
    /// Only the awards of `award.player_id` are fetched.
    pub async fn find_duplicate(&self, award: &PlayerAward) -> Result<Option<PlayerAward>, Error> {
        let key = award.natural_key();
        let awards = self.get_by_player_id(award.player_id).await?;

        Ok(awards.into_iter().find(|a| a.natural_key() == key))
    }

    pub async fn create(&self, award: &PlayerAward) -> Result<PlayerAward, Error> {
        self.client.post("/player-awards", award).await
    }

    pub async fn update(&self, id: i32, award: &PlayerAward) -> Result<PlayerAward, Error> {
        self.client
            .put(&format!("/player-awards/{}", id), award)
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        self.client.delete(&format!("/player-awards/{}", id)).await
    }
}
