use crate::{
    client::{error::Error, transport::ApiClient},
    model::{DraftPick, NaturalKey},
};

pub struct DraftPickRepository<'a> {
    client: &'a ApiClient,
}

impl<'a> DraftPickRepository<'a> {
    /// Creates a new instance of [`DraftPickRepository`]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all(&self) -> Result<Vec<DraftPick>, Error> {
        self.client.get("/draft-picks").await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<DraftPick, Error> {
        self.client.get(&format!("/draft-picks/{}", id)).await
    }

    pub async fn get_by_team_id(&self, team_id: i32) -> Result<Vec<DraftPick>, Error> {
        self.client
            .get(&format!("/teams/{}/draft-picks", team_id))
            .await
    }

    pub async fn get_by_year(&self, draft_year: i32) -> Result<Vec<DraftPick>, Error> {
        self.client
            .get(&format!("/draft-picks/year/{}", draft_year))
            .await
    }

    /// Pick a player was selected with, `None` when the backend answers 404
    pub async fn get_by_player_id(&self, player_id: i32) -> Result<Option<DraftPick>, Error> {
        self.client
            .get_optional(&format!("/players/{}/draft-pick", player_id))
            .await
    }

    /// A player can only be selected with one pick
    pub async fn find_duplicate_by_player(
        &self,
        player_id: i32,
    ) -> Result<Option<DraftPick>, Error> {
        self.get_by_player_id(player_id).await
    }

    /// Finds the pick holding the same draft slot `(draft_year, round, pick_number)`
    ///
    /// Fetches every pick, the backend has no lookup by slot.
    pub async fn find_duplicate_by_position(
        &self,
        pick: &DraftPick,
    ) -> Result<Option<DraftPick>, Error> {
        let key = pick.natural_key();
        let picks = self.get_all().await?;

        Ok(picks.into_iter().find(|p| p.natural_key() == key))
    }

    pub async fn create(&self, pick: &DraftPick) -> Result<DraftPick, Error> {
        self.client.post("/draft-picks", pick).await
    }

    pub async fn update(&self, id: i32, pick: &DraftPick) -> Result<DraftPick, Error> {
        self.client.put(&format!("/draft-picks/{}", id), pick).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        self.client.delete(&format!("/draft-picks/{}", id)).await
    }
}
