use crate::{
    client::{error::Error, transport::ApiClient},
    model::CombineScore,
};

pub struct CombineScoreRepository<'a> {
    client: &'a ApiClient,
}

impl<'a> CombineScoreRepository<'a> {
    /// Creates a new instance of [`CombineScoreRepository`]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all(&self) -> Result<Vec<CombineScore>, Error> {
        self.client.get("/combine-scores").await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<CombineScore, Error> {
        self.client.get(&format!("/combine-scores/{}", id)).await
    }

    /// Combine score recorded for a player
    ///
    /// # Returns
    /// - `Ok(Some(CombineScore))` - Player has a combine score
    /// - `Ok(None)` - Backend answered 404, the player has none
    /// - `Err(Error)` - Request failed for any other reason
    pub async fn get_by_player_id(&self, player_id: i32) -> Result<Option<CombineScore>, Error> {
        self.client
            .get_optional(&format!("/combine-scores/player/{}", player_id))
            .await
    }

    /// A player has at most one combine score, any score of the same player is a duplicate
    pub async fn find_duplicate_by_player(
        &self,
        player_id: i32,
    ) -> Result<Option<CombineScore>, Error> {
        self.get_by_player_id(player_id).await
    }

    pub async fn create(&self, score: &CombineScore) -> Result<CombineScore, Error> {
        self.client.post("/combine-scores", score).await
    }

    pub async fn update(&self, id: i32, score: &CombineScore) -> Result<CombineScore, Error> {
        self.client
            .put(&format!("/combine-scores/{}", id), score)
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        self.client.delete(&format!("/combine-scores/{}", id)).await
    }
}
