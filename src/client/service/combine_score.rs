use crate::{
    client::{
        data::combine_score::CombineScoreRepository,
        error::Error,
        service::{ensure_unique, CrudService, UpsertService},
        transport::ApiClient,
    },
    model::CombineScore,
};

#[derive(Clone, Copy)]
pub struct CombineScoreService<'a> {
    client: &'a ApiClient,
}

impl<'a> CombineScoreService<'a> {
    /// Creates a new instance of [`CombineScoreService`]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_by_player_id(&self, player_id: i32) -> Result<Option<CombineScore>, Error> {
        CombineScoreRepository::new(self.client)
            .get_by_player_id(player_id)
            .await
    }
}

impl CrudService for CombineScoreService<'_> {
    type Entity = CombineScore;

    async fn get_all(&self) -> Result<Vec<CombineScore>, Error> {
        CombineScoreRepository::new(self.client).get_all().await
    }

    async fn get_by_id(&self, id: i32) -> Result<CombineScore, Error> {
        CombineScoreRepository::new(self.client).get_by_id(id).await
    }

    async fn create(&self, score: &CombineScore) -> Result<CombineScore, Error> {
        let score_repo = CombineScoreRepository::new(self.client);

        let existing = score_repo.find_duplicate_by_player(score.player_id).await?;
        ensure_unique(existing, None, |_| {
            "This player already has combine scores recorded".to_string()
        })?;

        score_repo.create(score).await
    }

    async fn update(&self, id: i32, score: &CombineScore) -> Result<CombineScore, Error> {
        let score_repo = CombineScoreRepository::new(self.client);

        let existing = score_repo.find_duplicate_by_player(score.player_id).await?;
        ensure_unique(existing, Some(id), |_| {
            "This player already has other combine scores recorded".to_string()
        })?;

        score_repo.update(id, score).await
    }

    async fn delete(&self, id: i32) -> Result<(), Error> {
        CombineScoreRepository::new(self.client).delete(id).await
    }
}

impl UpsertService for CombineScoreService<'_> {}
