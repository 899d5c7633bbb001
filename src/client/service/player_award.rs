use crate::{
    client::{
        data::player_award::PlayerAwardRepository,
        error::Error,
        service::{ensure_unique, CrudService, UpsertService},
        transport::ApiClient,
    },
    model::PlayerAward,
};

#[derive(Clone, Copy)]
pub struct PlayerAwardService<'a> {
    client: &'a ApiClient,
}

impl<'a> PlayerAwardService<'a> {
    /// Creates a new instance of [`PlayerAwardService`]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_by_player_id(&self, player_id: i32) -> Result<Vec<PlayerAward>, Error> {
        PlayerAwardRepository::new(self.client)
            .get_by_player_id(player_id)
            .await
    }
}

impl CrudService for PlayerAwardService<'_> {
    type Entity = PlayerAward;

    async fn get_all(&self) -> Result<Vec<PlayerAward>, Error> {
        PlayerAwardRepository::new(self.client).get_all().await
    }

    async fn get_by_id(&self, id: i32) -> Result<PlayerAward, Error> {
        PlayerAwardRepository::new(self.client).get_by_id(id).await
    }

    async fn create(&self, award: &PlayerAward) -> Result<PlayerAward, Error> {
        let award_repo = PlayerAwardRepository::new(self.client);

        let existing = award_repo.find_duplicate(award).await?;
        ensure_unique(existing, None, |_| {
            format!(
                "Player already has the \"{}\" award for {}",
                award.name, award.year_awarded
            )
        })?;

        award_repo.create(award).await
    }

    async fn update(&self, id: i32, award: &PlayerAward) -> Result<PlayerAward, Error> {
        let award_repo = PlayerAwardRepository::new(self.client);

        let existing = award_repo.find_duplicate(award).await?;
        ensure_unique(existing, Some(id), |_| {
            format!(
                "Player already has another \"{}\" award for {}",
                award.name, award.year_awarded
            )
        })?;

        award_repo.update(id, award).await
    }

    async fn delete(&self, id: i32) -> Result<(), Error> {
        PlayerAwardRepository::new(self.client).delete(id).await
    }
}

impl UpsertService for PlayerAwardService<'_> {}
