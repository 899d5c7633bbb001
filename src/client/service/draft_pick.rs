use crate::{
    client::{
        data::draft_pick::DraftPickRepository,
        error::Error,
        service::{ensure_unique, CrudService, UpsertService},
        transport::ApiClient,
    },
    model::DraftPick,
};

#[derive(Clone, Copy)]
pub struct DraftPickService<'a> {
    client: &'a ApiClient,
}

impl<'a> DraftPickService<'a> {
    /// Creates a new instance of [`DraftPickService`]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_by_team_id(&self, team_id: i32) -> Result<Vec<DraftPick>, Error> {
        DraftPickRepository::new(self.client)
            .get_by_team_id(team_id)
            .await
    }

    pub async fn get_by_year(&self, draft_year: i32) -> Result<Vec<DraftPick>, Error> {
        DraftPickRepository::new(self.client)
            .get_by_year(draft_year)
            .await
    }

    pub async fn get_by_player_id(&self, player_id: i32) -> Result<Option<DraftPick>, Error> {
        DraftPickRepository::new(self.client)
            .get_by_player_id(player_id)
            .await
    }

    /// Checks both uniqueness constraints of a pick, player first then draft slot
    ///
    /// # Arguments
    /// - `pick` - Candidate pick
    /// - `own_id` - Identifier of the pick being updated, `None` when creating
    async fn ensure_unique_pick(&self, pick: &DraftPick, own_id: Option<i32>) -> Result<(), Error> {
        let pick_repo = DraftPickRepository::new(self.client);

        if let Some(player_id) = pick.player_id {
            let existing = pick_repo.find_duplicate_by_player(player_id).await?;
            ensure_unique(existing, own_id, |p| match own_id {
                None => format!(
                    "This player is already associated with draft pick #{} in round {} of the {} draft",
                    p.pick_number, p.round, p.draft_year
                ),
                Some(_) => "This player is already associated with another draft pick".to_string(),
            })?;
        }

        let existing = pick_repo.find_duplicate_by_position(pick).await?;
        ensure_unique(existing, own_id, |_| match own_id {
            None => format!(
                "Pick #{} in round {} of the {} draft already exists",
                pick.pick_number, pick.round, pick.draft_year
            ),
            Some(_) => "Another pick with this position already exists in the draft".to_string(),
        })?;

        Ok(())
    }
}

impl CrudService for DraftPickService<'_> {
    type Entity = DraftPick;

    async fn get_all(&self) -> Result<Vec<DraftPick>, Error> {
        DraftPickRepository::new(self.client).get_all().await
    }

    async fn get_by_id(&self, id: i32) -> Result<DraftPick, Error> {
        DraftPickRepository::new(self.client).get_by_id(id).await
    }

    async fn create(&self, pick: &DraftPick) -> Result<DraftPick, Error> {
        self.ensure_unique_pick(pick, None).await?;

        DraftPickRepository::new(self.client).create(pick).await
    }

    async fn update(&self, id: i32, pick: &DraftPick) -> Result<DraftPick, Error> {
        self.ensure_unique_pick(pick, Some(id)).await?;

        DraftPickRepository::new(self.client).update(id, pick).await
    }

    async fn delete(&self, id: i32) -> Result<(), Error> {
        DraftPickRepository::new(self.client).delete(id).await
    }
}

impl UpsertService for DraftPickService<'_> {}
