use crate::{
    client::{
        data::player::PlayerRepository,
        error::Error,
        service::{ensure_unique, CrudService, UpsertService},
        transport::ApiClient,
    },
    model::{api::Page, Player},
};

#[derive(Clone, Copy)]
pub struct PlayerService<'a> {
    client: &'a ApiClient,
}

impl<'a> PlayerService<'a> {
    /// Creates a new instance of [`PlayerService`]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// One page of players along with the backend's pagination metadata
    pub async fn get_page(&self, page: u32, limit: u32) -> Result<Page<Player>, Error> {
        PlayerRepository::new(self.client)
            .get_page(page, limit)
            .await
    }

    pub async fn search_by_name(&self, name: &str) -> Result<Vec<Player>, Error> {
        PlayerRepository::new(self.client).get_by_name(name).await
    }

    pub async fn get_by_team_id(&self, team_id: i32) -> Result<Vec<Player>, Error> {
        PlayerRepository::new(self.client)
            .get_by_team_id(team_id)
            .await
    }
}

impl CrudService for PlayerService<'_> {
    type Entity = Player;

    async fn get_all(&self) -> Result<Vec<Player>, Error> {
        PlayerRepository::new(self.client).get_all().await
    }

    async fn get_by_id(&self, id: i32) -> Result<Player, Error> {
        PlayerRepository::new(self.client).get_by_id(id).await
    }

    async fn create(&self, player: &Player) -> Result<Player, Error> {
        let player_repo = PlayerRepository::new(self.client);

        let existing = player_repo.find_duplicate(player).await?;
        ensure_unique(existing, None, |p| {
            format!(
                "A player named {} from {} already exists",
                p.full_name(),
                p.university
            )
        })?;

        player_repo.create(player).await
    }

    async fn update(&self, id: i32, player: &Player) -> Result<Player, Error> {
        let player_repo = PlayerRepository::new(self.client);

        let existing = player_repo.find_duplicate(player).await?;
        ensure_unique(existing, Some(id), |p| {
            format!(
                "Another player named {} from {} already exists",
                p.full_name(),
                p.university
            )
        })?;

        player_repo.update(id, player).await
    }

    async fn delete(&self, id: i32) -> Result<(), Error> {
        PlayerRepository::new(self.client).delete(id).await
    }
}

impl UpsertService for PlayerService<'_> {}
