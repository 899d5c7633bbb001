use crate::{
    client::{
        data::team::TeamRepository,
        error::Error,
        service::{ensure_unique, CrudService, UpsertService},
        transport::ApiClient,
    },
    model::{Player, Team},
};

#[derive(Clone, Copy)]
pub struct TeamService<'a> {
    client: &'a ApiClient,
}

impl<'a> TeamService<'a> {
    /// Creates a new instance of [`TeamService`]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Vec<Team>, Error> {
        TeamRepository::new(self.client).get_by_name(name).await
    }

    pub async fn get_team_players(&self, team_id: i32) -> Result<Vec<Player>, Error> {
        TeamRepository::new(self.client)
            .get_team_players(team_id)
            .await
    }
}

impl CrudService for TeamService<'_> {
    type Entity = Team;

    async fn get_all(&self) -> Result<Vec<Team>, Error> {
        TeamRepository::new(self.client).get_all().await
    }

    async fn get_by_id(&self, id: i32) -> Result<Team, Error> {
        TeamRepository::new(self.client).get_by_id(id).await
    }

    async fn create(&self, team: &Team) -> Result<Team, Error> {
        let team_repo = TeamRepository::new(self.client);

        let existing = team_repo.find_duplicate(team).await?;
        ensure_unique(existing, None, |t| {
            format!("A team named \"{}\" already exists", t.name)
        })?;

        team_repo.create(team).await
    }

    async fn update(&self, id: i32, team: &Team) -> Result<Team, Error> {
        let team_repo = TeamRepository::new(self.client);

        let existing = team_repo.find_duplicate(team).await?;
        ensure_unique(existing, Some(id), |t| {
            format!("Another team named \"{}\" already exists", t.name)
        })?;

        team_repo.update(id, team).await
    }

    async fn delete(&self, id: i32) -> Result<(), Error> {
        TeamRepository::new(self.client).delete(id).await
    }
}

impl UpsertService for TeamService<'_> {}
