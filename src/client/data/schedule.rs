use crate::{
    client::{error::Error, transport::ApiClient},
    model::Schedule,
};

pub struct ScheduleRepository<'a> {
    client: &'a ApiClient,
}

impl<'a> ScheduleRepository<'a> {
    /// Creates a new instance of [`ScheduleRepository`]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all(&self) -> Result<Vec<Schedule>, Error> {
        self.client.get("/schedules").await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Schedule, Error> {
        self.client.get(&format!("/schedules/{}", id)).await
    }

    pub async fn get_by_team_id(&self, team_id: i32) -> Result<Vec<Schedule>, Error> {
        self.client
            .get(&format!("/schedules/team/{}", team_id))
            .await
    }

    pub async fn get_by_season_year(&self, season_year: i32) -> Result<Vec<Schedule>, Error> {
        self.client
            .get(&format!("/schedules/year/{}", season_year))
            .await
    }

    /// Finds the schedule of `team_id` for `season_year`
    ///
    /// Only the schedules of `team_id` are fetched.
    pub async fn find_duplicate(
        &self,
        team_id: i32,
        season_year: i32,
    ) -> Result<Option<Schedule>, Error> {
        let schedules = self.get_by_team_id(team_id).await?;

        Ok(schedules.into_iter().find(|s| s.season_year == season_year))
    }

    pub async fn create(&self, schedule: &Schedule) -> Result<Schedule, Error> {
        self.client.post("/schedules", schedule).await
    }

    pub async fn update(&self, id: i32, schedule: &Schedule) -> Result<Schedule, Error> {
        self.client
            .put(&format!("/schedules/{}", id), schedule)
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        self.client.delete(&format!("/schedules/{}", id)).await
    }
}
