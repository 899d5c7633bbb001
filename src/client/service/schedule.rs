use dioxus_logger::tracing;

use crate::{
    client::{
        data::schedule::ScheduleRepository,
        error::Error,
        service::{ensure_unique, CrudService, UpsertService},
        transport::ApiClient,
    },
    model::Schedule,
};

#[derive(Clone, Copy)]
pub struct ScheduleService<'a> {
    client: &'a ApiClient,
}

impl<'a> ScheduleService<'a> {
    /// Creates a new instance of [`ScheduleService`]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_by_team_id(&self, team_id: i32) -> Result<Vec<Schedule>, Error> {
        ScheduleRepository::new(self.client)
            .get_by_team_id(team_id)
            .await
    }

    pub async fn get_by_season_year(&self, season_year: i32) -> Result<Vec<Schedule>, Error> {
        ScheduleRepository::new(self.client)
            .get_by_season_year(season_year)
            .await
    }

    /// Schedule already recorded for the candidate's team and season, if any
    ///
    /// A schedule without a team of its own (no `team_id` and not an away game with an
    /// `opp_team_id`) has no natural key to collide on.
    async fn find_duplicate(&self, schedule: &Schedule) -> Result<Option<Schedule>, Error> {
        let Some(team_id) = schedule.effective_team_id() else {
            tracing::debug!(
                "Schedule for season {} has no team, skipping duplicate check",
                schedule.season_year
            );

            return Ok(None);
        };

        ScheduleRepository::new(self.client)
            .find_duplicate(team_id, schedule.season_year)
            .await
    }
}

impl CrudService for ScheduleService<'_> {
    type Entity = Schedule;

    async fn get_all(&self) -> Result<Vec<Schedule>, Error> {
        ScheduleRepository::new(self.client).get_all().await
    }

    async fn get_by_id(&self, id: i32) -> Result<Schedule, Error> {
        ScheduleRepository::new(self.client).get_by_id(id).await
    }

    async fn create(&self, schedule: &Schedule) -> Result<Schedule, Error> {
        let existing = self.find_duplicate(schedule).await?;
        ensure_unique(existing, None, |_| {
            format!(
                "A schedule for this team and season ({}) already exists",
                schedule.season_year
            )
        })?;

        ScheduleRepository::new(self.client).create(schedule).await
    }

    async fn update(&self, id: i32, schedule: &Schedule) -> Result<Schedule, Error> {
        let existing = self.find_duplicate(schedule).await?;
        ensure_unique(existing, Some(id), |_| {
            format!(
                "Another schedule for this team and season ({}) already exists",
                schedule.season_year
            )
        })?;

        ScheduleRepository::new(self.client)
            .update(id, schedule)
            .await
    }

    async fn delete(&self, id: i32) -> Result<(), Error> {
        ScheduleRepository::new(self.client).delete(id).await
    }
}

impl UpsertService for ScheduleService<'_> {}
