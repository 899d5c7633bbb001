use crate::{
    client::{error::Error, service::schedule::ScheduleService, store::EntityStore},
    model::Schedule,
};

pub type ScheduleStore<'a> = EntityStore<ScheduleService<'a>>;

impl ScheduleStore<'_> {
    /// Fetches the schedules of a team and adds them to the cache
    pub async fn fetch_by_team(&mut self, team_id: i32) -> Result<Vec<Schedule>, Error> {
        let service = self.service;
        self.fetch_matching(service.get_by_team_id(team_id)).await
    }

    /// Fetches the schedules of a season and adds them to the cache
    pub async fn fetch_by_season(&mut self, season_year: i32) -> Result<Vec<Schedule>, Error> {
        let service = self.service;
        self.fetch_matching(service.get_by_season_year(season_year))
            .await
    }

    /// Listed schedules of a team, away games without team count for the opponent
    pub fn schedules_by_team(&self, team_id: i32) -> Vec<&Schedule> {
        self.items()
            .iter()
            .filter(|schedule| schedule.effective_team_id() == Some(team_id))
            .collect()
    }

    pub fn schedules_by_season(&self, season_year: i32) -> Vec<&Schedule> {
        self.items()
            .iter()
            .filter(|schedule| schedule.season_year == season_year)
            .collect()
    }
}
