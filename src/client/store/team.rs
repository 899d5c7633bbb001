use crate::{
    client::{error::Error, service::team::TeamService, store::EntityStore},
    model::Team,
};

pub type TeamStore<'a> = EntityStore<TeamService<'a>>;

impl TeamStore<'_> {
    /// Fetches the teams matching `name` and adds them to the cache
    pub async fn fetch_by_name(&mut self, name: &str) -> Result<Vec<Team>, Error> {
        let service = self.service;
        self.fetch_matching(service.get_by_name(name)).await
    }

    /// Listed team named `name`, ignoring case
    pub fn get_by_name(&self, name: &str) -> Option<&Team> {
        self.items()
            .iter()
            .find(|team| team.name.eq_ignore_ascii_case(name))
    }

    /// Listed teams of a conference, e.g. `NFC`
    pub fn teams_by_conference(&self, conference: &str) -> Vec<&Team> {
        self.items()
            .iter()
            .filter(|team| team.conference.eq_ignore_ascii_case(conference))
            .collect()
    }
}
