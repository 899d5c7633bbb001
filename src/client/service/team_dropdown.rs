use std::time::{Duration, Instant};

use dioxus_logger::tracing;

use crate::{
    client::{
        error::Error,
        service::{team::TeamService, CrudService},
        transport::ApiClient,
    },
    model::Team,
};

/// Time a fetched team list stays valid
pub const TEAM_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Country assumed for teams that don't record one
const DEFAULT_COUNTRY: &str = "USA";

/// Trimmed down team used to populate team pickers
#[derive(Clone, Debug, PartialEq)]
pub struct TeamDropdownItem {
    pub id: i32,
    pub name: String,
    pub stadium: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub conference: String,
    pub division: String,
}

impl TeamDropdownItem {
    /// Dropdown item of a stored team, `None` for a team without identifier
    fn from_team(team: Team) -> Option<Self> {
        Some(Self {
            id: team.id?,
            name: team.name,
            stadium: team.stadium,
            city: team.city,
            state: team.state,
            country: team
                .country
                .unwrap_or_else(|| DEFAULT_COUNTRY.to_string()),
            conference: team.conference,
            division: team.division,
        })
    }
}

/// Team list for pickers, cached for [`TEAM_CACHE_TTL`]
pub struct TeamDropdownService<'a> {
    client: &'a ApiClient,
    cache: Vec<TeamDropdownItem>,
    fetched_at: Option<Instant>,
    ttl: Duration,
}

impl<'a> TeamDropdownService<'a> {
    /// Creates a new instance of [`TeamDropdownService`]
    pub fn new(client: &'a ApiClient) -> Self {
        Self::with_ttl(client, TEAM_CACHE_TTL)
    }

    pub fn with_ttl(client: &'a ApiClient, ttl: Duration) -> Self {
        Self {
            client,
            cache: Vec::new(),
            fetched_at: None,
            ttl,
        }
    }

    fn is_stale(&self) -> bool {
        match self.fetched_at {
            Some(fetched_at) => self.cache.is_empty() || fetched_at.elapsed() > self.ttl,
            None => true,
        }
    }

    /// All teams, fetched again once the cache is empty or expired
    pub async fn get_all_teams(&mut self) -> Result<Vec<TeamDropdownItem>, Error> {
        if self.is_stale() {
            let teams = TeamService::new(self.client)
                .get_all()
                .await
                .inspect_err(|err| {
                    tracing::error!("Failed to fetch teams for dropdown: {}", err)
                })?;

            self.cache = teams
                .into_iter()
                .filter_map(TeamDropdownItem::from_team)
                .collect();
            self.fetched_at = Some(Instant::now());
        }

        Ok(self.cache.clone())
    }

    /// All teams other than `team_id`, used to pick an opponent
    pub async fn get_teams_except(&mut self, team_id: i32) -> Result<Vec<TeamDropdownItem>, Error> {
        let mut teams = self.get_all_teams().await?;
        teams.retain(|team| team.id != team_id);

        Ok(teams)
    }

    /// Looks a team up in the cache first, then fetches it and adds it to the cache
    ///
    /// Returns `None` when the fetch fails.
    pub async fn get_team_by_id(&mut self, team_id: i32) -> Option<TeamDropdownItem> {
        if let Some(team) = self.cache.iter().find(|team| team.id == team_id) {
            return Some(team.clone());
        }

        let team = match TeamService::new(self.client).get_by_id(team_id).await {
            Ok(team) => team,
            Err(err) => {
                tracing::error!("Failed to fetch team {} for dropdown: {}", team_id, err);

                return None;
            }
        };

        let item = TeamDropdownItem::from_team(team)?;
        if !self.cache.iter().any(|team| team.id == item.id) {
            self.cache.push(item.clone());
        }

        Some(item)
    }

    /// Last word of a division name, "AFC East" becomes "East"
    pub fn division_short_name(division: &str) -> &str {
        division.split(' ').next_back().unwrap_or(division)
    }
}
