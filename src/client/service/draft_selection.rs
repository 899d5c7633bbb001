use chrono::{DateTime, Datelike, NaiveDate, Utc};
use dioxus_logger::tracing;
use serde::Serialize;

use crate::{
    client::{
        data::player_team::PlayerTeamRepository,
        error::Error,
        service::CrudService,
        transport::ApiClient,
        util::draft::{calculate_draft_round, next_september_monday},
    },
    model::{
        player_team::{CreatePlayerTeam, UpdatePlayerTeam},
        DraftSelection,
    },
};

/// Draft pick body written by selections, only the fields that are set are sent
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct DraftPickRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    round: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pick_number: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    draft_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    current_team_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    player_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    used: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    original_team: Option<i32>,
}

/// Records which player a team selected with a draft pick.
///
/// A selection is a draft pick plus the player-team link that makes the selected player a
/// member of the selecting team from the start of the season.
#[derive(Clone, Copy)]
pub struct DraftSelectionService<'a> {
    client: &'a ApiClient,
}

impl<'a> DraftSelectionService<'a> {
    /// Creates a new instance of [`DraftSelectionService`]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Draft picks joined with player and team details
    pub async fn get_all_with_details(&self) -> Result<Vec<DraftSelection>, Error> {
        self.client.get("/draft-picks/with-details").await
    }

    /// Makes `player_id` a current member of `team_id` from the first Monday of September
    async fn link_player(&self, player_id: i32, team_id: i32) -> Result<(), Error> {
        let link = CreatePlayerTeam {
            player_id,
            team_id,
            make_current: true,
            start_date: link_start_date(Utc::now().date_naive()),
        };

        PlayerTeamRepository::new(self.client).create(&link).await?;

        Ok(())
    }

    /// Points the current team link of `player_id` at `team_id`, creating it when missing
    async fn relink_player(&self, player_id: i32, team_id: i32) -> Result<(), Error> {
        let player_team_repo = PlayerTeamRepository::new(self.client);

        match player_team_repo.get_current_team(player_id).await? {
            Some(current) => match current.id {
                Some(link_id) if current.team_id != team_id => {
                    let link = UpdatePlayerTeam {
                        team_id,
                        current_team: true,
                    };
                    player_team_repo.update(link_id, &link).await?;
                }
                Some(_) => (),
                None => self.link_player(player_id, team_id).await?,
            },
            None => self.link_player(player_id, team_id).await?,
        }

        Ok(())
    }
}

impl CrudService for DraftSelectionService<'_> {
    type Entity = DraftSelection;

    async fn get_all(&self) -> Result<Vec<DraftSelection>, Error> {
        self.client.get("/draft-picks").await
    }

    async fn get_by_id(&self, id: i32) -> Result<DraftSelection, Error> {
        self.client.get(&format!("/draft-picks/{}", id)).await
    }

    /// Creates the draft pick of a selection, then links the player to the selecting team
    ///
    /// The round defaults to the one the pick number falls in and the year to the current
    /// year. The link is only created when both player and team are known.
    async fn create(&self, selection: &DraftSelection) -> Result<DraftSelection, Error> {
        let request = DraftPickRequest {
            round: Some(
                selection
                    .draft_round
                    .unwrap_or_else(|| calculate_draft_round(selection.pick_number)),
            ),
            pick_number: Some(selection.pick_number),
            draft_year: Some(selection.draft_year.unwrap_or_else(|| Utc::now().year())),
            current_team_id: selection.team_id,
            player_id: selection.player_id,
            used: Some(true),
            original_team: selection.team_id,
        };

        let created: DraftSelection = self.client.post("/draft-picks", &request).await?;

        if let (Some(player_id), Some(team_id)) = (selection.player_id, selection.team_id) {
            self.link_player(player_id, team_id).await?;
        }

        Ok(created)
    }

    /// Updates the draft pick of a selection and moves the player to the selecting team
    ///
    /// The draft pick update is the outcome of the operation: a failure to update the
    /// player-team link afterwards is logged and otherwise ignored.
    async fn update(&self, id: i32, selection: &DraftSelection) -> Result<DraftSelection, Error> {
        let request = DraftPickRequest {
            round: selection.draft_round,
            pick_number: Some(selection.pick_number).filter(|pick| *pick > 0),
            draft_year: selection.draft_year,
            current_team_id: selection.team_id,
            player_id: selection.player_id,
            used: None,
            original_team: selection.team_id,
        };

        let updated: DraftSelection = self
            .client
            .put(&format!("/draft-picks/{}", id), &request)
            .await?;

        if selection.team_id.is_none() && selection.player_id.is_none() {
            return Ok(updated);
        }

        let player_id = selection.player_id.or(updated.player_id);
        let team_id = selection.team_id.or(updated.team_id);

        if let (Some(player_id), Some(team_id)) = (player_id, team_id) {
            if let Err(err) = self.relink_player(player_id, team_id).await {
                tracing::error!(
                    "Failed to update team of player {} for draft pick {}: {}",
                    player_id,
                    id,
                    err
                );
            }
        }

        Ok(updated)
    }

    async fn delete(&self, id: i32) -> Result<(), Error> {
        self.client.delete(&format!("/draft-picks/{}", id)).await
    }
}

/// Start of the season drafted players join their team, midnight UTC
fn link_start_date(today: NaiveDate) -> DateTime<Utc> {
    next_september_monday(today)
        .and_then(|monday| monday.and_hms_opt(0, 0, 0))
        .map(|start| start.and_utc())
        .unwrap_or_else(Utc::now)
}
