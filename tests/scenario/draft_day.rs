use draftboard::{
    client::{error::Error, AppState},
    model::{DraftSelection, Position},
};
use draftboard_test_utils::prelude::*;
use serde_json::json;

use crate::setup::api_client;

/// Expect a team to select a player and the draft board to show the pick
#[tokio::test]
async fn team_selects_player_on_draft_day() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let client = api_client(&test)?;

    let teams = test
        .server
        .mock("GET", "/teams")
        .match_header("authorization", "Bearer test-token")
        .with_header("content-type", "application/json")
        .with_body(
            factory::envelope(
                json!([factory::team(1, "Eagles"), factory::team(2, "Giants")]),
                None,
            )
            .to_string(),
        )
        .expect(2)
        .create();
    let roster = test.with_get_endpoint(
        "/teams/2/players",
        json!([factory::player_on_team(7, "Nabers", 2, "WR")]),
        1,
    );
    let pick = test.with_create_endpoint_matching(
        "/draft-picks",
        json!({ "round": 1, "pickNumber": 6, "currentTeamId": 2, "playerId": 7 }),
        factory::draft_selection(20, 6, 7, 2),
        1,
    );
    let link = test.with_create_endpoint_matching(
        "/player-teams",
        json!({ "playerId": 7, "teamId": 2, "makeCurrent": true }),
        factory::player_team(30, 7, 2),
        1,
    );
    let board = test.with_get_endpoint(
        "/draft-picks/with-details",
        json!([factory::draft_selection(20, 6, 7, 2)]),
        1,
    );

    let mut state = AppState::new(&client);

    state.teams.fetch_all(false).await?;
    assert_eq!(state.teams.items().len(), 2);

    // The dropdown keeps its own copy of the teams
    let opponents = state.team_dropdown.get_teams_except(1).await?;
    assert_eq!(opponents.len(), 1);
    assert_eq!(opponents[0].name, "Giants");

    state.players.fetch_by_team(2).await?;
    let receivers = state.players.players_by_position(&Position::Wr);
    assert_eq!(receivers.len(), 1);
    let player_id = receivers[0].id;

    let selection = DraftSelection {
        draft_year: Some(2024),
        pick_number: 6,
        player_id,
        team_id: Some(2),
        ..Default::default()
    };
    state.draft_selections.create(&selection).await?;
    assert_eq!(state.draft_selections.current().and_then(|s| s.id), Some(20));

    state.draft_selections.fetch_with_details().await?;
    assert_eq!(state.draft_selections.selections_by_team(2).len(), 1);

    teams.assert();
    roster.assert();
    pick.assert();
    link.assert();
    board.assert();

    Ok(())
}
