use crate::{
    client::service::draft_selection::DraftSelectionService, model::DraftSelection,
};

use super::*;

/// Expect the round to default from the pick number and the player to join the team
#[tokio::test]
async fn create_records_pick_and_links_player() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let client = api_client(&test)?;

    let pick = test.with_create_endpoint_matching(
        "/draft-picks",
        json!({
            "round": 2,
            "pickNumber": 40,
            "draftYear": 2024,
            "currentTeamId": 5,
            "playerId": 10,
            "used": true,
            "originalTeam": 5
        }),
        factory::draft_selection(1, 40, 10, 5),
        1,
    );
    let link = test.with_create_endpoint_matching(
        "/player-teams",
        json!({ "playerId": 10, "teamId": 5, "makeCurrent": true }),
        factory::player_team(8, 10, 5),
        1,
    );

    let selection = DraftSelection {
        draft_year: Some(2024),
        pick_number: 40,
        player_id: Some(10),
        team_id: Some(5),
        ..Default::default()
    };
    let created = DraftSelectionService::new(&client).create(&selection).await?;

    assert_eq!(created.id, Some(1));
    assert_eq!(created.draft_round, Some(2));
    pick.assert();
    link.assert();

    Ok(())
}

/// Expect no link without a selected player
#[tokio::test]
async fn create_without_player_skips_link() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let client = api_client(&test)?;

    let pick = test.with_create_endpoint(
        "/draft-picks",
        json!({ "id": 2, "draftYear": 2024, "round": 1, "pickNumber": 4, "currentTeamId": 5 }),
        1,
    );
    let link = test.with_forbidden_call("POST", "/player-teams");

    let selection = DraftSelection {
        draft_year: Some(2024),
        pick_number: 4,
        team_id: Some(5),
        ..Default::default()
    };
    let created = DraftSelectionService::new(&client).create(&selection).await?;

    assert_eq!(created.team_id, Some(5));
    pick.assert();
    link.assert();

    Ok(())
}

/// Expect an update to move the player's current link to the selecting team
#[tokio::test]
async fn update_moves_player_to_selecting_team() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let client = api_client(&test)?;

    let pick = test.with_update_endpoint("/draft-picks/1", factory::draft_selection(1, 3, 10, 5), 1);
    let current = test.with_get_endpoint(
        "/player-teams/player/10/current-team",
        factory::player_team(8, 10, 4),
        1,
    );
    let relink = test.with_update_endpoint("/player-teams/8", factory::player_team(8, 10, 5), 1);

    let selection = DraftSelection {
        pick_number: 3,
        team_id: Some(5),
        ..Default::default()
    };
    DraftSelectionService::new(&client)
        .update(1, &selection)
        .await?;

    pick.assert();
    current.assert();
    relink.assert();

    Ok(())
}

/// Expect a player already on the selecting team to be left alone
#[tokio::test]
async fn update_keeps_link_to_same_team() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let client = api_client(&test)?;

    let pick = test.with_update_endpoint("/draft-picks/1", factory::draft_selection(1, 3, 10, 5), 1);
    let current = test.with_get_endpoint(
        "/player-teams/player/10/current-team",
        factory::player_team(8, 10, 5),
        1,
    );
    let relink = test.with_forbidden_call("PUT", "/player-teams/8");
    let link = test.with_forbidden_call("POST", "/player-teams");

    let selection = DraftSelection {
        pick_number: 3,
        player_id: Some(10),
        ..Default::default()
    };
    DraftSelectionService::new(&client)
        .update(1, &selection)
        .await?;

    pick.assert();
    current.assert();
    relink.assert();
    link.assert();

    Ok(())
}

/// Expect a failing link update to leave the pick update successful
#[tokio::test]
async fn update_ignores_link_failure() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let client = api_client(&test)?;

    let pick = test.with_update_endpoint("/draft-picks/1", factory::draft_selection(1, 3, 10, 5), 1);
    let current = test.with_status_endpoint(
        "GET",
        "/player-teams/player/10/current-team",
        500,
        json!({ "error": "Database unavailable" }),
        1,
    );

    let selection = DraftSelection {
        pick_number: 3,
        player_id: Some(10),
        team_id: Some(5),
        ..Default::default()
    };
    let updated = DraftSelectionService::new(&client)
        .update(1, &selection)
        .await?;

    assert_eq!(updated.id, Some(1));
    pick.assert();
    current.assert();

    Ok(())
}
