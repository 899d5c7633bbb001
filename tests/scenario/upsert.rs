use draftboard::{
    client::{error::Error, AppState},
    model::Player,
};
use draftboard_test_utils::prelude::*;
use serde_json::json;

use crate::setup::api_client;

/// Expect saving the same player twice to keep one record with the second input
#[tokio::test]
async fn saving_player_twice_keeps_one_record() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let client = api_client(&test)?;

    let mut state = AppState::new(&client);

    let empty = test.with_get_endpoint("/players", json!([]), 1);
    let create = test.with_create_endpoint(
        "/players",
        factory::player(3, "Caleb", "Williams", "USC"),
        1,
    );

    let first: Player = serde_json::from_value(factory::player(0, "Caleb", "Williams", "USC"))?;
    let created = state.players.create_or_update(&first).await?;
    assert_eq!(created.id, Some(3));

    empty.assert();
    create.assert();
    empty.remove();

    let mut heavier = factory::player(3, "Caleb", "Williams", "USC");
    heavier["weight"] = json!(220.0);

    let listed = test.with_get_endpoint(
        "/players",
        factory::envelope(json!([factory::player(3, "Caleb", "Williams", "USC")]), None),
        2,
    );
    let update = test.with_update_endpoint("/players/3", heavier.clone(), 1);
    let second_create = test.with_forbidden_call("POST", "/players");

    // Same natural key in a different case
    let mut second: Player = serde_json::from_value(heavier)?;
    second.id = None;
    second.first_name = "CALEB".to_string();
    let saved = state.players.create_or_update(&second).await?;

    assert_eq!(saved.id, Some(3));
    assert_eq!(state.players.items().len(), 1);
    assert_eq!(state.players.items()[0].weight, 220.0);
    assert!(state.players.error().is_none());

    listed.assert();
    update.assert();
    second_create.assert();

    Ok(())
}

/// Expect a player drafted twice to be rejected with the pick it already belongs to
#[tokio::test]
async fn drafting_player_twice_names_existing_pick() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let client = api_client(&test)?;

    let drafted = test.with_get_endpoint(
        "/players/10/draft-pick",
        factory::draft_pick(1, 2024, 1, 3, Some(10), 3),
        1,
    );
    let create = test.with_forbidden_call("POST", "/draft-picks");

    let mut state = AppState::new(&client);

    // Unique slot, reused player
    let pick = serde_json::from_value(factory::draft_pick(0, 2024, 3, 70, Some(10), 9))?;
    let result = state.draft_picks.create(&pick).await;

    assert_eq!(result.err().and_then(|err| err.existing_id()), Some(1));
    assert_eq!(
        state.draft_picks.error(),
        Some("This player is already associated with draft pick #3 in round 1 of the 2024 draft")
    );
    assert_eq!(state.draft_picks.conflict_id(), Some(1));
    assert!(state.draft_picks.items().is_empty());

    drafted.assert();
    create.assert();

    Ok(())
}
