use crate::{client::service::draft_pick::DraftPickService, model::DraftPick};

use super::*;

/// Expect a player who was already drafted to be rejected before the slot is checked
#[tokio::test]
async fn rejects_player_drafted_twice() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let client = api_client(&test)?;

    let lookup = test.with_get_endpoint(
        "/players/10/draft-pick",
        factory::draft_pick(1, 2024, 1, 3, Some(10), 3),
        1,
    );
    let slots = test.with_forbidden_call("GET", "/draft-picks");
    let create = test.with_forbidden_call("POST", "/draft-picks");

    let pick: DraftPick = serde_json::from_value(factory::draft_pick(0, 2024, 2, 40, Some(10), 5))?;
    let err = expect_duplicate(DraftPickService::new(&client).create(&pick).await);

    assert_eq!(
        err.message,
        "This player is already associated with draft pick #3 in round 1 of the 2024 draft"
    );
    assert_eq!(err.existing_id, Some(1));
    lookup.assert();
    slots.assert();
    create.assert();

    Ok(())
}

/// Expect a taken draft slot to be rejected
#[tokio::test]
async fn rejects_taken_slot() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let client = api_client(&test)?;

    let lookup = test.with_status_endpoint(
        "GET",
        "/players/11/draft-pick",
        404,
        json!({ "error": "Draft pick not found" }),
        1,
    );
    let slots = test.with_get_endpoint(
        "/draft-picks",
        json!([factory::draft_pick(2, 2024, 1, 2, None, 4)]),
        1,
    );
    let create = test.with_forbidden_call("POST", "/draft-picks");

    let pick: DraftPick = serde_json::from_value(factory::draft_pick(0, 2024, 1, 2, Some(11), 8))?;
    let err = expect_duplicate(DraftPickService::new(&client).create(&pick).await);

    assert_eq!(err.message, "Pick #2 in round 1 of the 2024 draft already exists");
    assert_eq!(err.existing_id, Some(2));
    lookup.assert();
    slots.assert();
    create.assert();

    Ok(())
}

/// Expect a pick without player to only be checked by slot
#[tokio::test]
async fn creates_open_pick_after_slot_check() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let client = api_client(&test)?;

    let slots = test.with_get_endpoint(
        "/draft-picks",
        json!([factory::draft_pick(2, 2024, 1, 2, None, 4)]),
        1,
    );
    let create = test.with_create_endpoint(
        "/draft-picks",
        factory::draft_pick(3, 2024, 1, 3, None, 8),
        1,
    );

    let pick: DraftPick = serde_json::from_value(factory::draft_pick(0, 2024, 1, 3, None, 8))?;
    let created = DraftPickService::new(&client).create(&pick).await?;

    assert_eq!(created.id, Some(3));
    slots.assert();
    create.assert();

    Ok(())
}

/// Expect an update moving the player to another record's pick to use the update wording
#[tokio::test]
async fn update_rejects_player_of_another_pick() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let client = api_client(&test)?;

    let lookup = test.with_get_endpoint(
        "/players/10/draft-pick",
        factory::draft_pick(1, 2024, 1, 3, Some(10), 3),
        1,
    );
    let update = test.with_forbidden_call("PUT", "/draft-picks/6");

    let pick: DraftPick = serde_json::from_value(factory::draft_pick(6, 2024, 1, 6, Some(10), 5))?;
    let err = expect_duplicate(DraftPickService::new(&client).update(6, &pick).await);

    assert_eq!(
        err.message,
        "This player is already associated with another draft pick"
    );
    lookup.assert();
    update.assert();

    Ok(())
}

/// Expect the player conflict to be reported when the player and the slot both belong to other picks
#[tokio::test]
async fn reports_player_conflict_before_slot_conflict() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let client = api_client(&test)?;

    let lookup = test.with_get_endpoint(
        "/players/12/draft-pick",
        factory::draft_pick(1, 2024, 1, 5, Some(12), 6),
        1,
    );
    test.track(lookup);
    let slots = test.with_get_endpoint(
        "/draft-picks",
        json!([
            factory::draft_pick(1, 2024, 1, 5, Some(12), 6),
            factory::draft_pick(2, 2024, 1, 9, Some(13), 7)
        ]),
        0,
    );
    test.track(slots);
    let create = test.with_forbidden_call("POST", "/draft-picks");
    test.track(create);

    let pick: DraftPick = serde_json::from_value(factory::draft_pick(0, 2024, 1, 9, Some(12), 7))?;
    let err = expect_duplicate(DraftPickService::new(&client).create(&pick).await);

    assert_eq!(
        err.message,
        "This player is already associated with draft pick #5 in round 1 of the 2024 draft"
    );
    assert_eq!(err.existing_id, Some(1));
    test.assert_mocks();

    Ok(())
}

/// Expect an update conflicting on both keys to report the player conflict
#[tokio::test]
async fn update_reports_player_conflict_before_slot_conflict() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let client = api_client(&test)?;

    let lookup = test.with_get_endpoint(
        "/players/12/draft-pick",
        factory::draft_pick(1, 2024, 1, 5, Some(12), 6),
        1,
    );
    test.track(lookup);
    let slots = test.with_get_endpoint(
        "/draft-picks",
        json!([factory::draft_pick(2, 2024, 1, 9, Some(13), 7)]),
        0,
    );
    test.track(slots);
    let update = test.with_forbidden_call("PUT", "/draft-picks/3");
    test.track(update);

    let pick: DraftPick = serde_json::from_value(factory::draft_pick(3, 2024, 1, 9, Some(12), 7))?;
    let err = expect_duplicate(DraftPickService::new(&client).update(3, &pick).await);

    assert_eq!(
        err.message,
        "This player is already associated with another draft pick"
    );
    assert_eq!(err.existing_id, Some(1));
    test.assert_mocks();

    Ok(())
}
