use std::time::Duration;

use crate::client::service::team_dropdown::TeamDropdownService;

use super::*;

/// Expect the team list to be fetched once while the cache is valid
#[tokio::test]
async fn serves_teams_from_cache() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let client = api_client(&test)?;

    let list = test.with_get_endpoint(
        "/teams",
        json!([factory::team(1, "Eagles"), factory::team(2, "Giants")]),
        1,
    );

    let mut dropdown = TeamDropdownService::new(&client);
    let first = dropdown.get_all_teams().await?;
    let second = dropdown.get_all_teams().await?;

    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
    // Teams without a country are assumed to be in the USA
    assert_eq!(first[0].country, "USA");
    list.assert();

    Ok(())
}

/// Expect an expired cache to be fetched again
#[tokio::test]
async fn refetches_expired_cache() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let client = api_client(&test)?;

    let list = test.with_get_endpoint("/teams", json!([factory::team(1, "Eagles")]), 2);

    let mut dropdown = TeamDropdownService::with_ttl(&client, Duration::ZERO);
    dropdown.get_all_teams().await?;
    dropdown.get_all_teams().await?;

    list.assert();

    Ok(())
}

/// Expect the excluded team to be left out of the opponents
#[tokio::test]
async fn lists_opponents() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let client = api_client(&test)?;

    let list = test.with_get_endpoint(
        "/teams",
        json!([factory::team(1, "Eagles"), factory::team(2, "Giants")]),
        1,
    );

    let opponents = TeamDropdownService::new(&client)
        .get_teams_except(1)
        .await?;

    assert_eq!(opponents.len(), 1);
    assert_eq!(opponents[0].name, "Giants");
    list.assert();

    Ok(())
}

/// Expect a team missing from the cache to be fetched once and cached
#[tokio::test]
async fn fetches_and_caches_unknown_team() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let client = api_client(&test)?;

    let team = test.with_get_endpoint("/teams/4", factory::team(4, "Cowboys"), 1);

    let mut dropdown = TeamDropdownService::new(&client);
    let first = dropdown.get_team_by_id(4).await;
    let second = dropdown.get_team_by_id(4).await;

    assert_eq!(first.map(|t| t.name), Some("Cowboys".to_string()));
    assert_eq!(second.map(|t| t.id), Some(4));
    team.assert();

    Ok(())
}

/// Expect a failed lookup to yield no team
#[tokio::test]
async fn failed_lookup_yields_none() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let client = api_client(&test)?;

    let team = test.with_status_endpoint(
        "GET",
        "/teams/99",
        404,
        json!({ "error": "Team not found" }),
        1,
    );

    assert!(TeamDropdownService::new(&client)
        .get_team_by_id(99)
        .await
        .is_none());
    team.assert();

    Ok(())
}

/// Expect the last word of the division
#[test]
fn shortens_division_name() {
    assert_eq!(TeamDropdownService::division_short_name("NFC East"), "East");
    assert_eq!(TeamDropdownService::division_short_name("West"), "West");
}
