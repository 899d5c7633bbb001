use crate::client::data::schedule::ScheduleRepository;

use super::*;

/// Expect only the team's schedules to be fetched and matched on season
#[tokio::test]
async fn finds_duplicate_within_team() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let client = api_client(&test)?;

    let endpoint = test.with_get_endpoint(
        "/schedules/team/4",
        json!([factory::schedule(10, 4, 2023), factory::schedule(11, 4, 2024)]),
        2,
    );

    let repo = ScheduleRepository::new(&client);

    assert_eq!(
        repo.find_duplicate(4, 2024).await?.and_then(|s| s.id),
        Some(11)
    );
    assert!(repo.find_duplicate(4, 2025).await?.is_none());
    endpoint.assert();

    Ok(())
}
