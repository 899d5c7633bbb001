use draftboard::client::{config::Config, error::Error, transport::ApiClient};
use draftboard_test_utils::TestSetup;

/// Returns an [`ApiClient`] pointed at the mock backend of `test`
pub fn api_client(test: &TestSetup) -> Result<ApiClient, Error> {
    let mut config = Config::with_api_url(test.url());
    config.auth_token = Some("test-token".to_string());

    ApiClient::new(&config)
}
