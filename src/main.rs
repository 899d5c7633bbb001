use std::process::ExitCode;

use dioxus_logger::tracing::{self, Level};

use draftboard::client::{config::Config, error::Error, transport::ApiClient, AppState};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Failed to load draft data: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &Config) -> Result<(), Error> {
    let client = ApiClient::new(config)?;
    let mut state = AppState::new(&client);

    tracing::info!("Loading teams from {}", client.base_url());

    let teams = state.teams.fetch_all(false).await?;
    tracing::info!("Cached {} teams", teams.len());

    Ok(())
}
