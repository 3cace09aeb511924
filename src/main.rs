//! Precinct Engine - Bootstrap binary
//!
//! Loads configuration, opens the repositories and logs what is stored.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use precinct_engine::application::services::{
    DetaineeService, InterrogationService, MeetingService, OfficerService,
    RoomManagementService,
};
use precinct_engine::infrastructure::config::AppConfig;
use precinct_engine::infrastructure::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "precinct_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Precinct Engine");

    // Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!("Configuration loaded");
    tracing::info!("  Storage: {}", config.storage);
    tracing::info!("  Data directory: {}", config.data_dir.display());
    tracing::info!("  Minimum interrogation level: {}", config.min_interrogation_level);

    let state = AppState::new(config).await?;

    let rooms = state.room_service.list_rooms().await?;
    let booked = state.room_service.list_booked().await?;
    let officers = state.officer_service.list_officers().await?;
    let detainees = state.detainee_service.list_detainees().await?;
    let interrogations = state.interrogation_service.list_interrogations().await?;
    let meetings = state.meeting_service.list_meetings().await?;

    tracing::info!(
        rooms = rooms.len(),
        booked = booked.len(),
        officers = officers.len(),
        detainees = detainees.len(),
        interrogations = interrogations.len(),
        meetings = meetings.len(),
        "Precinct Engine ready"
    );

    Ok(())
}
