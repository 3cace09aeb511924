//! Shared application state

use anyhow::{Context, Result};
use tracing::info;

use crate::application::services::{
    DetaineeServiceImpl, InterrogationServiceImpl, MeetingServiceImpl, OfficerServiceImpl,
    RoomManagementServiceImpl, SchedulingLock,
};
use crate::infrastructure::config::{AppConfig, StorageBackend};
use crate::infrastructure::persistence::json::DataDirectory;
use crate::infrastructure::persistence::RepositoryGraph;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    pub repositories: RepositoryGraph,
    // Application services
    pub room_service: RoomManagementServiceImpl,
    pub officer_service: OfficerServiceImpl,
    pub detainee_service: DetaineeServiceImpl,
    pub interrogation_service: InterrogationServiceImpl,
    pub meeting_service: MeetingServiceImpl,
}

impl AppState {
    pub async fn new(config: AppConfig) -> Result<Self> {
        let repositories = match config.storage {
            StorageBackend::Memory => RepositoryGraph::in_memory(),
            StorageBackend::Json => {
                let data = DataDirectory::new(&config.data_dir);
                if config.reset_data {
                    data.reset()
                        .await
                        .context("Failed to reset data directory")?;
                }
                RepositoryGraph::open_json(&data)
                    .await
                    .with_context(|| format!("Failed to open data directory {}", config.data_dir.display()))?
            }
        };
        info!(storage = %config.storage, "Repositories initialized");

        Ok(Self::with_repositories(config, repositories))
    }

    /// Wire every service over already opened repositories
    pub fn with_repositories(config: AppConfig, repositories: RepositoryGraph) -> Self {
        let lock = SchedulingLock::new();

        let room_service =
            RoomManagementServiceImpl::new(repositories.rooms.clone(), lock.clone());
        let officer_service =
            OfficerServiceImpl::new(repositories.officers.clone(), lock.clone());
        let detainee_service = DetaineeServiceImpl::new(repositories.detainees.clone());
        let interrogation_service = InterrogationServiceImpl::new(
            repositories.officers.clone(),
            repositories.detainees.clone(),
            repositories.rooms.clone(),
            repositories.interrogations.clone(),
            lock.clone(),
        )
        .with_minimum_level(config.min_interrogation_level);
        let meeting_service = MeetingServiceImpl::new(
            repositories.officers.clone(),
            repositories.rooms.clone(),
            repositories.meetings.clone(),
            lock,
        );

        Self {
            config,
            repositories,
            room_service,
            officer_service,
            detainee_service,
            interrogation_service,
            meeting_service,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::{OfficerService, RoomManagementService};
    use crate::domain::value_objects::{Rank, RoomType};

    #[tokio::test]
    async fn test_json_state_persists_and_resets() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            data_dir: dir.path().to_path_buf(),
            ..AppConfig::default()
        };

        let state = AppState::new(config.clone()).await.unwrap();
        state.room_service.create_room(RoomType::Meeting).await.unwrap();
        state
            .officer_service
            .register_officer("Jane Doe", Rank::sergeant())
            .await
            .unwrap();

        let reopened = AppState::new(config.clone()).await.unwrap();
        assert_eq!(reopened.room_service.list_rooms().await.unwrap().len(), 1);

        let reset = AppState::new(AppConfig {
            reset_data: true,
            ..config
        })
        .await
        .unwrap();
        assert!(reset.room_service.list_rooms().await.unwrap().is_empty());
        assert!(reset.officer_service.list_officers().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_minimum_level_comes_from_config() {
        let config = AppConfig {
            storage: StorageBackend::Memory,
            min_interrogation_level: 4,
            ..AppConfig::default()
        };
        let state = AppState::new(config).await.unwrap();
        assert_eq!(state.interrogation_service.minimum_level(), 4);
    }
}
