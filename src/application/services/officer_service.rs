//! Officer Service - Registering officers and managing their rank

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::application::ports::outbound::OfficerRepositoryPort;
use crate::application::services::errors::{ServiceError, ServiceResult};
use crate::application::services::scheduling_lock::SchedulingLock;
use crate::domain::entities::Officer;
use crate::domain::value_objects::{OfficerId, Rank};

/// Officer service trait defining the application use cases
#[async_trait]
pub trait OfficerService: Send + Sync {
    async fn register_officer(&self, name: &str, rank: Rank) -> ServiceResult<Officer>;

    async fn get_officer(&self, id: OfficerId) -> ServiceResult<Officer>;

    async fn list_officers(&self) -> ServiceResult<Vec<Officer>>;

    /// Raise the officer to a strictly higher rank
    async fn promote_officer(&self, id: OfficerId, rank: Rank) -> ServiceResult<Officer>;

    /// Lower the officer to a strictly lower rank
    async fn demote_officer(&self, id: OfficerId, rank: Rank) -> ServiceResult<Officer>;

    /// Officers whose level is at least `rank`'s level
    async fn list_officers_with_minimum_rank(&self, rank: &Rank) -> ServiceResult<Vec<Officer>>;
}

pub struct OfficerServiceImpl {
    officers: Arc<dyn OfficerRepositoryPort>,
    lock: SchedulingLock,
}

impl OfficerServiceImpl {
    pub fn new(officers: Arc<dyn OfficerRepositoryPort>, lock: SchedulingLock) -> Self {
        Self { officers, lock }
    }
}

#[async_trait]
impl OfficerService for OfficerServiceImpl {
    #[instrument(skip(self))]
    async fn register_officer(&self, name: &str, rank: Rank) -> ServiceResult<Officer> {
        let officer = Officer::new(name.trim(), rank)?;
        self.officers.save(&officer).await?;
        info!(officer_id = %officer.id(), rank = %officer.rank(), "Registered officer");
        Ok(officer)
    }

    #[instrument(skip(self))]
    async fn get_officer(&self, id: OfficerId) -> ServiceResult<Officer> {
        self.officers
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Officer", id))
    }

    async fn list_officers(&self) -> ServiceResult<Vec<Officer>> {
        Ok(self.officers.find_all().await?)
    }

    #[instrument(skip(self))]
    async fn promote_officer(&self, id: OfficerId, rank: Rank) -> ServiceResult<Officer> {
        let _guard = self.lock.acquire().await;
        let mut officer = self.get_officer(id).await?;
        officer.promote_to(rank)?;
        self.officers.save(&officer).await?;
        info!(officer_id = %id, rank = %officer.rank(), "Promoted officer");
        Ok(officer)
    }

    #[instrument(skip(self))]
    async fn demote_officer(&self, id: OfficerId, rank: Rank) -> ServiceResult<Officer> {
        let _guard = self.lock.acquire().await;
        let mut officer = self.get_officer(id).await?;
        officer.demote_to(rank)?;
        self.officers.save(&officer).await?;
        info!(officer_id = %id, rank = %officer.rank(), "Demoted officer");
        Ok(officer)
    }

    async fn list_officers_with_minimum_rank(&self, rank: &Rank) -> ServiceResult<Vec<Officer>> {
        let officers = self.officers.find_all().await?;
        Ok(officers
            .into_iter()
            .filter(|o| o.rank().is_at_least(rank))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::errors::ErrorKind;
    use crate::infrastructure::persistence::memory::InMemoryOfficerRepository;

    fn service() -> (OfficerServiceImpl, Arc<InMemoryOfficerRepository>) {
        let repo = Arc::new(InMemoryOfficerRepository::new());
        (
            OfficerServiceImpl::new(repo.clone(), SchedulingLock::new()),
            repo,
        )
    }

    #[tokio::test]
    async fn test_register_rejects_blank_name() {
        let (service, _) = service();
        let err = service.register_officer("   ", Rank::officer()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(service.list_officers().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_promotion_is_persisted() {
        let (service, repo) = service();
        let officer = service
            .register_officer("Jane Doe", Rank::officer())
            .await
            .unwrap();

        service
            .promote_officer(officer.id(), Rank::sergeant())
            .await
            .unwrap();

        let stored = repo.find_by_id(officer.id()).await.unwrap().unwrap();
        assert_eq!(stored.rank(), &Rank::sergeant());
    }

    #[tokio::test]
    async fn test_equal_level_rejected_both_ways() {
        let (service, repo) = service();
        let officer = service
            .register_officer("Jane Doe", Rank::sergeant())
            .await
            .unwrap();
        let same_level = Rank::new("Detective Sergeant", 3).unwrap();

        let promote = service
            .promote_officer(officer.id(), same_level.clone())
            .await
            .unwrap_err();
        let demote = service
            .demote_officer(officer.id(), same_level)
            .await
            .unwrap_err();

        assert_eq!(promote.kind(), ErrorKind::InvalidTransition);
        assert_eq!(demote.kind(), ErrorKind::InvalidTransition);
        let stored = repo.find_by_id(officer.id()).await.unwrap().unwrap();
        assert_eq!(stored.rank(), &Rank::sergeant());
    }

    #[tokio::test]
    async fn test_unknown_officer() {
        let (service, _) = service();
        let err = service
            .promote_officer(OfficerId::new(), Rank::inspector())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_minimum_rank_filter() {
        let (service, _) = service();
        service.register_officer("Trainee", Rank::trainee()).await.unwrap();
        let sergeant = service
            .register_officer("Sarge", Rank::sergeant())
            .await
            .unwrap();
        let inspector = service
            .register_officer("Morse", Rank::inspector())
            .await
            .unwrap();

        let senior = service
            .list_officers_with_minimum_rank(&Rank::sergeant())
            .await
            .unwrap();

        assert_eq!(senior, vec![sergeant, inspector]);
    }
}
