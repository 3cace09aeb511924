//! Detainee Service - Booking people into custody and releasing them

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::application::ports::outbound::DetaineeRepositoryPort;
use crate::application::services::errors::{ServiceError, ServiceResult};
use crate::domain::entities::Detainee;
use crate::domain::value_objects::DetaineeId;

#[async_trait]
pub trait DetaineeService: Send + Sync {
    async fn register_detainee(&self, name: &str, crime: &str) -> ServiceResult<Detainee>;

    async fn get_detainee(&self, id: DetaineeId) -> ServiceResult<Detainee>;

    async fn list_detainees(&self) -> ServiceResult<Vec<Detainee>>;

    /// Case-insensitive substring search on names
    async fn search_by_name(&self, query: &str) -> ServiceResult<Vec<Detainee>>;

    async fn find_by_crime(&self, crime: &str) -> ServiceResult<Vec<Detainee>>;

    /// Release from custody. The record is deleted; interrogations that
    /// mention the detainee keep their snapshot.
    async fn release_detainee(&self, id: DetaineeId) -> ServiceResult<()>;
}

pub struct DetaineeServiceImpl {
    detainees: Arc<dyn DetaineeRepositoryPort>,
}

impl DetaineeServiceImpl {
    pub fn new(detainees: Arc<dyn DetaineeRepositoryPort>) -> Self {
        Self { detainees }
    }
}

#[async_trait]
impl DetaineeService for DetaineeServiceImpl {
    #[instrument(skip(self))]
    async fn register_detainee(&self, name: &str, crime: &str) -> ServiceResult<Detainee> {
        let detainee = Detainee::new(name.trim(), crime.trim())?;
        self.detainees.save(&detainee).await?;
        info!(detainee_id = %detainee.id(), "Registered detainee");
        Ok(detainee)
    }

    async fn get_detainee(&self, id: DetaineeId) -> ServiceResult<Detainee> {
        self.detainees
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Detainee", id))
    }

    async fn list_detainees(&self) -> ServiceResult<Vec<Detainee>> {
        Ok(self.detainees.find_all().await?)
    }

    async fn search_by_name(&self, query: &str) -> ServiceResult<Vec<Detainee>> {
        Ok(self.detainees.find_by_name_containing(query).await?)
    }

    async fn find_by_crime(&self, crime: &str) -> ServiceResult<Vec<Detainee>> {
        Ok(self.detainees.find_by_crime(crime).await?)
    }

    #[instrument(skip(self))]
    async fn release_detainee(&self, id: DetaineeId) -> ServiceResult<()> {
        let detainee = self.get_detainee(id).await?;
        self.detainees.delete_by_id(detainee.id()).await?;
        info!(detainee_id = %id, "Released detainee");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::errors::ErrorKind;
    use crate::infrastructure::persistence::memory::InMemoryDetaineeRepository;

    fn service() -> DetaineeServiceImpl {
        DetaineeServiceImpl::new(Arc::new(InMemoryDetaineeRepository::new()))
    }

    #[tokio::test]
    async fn test_register_search_release() {
        let service = service();
        let joe = service.register_detainee("Joe Bloggs", "Burglary").await.unwrap();
        service.register_detainee("Ann Other", "Fraud").await.unwrap();

        assert_eq!(service.search_by_name("bloggs").await.unwrap(), vec![joe.clone()]);
        assert_eq!(service.find_by_crime("BURGLARY").await.unwrap().len(), 1);

        service.release_detainee(joe.id()).await.unwrap();

        assert_eq!(
            service.get_detainee(joe.id()).await.unwrap_err().kind(),
            ErrorKind::NotFound
        );
        assert_eq!(service.list_detainees().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_release_unknown_is_not_found() {
        let service = service();
        let err = service.release_detainee(DetaineeId::new()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_blank_name_rejected() {
        let err = service().register_detainee("", "Theft").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }
}
