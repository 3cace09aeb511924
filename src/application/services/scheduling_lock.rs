//! Scheduling lock - Serializes check-then-act sequences across services

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

/// One lock shared by every service that reads a room's availability and
/// then changes it. Cloning shares the same underlying mutex.
#[derive(Debug, Clone, Default)]
pub struct SchedulingLock(Arc<Mutex<()>>);

impl SchedulingLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self) -> MutexGuard<'_, ()> {
        self.0.lock().await
    }
}
