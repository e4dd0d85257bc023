use crate::domain::office::Office;
use crate::domain::value_objects::OfficeId;
use crate::ports::office_repository::{OfficeRepository as OfficeRepositoryTrait, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock implementation of OfficeRepository
///
/// Supports stateful testing by storing offices in memory.
/// Offices can be registered up front with `add_office`.
#[allow(dead_code)]
pub struct OfficeRepository {
    offices: Mutex<HashMap<OfficeId, Office>>,
}

#[allow(dead_code)]
impl OfficeRepository {
    pub fn new() -> Self {
        Self {
            offices: Mutex::new(HashMap::new()),
        }
    }

    /// Register an office for testing purposes
    pub fn add_office(&self, office: Office) {
        self.offices
            .lock()
            .unwrap()
            .insert(office.office_id, office);
    }
}

impl Default for OfficeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OfficeRepositoryTrait for OfficeRepository {
    /// Look up an office among the registered ones
    async fn get(&self, office_id: OfficeId) -> Result<Option<Office>> {
        Ok(self.offices.lock().unwrap().get(&office_id).cloned())
    }
}
