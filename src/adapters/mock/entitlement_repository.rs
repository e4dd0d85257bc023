use crate::domain::entitlement::MembershipEntitlement;
use crate::domain::value_objects::EntitlementId;
use crate::ports::entitlement_repository::{
    EntitlementRepository as EntitlementRepositoryTrait, Result,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock implementation of EntitlementRepository
///
/// Supports stateful testing by storing entitlements in memory.
#[allow(dead_code)]
pub struct EntitlementRepository {
    entitlements: Mutex<HashMap<EntitlementId, MembershipEntitlement>>,
}

#[allow(dead_code)]
impl EntitlementRepository {
    pub fn new() -> Self {
        Self {
            entitlements: Mutex::new(HashMap::new()),
        }
    }

    /// Register an entitlement for testing purposes
    pub fn add_entitlement(&self, entitlement: MembershipEntitlement) {
        self.entitlements
            .lock()
            .unwrap()
            .insert(entitlement.entitlement_id, entitlement);
    }
}

impl Default for EntitlementRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EntitlementRepositoryTrait for EntitlementRepository {
    /// Look up an entitlement among the registered ones
    async fn get(&self, entitlement_id: EntitlementId) -> Result<Option<MembershipEntitlement>> {
        Ok(self
            .entitlements
            .lock()
            .unwrap()
            .get(&entitlement_id)
            .cloned())
    }
}
