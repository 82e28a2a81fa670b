//! Mock implementation of ProfileRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::profile::ClientProfile;
use crate::errors::DomainError;

use super::trait_::ProfileRepository;

/// In-memory profile repository keyed by account id
pub struct MockProfileRepository {
    profiles: Arc<RwLock<HashMap<Uuid, ClientProfile>>>,
    fail_saves: AtomicBool,
}

impl MockProfileRepository {
    pub fn new() -> Self {
        Self {
            profiles: Arc::new(RwLock::new(HashMap::new())),
            fail_saves: AtomicBool::new(false),
        }
    }

    /// Make subsequent `save` calls fail with an internal error
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Number of stored profiles
    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.profiles.read().await.is_empty()
    }
}

impl Default for MockProfileRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileRepository for MockProfileRepository {
    async fn save(&self, profile: ClientProfile) -> Result<ClientProfile, DomainError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(DomainError::Internal {
                message: "profile store unavailable".to_string(),
            });
        }

        self.profiles
            .write()
            .await
            .insert(profile.account_id, profile.clone());
        Ok(profile)
    }

    async fn find_by_account_id(&self, account_id: Uuid) -> Result<Option<ClientProfile>, DomainError> {
        Ok(self.profiles.read().await.get(&account_id).cloned())
    }
}
