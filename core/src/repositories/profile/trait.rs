//! Profile repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::profile::ClientProfile;
use crate::errors::DomainError;

/// Persistence for client profiles, one per account
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Insert or replace the profile of `profile.account_id`
    async fn save(&self, profile: ClientProfile) -> Result<ClientProfile, DomainError>;

    /// Find the profile belonging to an account
    async fn find_by_account_id(&self, account_id: Uuid) -> Result<Option<ClientProfile>, DomainError>;
}
