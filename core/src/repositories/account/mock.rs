//! Mock implementation of AccountRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

use super::trait_::AccountRepository;

/// In-memory account repository keyed by email
pub struct MockAccountRepository {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
    writes: AtomicUsize,
}

impl MockAccountRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
            writes: AtomicUsize::new(0),
        }
    }

    /// Seed an account directly, bypassing version checks
    pub async fn insert(&self, account: Account) {
        self.accounts
            .write()
            .await
            .insert(account.email.clone(), account);
    }

    /// Snapshot of a stored account
    pub async fn get(&self, email: &str) -> Option<Account> {
        self.accounts.read().await.get(email).cloned()
    }

    /// Number of successful create/update calls
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl Default for MockAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        Ok(self.accounts.read().await.get(email).cloned())
    }

    async fn find_by_registration_code(&self, code: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .find(|a| a.registration_code.as_ref().is_some_and(|c| c.code == code))
            .cloned())
    }

    async fn find_by_progress_code(&self, code: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .find(|a| a.progress_code.as_ref().is_some_and(|c| c.code == code))
            .cloned())
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        if accounts.contains_key(&account.email) {
            return Err(DomainError::Conflict {
                message: "Email already registered".to_string(),
            });
        }

        accounts.insert(account.email.clone(), account.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(account)
    }

    async fn update(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        let stored = accounts.get(&account.email).ok_or_else(|| DomainError::NotFound {
            resource: "Account".to_string(),
        })?;

        if stored.version != account.version {
            return Err(DomainError::Conflict {
                message: format!(
                    "Account version mismatch (stored {}, given {})",
                    stored.version, account.version
                ),
            });
        }

        let mut updated = account;
        updated.version += 1;
        accounts.insert(updated.email.clone(), updated.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(updated)
    }
}
