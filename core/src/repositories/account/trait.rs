//! Account repository trait defining the interface for account persistence.
//!
//! Accounts are addressable by email and by each of their two verification
//! codes. Writes are guarded by an optimistic version check so that two
//! requests racing on the same account cannot both install a fresh code.

use async_trait::async_trait;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

/// Repository trait for Account persistence operations
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use ra_core::domain::entities::account::Account;
/// use ra_core::errors::DomainError;
/// use ra_core::repositories::AccountRepository;
///
/// struct MySqlAccountRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl AccountRepository for MySqlAccountRepository {
///     async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
///         // Implementation here
///         Ok(None)
///     }
///
///     // ... other methods
/// #   async fn find_by_registration_code(&self, _: &str) -> Result<Option<Account>, DomainError> { Ok(None) }
/// #   async fn find_by_progress_code(&self, _: &str) -> Result<Option<Account>, DomainError> { Ok(None) }
/// #   async fn create(&self, a: Account) -> Result<Account, DomainError> { Ok(a) }
/// #   async fn update(&self, a: Account) -> Result<Account, DomainError> { Ok(a) }
/// }
/// ```
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by its normalised email
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account registered for this email
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Find the account whose current registration code equals `code`
    async fn find_by_registration_code(&self, code: &str) -> Result<Option<Account>, DomainError>;

    /// Find the account whose current progress code equals `code`
    async fn find_by_progress_code(&self, code: &str) -> Result<Option<Account>, DomainError>;

    /// Persist a new account
    ///
    /// # Returns
    /// * `Ok(Account)` - The stored account
    /// * `Err(DomainError::Conflict)` - An account with this email already exists
    async fn create(&self, account: Account) -> Result<Account, DomainError>;

    /// Replace a stored account if its version still matches
    ///
    /// The stored version must equal `account.version`; on success the
    /// stored copy is written with `version + 1` and returned.
    ///
    /// # Returns
    /// * `Ok(Account)` - The updated account carrying the new version
    /// * `Err(DomainError::Conflict)` - The stored version moved on
    /// * `Err(DomainError::NotFound)` - No such account
    async fn update(&self, account: Account) -> Result<Account, DomainError>;
}
