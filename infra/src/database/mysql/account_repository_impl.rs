//! MySQL implementation of the AccountRepository trait.
//!
//! Each verification code is stored as a (code, expiry) column pair. Updates
//! are conditional on the `version` column so that a stale snapshot cannot
//! overwrite a newer code.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use ra_core::domain::entities::{Account, AccountStatus, IssuedCode};
use ra_core::errors::DomainError;
use ra_core::repositories::AccountRepository;

const SELECT_COLUMNS: &str = r#"
    SELECT id, email, status,
           registration_code, registration_code_expires_at,
           progress_code, progress_code_expires_at,
           created_at, updated_at, version
    FROM accounts
"#;

/// MySQL implementation of AccountRepository
pub struct MySqlAccountRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    /// Create a new MySQL account repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Combine a nullable (code, expiry) column pair
    ///
    /// A code without an expiry is treated as absent.
    pub(crate) fn issued_code(
        code: Option<String>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Option<IssuedCode> {
        match (code, expires_at) {
            (Some(code), Some(expires_at)) => Some(IssuedCode::new(code, expires_at)),
            _ => None,
        }
    }

    /// Convert database row to Account entity
    fn row_to_account(row: &sqlx::mysql::MySqlRow) -> Result<Account, DomainError> {
        let id: String = row.try_get("id")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get id: {}", e) })?;
        let status: i32 = row.try_get("status")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get status: {}", e) })?;

        let registration_code = Self::issued_code(
            row.try_get("registration_code")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get registration_code: {}", e) })?,
            row.try_get("registration_code_expires_at")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get registration_code_expires_at: {}", e) })?,
        );
        let progress_code = Self::issued_code(
            row.try_get("progress_code")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get progress_code: {}", e) })?,
            row.try_get("progress_code_expires_at")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get progress_code_expires_at: {}", e) })?,
        );

        Ok(Account {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::Internal { message: format!("Invalid account UUID: {}", e) })?,
            email: row.try_get("email")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get email: {}", e) })?,
            status: AccountStatus::from_code(status),
            registration_code,
            progress_code,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get created_at: {}", e) })?,
            updated_at: row.try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get updated_at: {}", e) })?,
            version: row.try_get::<u64, _>("version")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get version: {}", e) })?,
        })
    }

    async fn find_one(&self, filter: &str, value: &str) -> Result<Option<Account>, DomainError> {
        let query = format!("{} WHERE {} = ? LIMIT 1", SELECT_COLUMNS, filter);

        let result = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to find account: {}", e) })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_account(&row)?)),
            None => Ok(None),
        }
    }

    async fn exists(&self, id: Uuid) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM accounts WHERE id = ?) AS found")
            .bind(id.to_string())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to check account existence: {}", e) })?;

        let found: i64 = row.try_get("found")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get existence result: {}", e) })?;
        Ok(found == 1)
    }
}

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        self.find_one("email", email).await
    }

    async fn find_by_registration_code(&self, code: &str) -> Result<Option<Account>, DomainError> {
        self.find_one("registration_code", code).await
    }

    async fn find_by_progress_code(&self, code: &str) -> Result<Option<Account>, DomainError> {
        self.find_one("progress_code", code).await
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let query = r#"
            INSERT INTO accounts (
                id, email, status,
                registration_code, registration_code_expires_at,
                progress_code, progress_code_expires_at,
                created_at, updated_at, version
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(account.id.to_string())
            .bind(&account.email)
            .bind(account.status.code())
            .bind(account.registration_code.as_ref().map(|c| c.code.as_str()))
            .bind(account.registration_code.as_ref().map(|c| c.expires_at))
            .bind(account.progress_code.as_ref().map(|c| c.code.as_str()))
            .bind(account.progress_code.as_ref().map(|c| c.expires_at))
            .bind(account.created_at)
            .bind(account.updated_at)
            .bind(account.version)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db) if db.is_unique_violation() => DomainError::Conflict {
                    message: "Email already registered".to_string(),
                },
                e => DomainError::Internal { message: format!("Failed to create account: {}", e) },
            })?;

        Ok(account)
    }

    async fn update(&self, account: Account) -> Result<Account, DomainError> {
        let query = r#"
            UPDATE accounts
            SET status = ?,
                registration_code = ?, registration_code_expires_at = ?,
                progress_code = ?, progress_code_expires_at = ?,
                updated_at = ?, version = version + 1
            WHERE id = ? AND version = ?
        "#;

        let result = sqlx::query(query)
            .bind(account.status.code())
            .bind(account.registration_code.as_ref().map(|c| c.code.as_str()))
            .bind(account.registration_code.as_ref().map(|c| c.expires_at))
            .bind(account.progress_code.as_ref().map(|c| c.code.as_str()))
            .bind(account.progress_code.as_ref().map(|c| c.expires_at))
            .bind(account.updated_at)
            .bind(account.id.to_string())
            .bind(account.version)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to update account: {}", e) })?;

        if result.rows_affected() == 0 {
            return if self.exists(account.id).await? {
                Err(DomainError::Conflict {
                    message: format!("Account {} was modified concurrently", account.id),
                })
            } else {
                Err(DomainError::NotFound { resource: "Account".to_string() })
            };
        }

        let mut updated = account;
        updated.version += 1;
        Ok(updated)
    }
}
