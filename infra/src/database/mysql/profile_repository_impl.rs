//! MySQL implementation of the ProfileRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use ra_core::domain::entities::ClientProfile;
use ra_core::errors::DomainError;
use ra_core::repositories::ProfileRepository;

/// MySQL implementation of ProfileRepository, one row per account
pub struct MySqlProfileRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlProfileRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_profile(row: &sqlx::mysql::MySqlRow) -> Result<ClientProfile, DomainError> {
        let account_id: String = row.try_get("account_id")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get account_id: {}", e) })?;

        Ok(ClientProfile {
            account_id: Uuid::parse_str(&account_id)
                .map_err(|e| DomainError::Internal { message: format!("Invalid account UUID: {}", e) })?,
            full_name: row.try_get("full_name")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get full_name: {}", e) })?,
            phone: row.try_get("phone")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get phone: {}", e) })?,
            company: row.try_get("company")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get company: {}", e) })?,
            address: row.try_get("address")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get address: {}", e) })?,
            submitted_at: row.try_get::<DateTime<Utc>, _>("submitted_at")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get submitted_at: {}", e) })?,
        })
    }
}

#[async_trait]
impl ProfileRepository for MySqlProfileRepository {
    async fn save(&self, profile: ClientProfile) -> Result<ClientProfile, DomainError> {
        let query = r#"
            INSERT INTO client_profiles (
                account_id, full_name, phone, company, address, submitted_at
            ) VALUES (?, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                full_name = VALUES(full_name),
                phone = VALUES(phone),
                company = VALUES(company),
                address = VALUES(address),
                submitted_at = VALUES(submitted_at)
        "#;

        sqlx::query(query)
            .bind(profile.account_id.to_string())
            .bind(&profile.full_name)
            .bind(&profile.phone)
            .bind(&profile.company)
            .bind(&profile.address)
            .bind(profile.submitted_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to save profile: {}", e) })?;

        Ok(profile)
    }

    async fn find_by_account_id(&self, account_id: Uuid) -> Result<Option<ClientProfile>, DomainError> {
        let query = r#"
            SELECT account_id, full_name, phone, company, address, submitted_at
            FROM client_profiles
            WHERE account_id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(account_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to find profile: {}", e) })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_profile(&row)?)),
            None => Ok(None),
        }
    }
}
