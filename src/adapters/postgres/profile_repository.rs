//! PostgreSQL implementation of ProfileReader and ProfileRepository.
//!
//! Every call goes through the shared [`ConnectionManager`], so the first
//! request of the process establishes the pool.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::Row;
use uuid::Uuid;

use super::ConnectionManager;
use crate::domain::foundation::{DomainError, ProfileId};
use crate::domain::profile::{Profile, ProfileDraft};
use crate::ports::{ProfileReader, ProfileRepository, UpsertKind, UpsertOutcome};

const PROFILE_COLUMNS: &str = "id, name, email, bio, instagram, whatsapp, avatar, gallery";

/// PostgreSQL-backed profile store.
#[derive(Clone)]
pub struct PostgresProfileRepository {
    connections: Arc<ConnectionManager>,
}

impl PostgresProfileRepository {
    pub fn new(connections: Arc<ConnectionManager>) -> Self {
        Self { connections }
    }
}

#[async_trait]
impl ProfileReader for PostgresProfileRepository {
    async fn find_current(&self) -> Result<Option<Profile>, DomainError> {
        let pool = self.connections.connect().await?;

        let row = sqlx::query(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles ORDER BY created_at ASC, id ASC LIMIT 1"
        ))
        .fetch_optional(pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to load profile: {}", e)))?;

        row.map(|row| profile_from_row(&row)).transpose()
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn connect(&self) -> Result<(), DomainError> {
        self.connections.connect().await?;
        Ok(())
    }

    async fn upsert_by_email(&self, draft: &ProfileDraft) -> Result<UpsertOutcome, DomainError> {
        let email = draft.validate()?;
        let pool = self.connections.connect().await?;

        // xmax is zero only for a freshly inserted tuple.
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO profiles (id, name, email, bio, instagram, whatsapp, avatar, gallery)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (email) DO UPDATE SET
                name = EXCLUDED.name,
                bio = EXCLUDED.bio,
                instagram = EXCLUDED.instagram,
                whatsapp = EXCLUDED.whatsapp,
                avatar = EXCLUDED.avatar,
                gallery = EXCLUDED.gallery,
                updated_at = NOW()
            RETURNING {PROFILE_COLUMNS}, (xmax = 0) AS inserted
            "#
        ))
        .bind(ProfileId::new().as_uuid())
        .bind(draft.name.trim())
        .bind(email.as_str())
        .bind(&draft.bio)
        .bind(&draft.instagram)
        .bind(&draft.whatsapp)
        .bind(&draft.avatar)
        .bind(&draft.gallery)
        .fetch_one(pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to upsert profile: {}", e)))?;

        let inserted: bool = row
            .try_get("inserted")
            .map_err(|e| DomainError::database(format!("Failed to read upsert result: {}", e)))?;

        Ok(UpsertOutcome {
            profile: profile_from_row(&row)?,
            kind: if inserted {
                UpsertKind::Inserted
            } else {
                UpsertKind::Updated
            },
        })
    }
}

fn profile_from_row(row: &PgRow) -> Result<Profile, DomainError> {
    let decode = |e: sqlx::Error| DomainError::database(format!("Failed to decode profile: {}", e));

    let id: Uuid = row.try_get("id").map_err(decode)?;
    let draft = ProfileDraft {
        name: row.try_get("name").map_err(decode)?,
        email: row.try_get("email").map_err(decode)?,
        bio: row.try_get("bio").map_err(decode)?,
        instagram: row.try_get("instagram").map_err(decode)?,
        whatsapp: row.try_get("whatsapp").map_err(decode)?,
        avatar: row.try_get("avatar").map_err(decode)?,
        gallery: row.try_get("gallery").map_err(decode)?,
    };

    Ok(Profile::new(ProfileId::from_uuid(id), draft)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::domain::foundation::ErrorCode;

    fn unconfigured() -> PostgresProfileRepository {
        PostgresProfileRepository::new(Arc::new(ConnectionManager::new(DatabaseConfig::default())))
    }

    #[tokio::test]
    async fn read_without_database_is_connection_failure() {
        let err = unconfigured().find_current().await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::ConnectionFailed);
    }

    #[tokio::test]
    async fn invalid_draft_is_rejected_before_connecting() {
        let draft = ProfileDraft {
            name: "Ada".to_string(),
            email: "not-an-email".to_string(),
            ..Default::default()
        };
        let err = unconfigured().upsert_by_email(&draft).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }
}
