//! SQLite-backed user store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{FromRow, SqlitePool};
use std::str::FromStr;

use crate::error::StoreError;
use crate::models::User;
use crate::store::UserStore;

/// Default pool size for database connections.
const DEFAULT_POOL_SIZE: u32 = 5;

/// A durable [`UserStore`] on SQLite via SQLx.
///
/// Timestamps are stored as RFC 3339 text and the settings map as a
/// JSON text column.
#[derive(Debug, Clone)]
pub struct SqliteUserStore {
    pool: SqlitePool,
}

/// Raw row shape; decoded into [`User`] after fetching.
#[derive(Debug, FromRow)]
struct UserRow {
    id: String,
    phone: String,
    credits: i64,
    created_at: String,
    updated_at: String,
    settings: String,
}

impl TryFrom<UserRow> for User {
    type Error = StoreError;

    fn try_from(row: UserRow) -> Result<Self, StoreError> {
        let created_at = parse_timestamp(&row.created_at)?;
        let updated_at = parse_timestamp(&row.updated_at)?;
        let settings = serde_json::from_str(&row.settings)
            .map_err(|e| StoreError::Corrupt(format!("settings for {}: {}", row.id, e)))?;

        Ok(User {
            id: row.id,
            phone: row.phone,
            credits: row.credits,
            created_at,
            updated_at,
            settings,
        })
    }
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, StoreError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StoreError::Corrupt(format!("timestamp {:?}: {}", value, e)))
}

impl SqliteUserStore {
    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite`.
    /// The database file is created if missing.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        Self::connect_with_pool_size(url, DEFAULT_POOL_SIZE).await
    }

    /// Connect with a custom pool size. Use `1` for in-memory tests so
    /// every query sees the same database.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!("Connected to user database: {}", url);

        Ok(Self { pool })
    }

    /// Run migrations. Call once after connecting.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, phone, credits, created_at, updated_at, settings
            FROM users
            WHERE phone = ?
            "#,
        )
        .bind(phone)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    async fn insert(&self, user: &User) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, phone, credits, created_at, updated_at, settings)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.id)
        .bind(&user.phone)
        .bind(user.credits)
        .bind(user.created_at.to_rfc3339())
        .bind(user.updated_at.to_rfc3339())
        .bind(user.settings.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn adjust_credits(&self, phone: &str, delta: i64) -> Result<Option<User>, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET credits = credits + ?, updated_at = ?
            WHERE phone = ?
            "#,
        )
        .bind(delta)
        .bind(Utc::now().to_rfc3339())
        .bind(phone)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_by_phone(phone).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_store() -> SqliteUserStore {
        let store = SqliteUserStore::connect_with_pool_size("sqlite::memory:", 1)
            .await
            .unwrap();
        store.migrate().await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let store = test_store().await;
        let user = User::new("09123456789", 50);

        store.insert(&user).await.unwrap();
        let found = store.find_by_phone("09123456789").await.unwrap().unwrap();

        assert_eq!(found.id, user.id);
        assert_eq!(found.credits, 50);
        assert_eq!(found.settings, serde_json::json!({}));
        // RFC 3339 roundtrip keeps the instant
        assert_eq!(found.created_at.timestamp(), user.created_at.timestamp());
    }

    #[tokio::test]
    async fn test_find_missing_is_none() {
        let store = test_store().await;
        assert!(store.find_by_phone("09120000000").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_phone_rejected() {
        let store = test_store().await;
        store.insert(&User::new("09123456789", 50)).await.unwrap();

        let err = store.insert(&User::new("09123456789", 50)).await;
        assert!(matches!(err, Err(StoreError::Sqlx(_))));
    }

    #[tokio::test]
    async fn test_adjust_credits() {
        let store = test_store().await;
        store.insert(&User::new("09123456789", 50)).await.unwrap();

        let updated = store
            .adjust_credits("09123456789", -8)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.credits, 42);

        assert!(store
            .adjust_credits("09120000000", 5)
            .await
            .unwrap()
            .is_none());
    }
}
