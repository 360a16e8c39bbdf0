use chrono::{DateTime, Utc};
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("stored value is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Account record kept under `user:<email>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub password_digest: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct RedisClient {
    client: redis::Client,
}

impl RedisClient {
    pub async fn new(connection_string: &str) -> Result<Self, redis::RedisError> {
        let client = redis::Client::open(connection_string)?;
        Ok(Self { client })
    }

    /// Store a customization blob, overwriting any previous one.
    /// One blob per user; concurrent saves race and last write wins.
    pub async fn set_customization(
        &self,
        user_id: &str,
        payload: &serde_json::Value,
    ) -> Result<(), StoreError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let key = format!("customization:{}", user_id);
        let body = serde_json::to_string(payload)?;
        conn.set::<_, _, ()>(key, body).await?;
        info!("Customization saved for user {}", user_id);
        Ok(())
    }

    pub async fn get_customization(
        &self,
        user_id: &str,
    ) -> Result<Option<serde_json::Value>, StoreError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let key = format!("customization:{}", user_id);
        let body: Option<String> = conn.get(key).await?;
        match body {
            Some(body) => Ok(Some(serde_json::from_str(&body)?)),
            None => Ok(None),
        }
    }

    /// Create an account record keyed by email. Returns false when the email
    /// is already taken; SET NX makes the check and the write atomic, so two
    /// concurrent signups cannot both win.
    pub async fn create_user(&self, user: &UserRecord) -> Result<bool, StoreError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let key = format!("user:{}", user.email);
        let body = serde_json::to_string(user)?;

        let result: Option<String> = redis::cmd("SET")
            .arg(&key)
            .arg(body)
            .arg("NX")
            .query_async(&mut conn)
            .await?;

        if result.is_some() {
            info!("User created: {}", user.id);
        }
        Ok(result.is_some())
    }

    pub async fn get_user(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let key = format!("user:{}", email);
        let body: Option<String> = conn.get(key).await?;
        match body {
            Some(body) => Ok(Some(serde_json::from_str(&body)?)),
            None => Ok(None),
        }
    }
}
