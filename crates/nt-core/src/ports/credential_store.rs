//! Credential store port
//!
//! Durable, opaque key-value persistence for the auth token and a cached
//! copy of the user record. Implementations must be idempotent and safe to
//! call before any network activity, since bootstrap reads the store for an
//! optimistic offline start.

use async_trait::async_trait;

use crate::user::UserRecord;

/// Token plus cached user, persisted together.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StoredCredentials {
    pub token: String,
    pub user: UserRecord,
}

#[async_trait]
pub trait CredentialStorePort: Send + Sync {
    /// Load the stored session, if any. A missing record is not an error.
    async fn load(&self) -> anyhow::Result<Option<StoredCredentials>>;

    /// Persist the token and cached user, replacing any previous record.
    async fn store(&self, token: &str, user: &UserRecord) -> anyhow::Result<()>;

    /// Remove the stored session. Clearing an empty store is a no-op.
    async fn clear(&self) -> anyhow::Result<()>;
}
