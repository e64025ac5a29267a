//! File-based credential store
//!
//! Persists the auth token and the cached user record to a local JSON
//! file in the application data directory. Reads are safe before any
//! network activity, which bootstrap relies on for its optimistic
//! offline start.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use nt_core::ports::{CredentialStorePort, StoredCredentials};
use nt_core::user::UserRecord;

pub const DEFAULT_CREDENTIALS_FILE: &str = ".credentials";

/// Platform data directory for NutriTrack, when one exists.
pub fn default_store_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("nutritrack"))
}

pub struct FileCredentialStore {
    credentials_path: PathBuf,
}

impl FileCredentialStore {
    /// Create a store with a custom file path.
    pub fn new(credentials_path: PathBuf) -> Self {
        Self { credentials_path }
    }

    /// Create a store with base dir and the default filename.
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self {
            credentials_path: base_dir.join(DEFAULT_CREDENTIALS_FILE),
        }
    }

    async fn ensure_parent_dir(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.credentials_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl CredentialStorePort for FileCredentialStore {
    async fn load(&self) -> anyhow::Result<Option<StoredCredentials>> {
        if !self.credentials_path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.credentials_path).await?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        let stored: StoredCredentials = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse stored credentials: {}", e))?;

        Ok(Some(stored))
    }

    async fn store(&self, token: &str, user: &UserRecord) -> anyhow::Result<()> {
        self.ensure_parent_dir().await?;

        let record = StoredCredentials {
            token: token.to_string(),
            user: user.clone(),
        };
        let json = serde_json::to_string_pretty(&record)
            .map_err(|e| anyhow::anyhow!("Failed to serialize credentials: {}", e))?;

        let mut file = fs::File::create(&self.credentials_path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create credentials file: {}", e))?;

        file.write_all(json.as_bytes())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to write credentials file: {}", e))?;

        file.sync_all()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to sync credentials file: {}", e))?;

        Ok(())
    }

    async fn clear(&self) -> anyhow::Result<()> {
        if self.credentials_path.exists() {
            fs::remove_file(&self.credentials_path).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_user() -> UserRecord {
        UserRecord {
            id: 42,
            email: "user@example.com".to_string(),
            full_name: "Sample User".to_string(),
            profile_completed: true,
            profile: None,
            nutrition_targets: None,
            is_guest: false,
        }
    }

    #[tokio::test]
    async fn test_load_returns_none_when_file_not_exists() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCredentialStore::new(temp_dir.path().join("nonexistent.json"));

        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_store_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCredentialStore::new(temp_dir.path().join("creds.json"));
        let user = sample_user();

        store.store("tok-abc", &user).await.unwrap();
        let loaded = store.load().await.unwrap().unwrap();

        assert_eq!(loaded.token, "tok-abc");
        assert_eq!(loaded.user, user);
    }

    #[tokio::test]
    async fn test_store_replaces_previous_record() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCredentialStore::new(temp_dir.path().join("creds.json"));

        store.store("tok-old", &sample_user()).await.unwrap();
        let mut renamed = sample_user();
        renamed.full_name = "Renamed".to_string();
        store.store("tok-new", &renamed).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.token, "tok-new");
        assert_eq!(loaded.user.full_name, "Renamed");
    }

    #[tokio::test]
    async fn test_clear_deletes_the_record() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCredentialStore::new(temp_dir.path().join("creds.json"));

        store.store("tok", &sample_user()).await.unwrap();
        store.clear().await.unwrap();

        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCredentialStore::new(temp_dir.path().join("creds.json"));

        store.clear().await.unwrap();
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_empty_file_reads_as_no_session() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.json");
        fs::write(&path, "").await.unwrap();

        let store = FileCredentialStore::new(path);
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_corrupt_file_returns_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("corrupt.json");
        fs::write(&path, "{not json").await.unwrap();

        let store = FileCredentialStore::new(path);
        let result = store.load().await;

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to parse"));
    }

    #[tokio::test]
    async fn test_with_defaults_uses_default_filename() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCredentialStore::with_defaults(temp_dir.path().to_path_buf());

        let expected = temp_dir.path().join(DEFAULT_CREDENTIALS_FILE);
        assert_eq!(store.credentials_path, expected);
    }

    #[tokio::test]
    async fn test_store_creates_missing_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let store =
            FileCredentialStore::new(temp_dir.path().join("nested").join("dir").join("creds"));

        store.store("tok", &sample_user()).await.unwrap();
        assert!(store.load().await.unwrap().is_some());
    }
}
