use crate::errors::AppError;
use crate::identity::{Identity, IDENTITY_KEY};
use std::{collections::BTreeMap, env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, info};

/// Flat string map persisted as JSON, the local equivalent of browser storage.
pub type KeyValueStore = BTreeMap<String, String>;

pub fn resolve_storage_path() -> PathBuf {
    if let Ok(path) = env::var("APP_STORAGE_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("data/local_storage.json")
}

pub async fn load_store(path: &Path) -> KeyValueStore {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(store) => store,
            Err(err) => {
                error!("failed to parse storage file: {err}");
                KeyValueStore::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => KeyValueStore::default(),
        Err(err) => {
            error!("failed to read storage file: {err}");
            KeyValueStore::default()
        }
    }
}

pub async fn persist_store(path: &Path, store: &KeyValueStore) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    let payload = serde_json::to_vec_pretty(store).map_err(AppError::internal)?;
    fs::write(path, payload).await?;
    Ok(())
}

/// Reads the cached user id, generating and writing one when none is stored yet.
pub async fn load_or_create_identity(path: &Path) -> Result<Identity, AppError> {
    let mut store = load_store(path).await;
    if let Some(user_id) = store.get(IDENTITY_KEY).filter(|id| !id.trim().is_empty()) {
        return Ok(Identity::new(user_id.clone()));
    }

    let identity = Identity::generate();
    store.insert(IDENTITY_KEY.to_string(), identity.user_id().to_string());
    persist_store(path, &store).await?;
    info!(user_id = identity.user_id(), "generated new user id");
    Ok(identity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn identity_is_created_once_and_reused() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let first = load_or_create_identity(&path).await.unwrap();
        let second = load_or_create_identity(&path).await.unwrap();
        assert_eq!(first, second);

        let store = load_store(&path).await;
        assert_eq!(store.get(IDENTITY_KEY).map(String::as_str), Some(first.user_id()));
    }

    #[tokio::test]
    async fn other_keys_survive_identity_creation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        let mut store = KeyValueStore::new();
        store.insert("theme".to_string(), "dark".to_string());
        persist_store(&path, &store).await.unwrap();

        load_or_create_identity(&path).await.unwrap();
        let store = load_store(&path).await;
        assert_eq!(store.get("theme").map(String::as_str), Some("dark"));
        assert!(store.contains_key(IDENTITY_KEY));
    }

    #[tokio::test]
    async fn corrupt_file_is_treated_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, b"{not json").await.unwrap();

        assert!(load_store(&path).await.is_empty());
        let identity = load_or_create_identity(&path).await.unwrap();
        assert!(identity.user_id().starts_with("User-"));
    }
}
