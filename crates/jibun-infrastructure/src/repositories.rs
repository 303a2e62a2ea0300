//! Persistence adapter implementations over the JSON slice store.
//!
//! Each of the four state slices follows the same contract: loads fall back
//! to the slice default on any failure (with a diagnostic, never an error to
//! the caller), writes propagate errors so the controller can log and
//! swallow them, and the optional slices remove their key when cleared.

use async_trait::async_trait;

use jibun_core::error::Result;
use jibun_core::history::HistoryRecord;
use jibun_core::mode::AiMode;
use jibun_core::persona::Persona;
use jibun_core::storage::{
    HISTORY_KEY, HistoryRepository, MODE_KEY, ModeRepository, PERSONA_KEY, PersonaRepository,
    USER_NAME_KEY, UserNameRepository,
};

use crate::json_store::JsonSliceStore;

/// History slice backed by the JSON store.
#[derive(Debug, Clone)]
pub struct JsonHistoryRepository {
    store: JsonSliceStore,
}

impl JsonHistoryRepository {
    pub fn new(store: JsonSliceStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl HistoryRepository for JsonHistoryRepository {
    async fn load(&self) -> Vec<HistoryRecord> {
        match self.store.get::<Vec<HistoryRecord>>(HISTORY_KEY) {
            Ok(Some(records)) => records,
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to load history, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    async fn save(&self, records: &[HistoryRecord]) -> Result<()> {
        self.store.set(HISTORY_KEY, &records)
    }
}

/// AI mode slice backed by the JSON store.
#[derive(Debug, Clone)]
pub struct JsonModeRepository {
    store: JsonSliceStore,
}

impl JsonModeRepository {
    pub fn new(store: JsonSliceStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ModeRepository for JsonModeRepository {
    async fn load(&self) -> AiMode {
        let stored = match self.store.get::<String>(MODE_KEY) {
            Ok(Some(s)) => s,
            Ok(None) => return AiMode::default(),
            Err(e) => {
                tracing::warn!("Failed to load AI mode, using default: {}", e);
                return AiMode::default();
            }
        };
        stored.parse().unwrap_or_else(|_| {
            tracing::warn!("Unrecognized AI mode '{}', using default", stored);
            AiMode::default()
        })
    }

    async fn save(&self, mode: AiMode) -> Result<()> {
        self.store.set(MODE_KEY, &mode.to_string())
    }
}

/// Persona slice backed by the JSON store. Clearing removes the key.
#[derive(Debug, Clone)]
pub struct JsonPersonaRepository {
    store: JsonSliceStore,
}

impl JsonPersonaRepository {
    pub fn new(store: JsonSliceStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PersonaRepository for JsonPersonaRepository {
    async fn load(&self) -> Option<Persona> {
        let stored = match self.store.get::<String>(PERSONA_KEY) {
            Ok(Some(s)) => s,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("Failed to load persona, treating as unset: {}", e);
                return None;
            }
        };
        match stored.parse() {
            Ok(persona) => Some(persona),
            Err(_) => {
                tracing::warn!("Unrecognized persona '{}', treating as unset", stored);
                None
            }
        }
    }

    async fn save(&self, persona: Option<Persona>) -> Result<()> {
        match persona {
            Some(p) => self.store.set(PERSONA_KEY, &p.to_string()),
            None => self.store.remove(PERSONA_KEY),
        }
    }
}

/// User display name slice backed by the JSON store. Clearing removes the key.
#[derive(Debug, Clone)]
pub struct JsonUserNameRepository {
    store: JsonSliceStore,
}

impl JsonUserNameRepository {
    pub fn new(store: JsonSliceStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserNameRepository for JsonUserNameRepository {
    async fn load(&self) -> Option<String> {
        match self.store.get::<String>(USER_NAME_KEY) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to load user name, treating as unset: {}", e);
                None
            }
        }
    }

    async fn save(&self, name: Option<&str>) -> Result<()> {
        match name {
            Some(n) => self.store.set(USER_NAME_KEY, &n),
            None => self.store.remove(USER_NAME_KEY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jibun_core::activity::{Activity, Category};
    use std::fs;
    use tempfile::TempDir;

    fn store() -> (TempDir, JsonSliceStore) {
        let dir = TempDir::new().unwrap();
        let store = JsonSliceStore::new(dir.path()).unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn test_history_round_trip() {
        let (_dir, store) = store();
        let repo = JsonHistoryRepository::new(store);

        let records = vec![HistoryRecord::snapshot_now(&[Activity::new(
            "Work",
            8,
            0,
            Category::Work,
        )])];
        repo.save(&records).await.unwrap();

        let loaded = repo.load().await;
        assert_eq!(loaded, records);
    }

    #[tokio::test]
    async fn test_history_defaults_to_empty_on_corrupt_file() {
        let (dir, store) = store();
        fs::write(dir.path().join(format!("{HISTORY_KEY}.json")), "{oops").unwrap();

        let repo = JsonHistoryRepository::new(store);
        assert!(repo.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_cleared_history_reloads_empty() {
        let (_dir, store) = store();
        let repo = JsonHistoryRepository::new(store);

        repo.save(&[HistoryRecord::snapshot_now(&[])]).await.unwrap();
        repo.save(&[]).await.unwrap();
        assert!(repo.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_mode_round_trip() {
        let (_dir, store) = store();
        let repo = JsonModeRepository::new(store);

        repo.save(AiMode::Tsundere).await.unwrap();
        assert_eq!(repo.load().await, AiMode::Tsundere);
    }

    #[tokio::test]
    async fn test_unrecognized_mode_falls_back_to_default() {
        let (_dir, store) = store();
        store.set(MODE_KEY, &"sparkle".to_string()).unwrap();

        let repo = JsonModeRepository::new(store);
        assert_eq!(repo.load().await, AiMode::default());
    }

    #[tokio::test]
    async fn test_absent_mode_is_default() {
        let (_dir, store) = store();
        let repo = JsonModeRepository::new(store);
        assert_eq!(repo.load().await, AiMode::Gal);
    }

    #[tokio::test]
    async fn test_persona_clear_removes_the_key() {
        let (dir, store) = store();
        let repo = JsonPersonaRepository::new(store);

        repo.save(Some(Persona::Planner)).await.unwrap();
        assert!(dir.path().join(format!("{PERSONA_KEY}.json")).exists());
        assert_eq!(repo.load().await, Some(Persona::Planner));

        repo.save(None).await.unwrap();
        assert!(!dir.path().join(format!("{PERSONA_KEY}.json")).exists());
        assert_eq!(repo.load().await, None);
    }

    #[tokio::test]
    async fn test_unrecognized_persona_is_unset() {
        let (_dir, store) = store();
        store.set(PERSONA_KEY, &"wizard".to_string()).unwrap();

        let repo = JsonPersonaRepository::new(store);
        assert_eq!(repo.load().await, None);
    }

    #[tokio::test]
    async fn test_user_name_clear_removes_the_key() {
        let (dir, store) = store();
        let repo = JsonUserNameRepository::new(store);

        repo.save(Some("ゆい")).await.unwrap();
        assert_eq!(repo.load().await.as_deref(), Some("ゆい"));

        repo.save(None).await.unwrap();
        assert!(!dir.path().join(format!("{USER_NAME_KEY}.json")).exists());
        assert_eq!(repo.load().await, None);
    }
}
