//! Persistence adapter traits.
//!
//! Four independent state slices are synchronized to a durable string-keyed
//! store, one trait per slice. All loads are infallible: on a read or parse
//! failure the implementation emits a diagnostic and returns the slice's
//! default instead of propagating the error.

use async_trait::async_trait;

use crate::error::Result;
use crate::history::HistoryRecord;
use crate::mode::AiMode;
use crate::persona::Persona;

/// Storage key for the activity history slice.
pub const HISTORY_KEY: &str = "jibun_timer_history";
/// Storage key for the AI mode slice.
pub const MODE_KEY: &str = "jibun_timer_ai_mode";
/// Storage key for the personality slice.
pub const PERSONA_KEY: &str = "jibun_timer_personality";
/// Storage key for the user display name slice.
pub const USER_NAME_KEY: &str = "jibun_timer_user_name";

/// Repository for the append-only history collection.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Loads the stored history, defaulting to empty on any failure.
    async fn load(&self) -> Vec<HistoryRecord>;

    /// Writes the full collection back to storage.
    async fn save(&self, records: &[HistoryRecord]) -> Result<()>;
}

/// Repository for the AI mode slice.
#[async_trait]
pub trait ModeRepository: Send + Sync {
    /// Loads the stored mode, defaulting on absence or an unrecognized value.
    async fn load(&self) -> AiMode;

    async fn save(&self, mode: AiMode) -> Result<()>;
}

/// Repository for the optional personality slice.
///
/// Saving `None` must remove the storage key, so a subsequent load behaves
/// as "never set" rather than "explicitly empty".
#[async_trait]
pub trait PersonaRepository: Send + Sync {
    async fn load(&self) -> Option<Persona>;

    async fn save(&self, persona: Option<Persona>) -> Result<()>;
}

/// Repository for the optional user display name slice.
///
/// Same key-removal contract as [`PersonaRepository`].
#[async_trait]
pub trait UserNameRepository: Send + Sync {
    async fn load(&self) -> Option<String>;

    async fn save(&self, name: Option<&str>) -> Result<()>;
}
