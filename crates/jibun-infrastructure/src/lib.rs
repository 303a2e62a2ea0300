//! Infrastructure layer for Jibun Timer.
//!
//! File-backed implementations of the core persistence traits, plus path,
//! configuration, and credential management.

pub mod config;
pub mod json_store;
pub mod paths;
pub mod repositories;
pub mod secret;

pub use config::ServerConfig;
pub use json_store::JsonSliceStore;
pub use repositories::{
    JsonHistoryRepository, JsonModeRepository, JsonPersonaRepository, JsonUserNameRepository,
};
