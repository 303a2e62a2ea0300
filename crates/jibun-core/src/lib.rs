//! Core domain for Jibun Timer.
//!
//! Holds the data model (activities, history, modes, personas), the view
//! state machine, prompt construction, and the traits the outer layers
//! implement: the persistence adapter slices and the advice collaborator.

pub mod activity;
pub mod advice;
pub mod error;
pub mod history;
pub mod mode;
pub mod persona;
pub mod prompt;
pub mod state;
pub mod storage;

// Re-export common error type
pub use error::JibunError;
