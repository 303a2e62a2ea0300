//! Advice collaborator abstraction.
//!
//! The external generative-language service is reached through the
//! [`AdviceProvider`] trait so the controller can be tested against a mock.

use crate::error::Result;

/// The three independent request categories issued by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// Advice on the current working activity list (result screen)
    Advice,
    /// One-month prediction (result screen, on demand)
    Prediction,
    /// Whole-history analysis (history screen, on demand)
    Analysis,
}

/// A service that turns a prompt into generated advice text.
#[async_trait::async_trait]
pub trait AdviceProvider: Send + Sync {
    /// Sends the prompt to the collaborator and returns the response text.
    ///
    /// Errors are converted to fixed fallback strings by the caller; this
    /// method never needs to degrade on its own.
    async fn generate(&self, prompt: &str) -> Result<String>;
}
