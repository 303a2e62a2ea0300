//! Interaction layer for Jibun Timer.
//!
//! HTTP clients for the external advice collaborators: the Gemini REST API
//! (used by the proxy server) and the proxy endpoint itself (used by the
//! terminal front end).

pub mod gemini_client;
pub mod proxy_client;

pub use gemini_client::{DEFAULT_GEMINI_MODEL, GeminiClient};
pub use proxy_client::{ErrorResponse, GenerateRequest, GenerateResponse, ProxyClient};
