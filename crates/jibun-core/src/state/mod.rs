//! Application state and view transitions.

pub mod model;

pub use model::{Action, AppModel, Command, View};
