//! Application layer for Jibun Timer.
//!
//! Wires the state model to its persistence repositories and the advice
//! provider, executing the commands each transition emits.

pub mod controller;

pub use controller::TimerController;
