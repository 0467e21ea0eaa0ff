//! Infrastructure layer - hardware bindings for the effect engine
//!
//! Board configuration, the RMT-backed strip device and the task that
//! drives the engine.

pub mod config;
pub mod drivers;
pub mod tasks;
pub mod types;
