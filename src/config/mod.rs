//! Configuration for the Check-In Scheduling Engine.
//!
//! The engine's tuning knobs (lookback window, search horizons, streak
//! milestones) live in an [`EnginePolicy`], loadable from a YAML file or
//! constructed with production defaults via `EnginePolicy::default()`.

mod loader;
mod types;

pub use loader::load_policy;
pub use types::EnginePolicy;
