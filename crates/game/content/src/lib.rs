//! Data-driven scene definitions and loaders.
//!
//! This crate houses static maze content and provides loaders for RON/TOML
//! data files:
//! - Scene layouts, item placements, and portal wiring (RON)
//! - Game configuration (TOML)
//! - The built-in campaign scenes distilled from the original level set
//!
//! Content is consumed by the session layer and never appears in game state.
//!
//! All loaders use maze-core types directly with serde for deserialization.

pub mod campaign;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use campaign::{campaign, entry_scene};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, SceneLoader};
