//! Content loaders for reading scene data from files.
//!
//! Loaders convert RON/TOML files into the static configuration types that
//! `maze-core` consumes at scene construction.

pub mod config;
pub mod scene;

pub use config::ConfigLoader;
pub use scene::SceneLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
