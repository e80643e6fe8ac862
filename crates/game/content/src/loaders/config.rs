//! Game configuration loader.

use std::path::Path;

use maze_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        let config: GameConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_tile_edge_length() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"tile_edge_length = 64\n").expect("write toml");

        let config = ConfigLoader::load(file.path()).expect("load config");
        assert_eq!(config.tile_edge_length, 64);
    }
}
