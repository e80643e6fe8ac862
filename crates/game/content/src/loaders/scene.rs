//! Scene data loader.
//!
//! Loads one scene's static configuration (layout matrix, spawn, item and
//! portal placements) from a RON file. The layout keeps the numeric tile
//! codes of the original starting matrices.

use std::path::Path;

use maze_core::{Item, ItemPlacement, PortalPlacement, Position, SceneConfig, SceneId, TileKind};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Scene data structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SceneDataRon {
    id: String,
    /// Numeric tile codes: 0 empty, 1 path, 2 wall, 3 portal, 4 boss portal.
    layout: Vec<Vec<u8>>,
    spawn: (i32, i32),
    #[serde(default)]
    items: Vec<(i32, i32, Item)>,
    #[serde(default)]
    portals: Vec<(i32, i32, String)>,
}

fn tile_kind_from_code(code: u8) -> Option<TileKind> {
    match code {
        0 => Some(TileKind::Empty),
        1 => Some(TileKind::Path),
        2 => Some(TileKind::Wall),
        3 => Some(TileKind::Portal),
        4 => Some(TileKind::BossPortal),
        _ => None,
    }
}

/// Loader for scene configuration from RON files.
pub struct SceneLoader;

impl SceneLoader {
    /// Load one scene config from a RON file.
    ///
    /// Structural validation (rectangularity, spawn walkability, placement
    /// rules) happens later when the scene is built; this only rejects
    /// unparseable files and unknown tile codes.
    pub fn load(path: &Path) -> LoadResult<SceneConfig> {
        let content = read_file(path)?;
        let data: SceneDataRon = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scene RON: {}", e))?;

        let mut layout = Vec::with_capacity(data.layout.len());
        for (y, row) in data.layout.iter().enumerate() {
            let mut kinds = Vec::with_capacity(row.len());
            for (x, code) in row.iter().enumerate() {
                let kind = tile_kind_from_code(*code).ok_or_else(|| {
                    anyhow::anyhow!("Unknown tile code {} at ({}, {}) in {}", code, x, y, data.id)
                })?;
                kinds.push(kind);
            }
            layout.push(kinds);
        }

        Ok(SceneConfig {
            id: SceneId::new(data.id),
            layout,
            spawn: Position::new(data.spawn.0, data.spawn.1),
            items: data
                .items
                .into_iter()
                .map(|(x, y, item)| ItemPlacement {
                    position: Position::new(x, y),
                    item,
                })
                .collect(),
            portals: data
                .portals
                .into_iter()
                .map(|(x, y, destination)| PortalPlacement {
                    position: Position::new(x, y),
                    destination: SceneId::new(destination),
                })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use maze_core::{DamageKind, ItemCategory};

    fn write_ron(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write ron");
        file
    }

    #[test]
    fn loads_a_scene_with_items_and_portals() {
        let file = write_ron(
            r#"(
                id: "level_1_maze_1",
                layout: [
                    [1, 1, 2],
                    [2, 1, 3],
                ],
                spawn: (1, 0),
                items: [
                    (0, 0, (label: "Fire", category: Weapon, damage: Some(Fire))),
                ],
                portals: [
                    (2, 1, "level_1_maze_2"),
                ],
            )"#,
        );

        let config = SceneLoader::load(file.path()).expect("load scene");
        assert_eq!(config.id, SceneId::new("level_1_maze_1"));
        assert_eq!(config.layout[1][2], TileKind::Portal);
        assert_eq!(config.spawn, Position::new(1, 0));
        assert_eq!(config.items.len(), 1);
        assert_eq!(config.items[0].item.category, ItemCategory::Weapon);
        assert_eq!(config.items[0].item.damage, Some(DamageKind::Fire));
        assert_eq!(config.portals[0].destination, SceneId::new("level_1_maze_2"));
    }

    #[test]
    fn rejects_unknown_tile_codes() {
        let file = write_ron(
            r#"(
                id: "broken",
                layout: [[1, 9]],
                spawn: (0, 0),
            )"#,
        );

        let error = SceneLoader::load(file.path()).unwrap_err();
        assert!(error.to_string().contains("Unknown tile code 9"));
    }
}
