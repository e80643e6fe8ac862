//! Built-in campaign scenes.
//!
//! The level set ships as code-authored [`SceneConfig`]s so the game runs
//! without any data files; the RON loader exists for external level packs.
//! Layouts derive from the original 6x4 starting matrix, with portal tiles
//! made explicit instead of being bound to arbitrary cells.

use maze_core::TileKind::{BossPortal, Path, Portal, Wall};
use maze_core::{DamageKind, Item, Position, SceneConfig, SceneId};

/// Scene the main menu starts a run in.
pub fn entry_scene() -> SceneId {
    SceneId::new("level_1_maze_1")
}

/// Every scene of the built-in campaign, keyed for the session registry.
pub fn campaign() -> Vec<SceneConfig> {
    vec![level_1_maze_1(), level_1_maze_2(), level_1_boss()]
}

fn level_1_maze_1() -> SceneConfig {
    SceneConfig::empty(
        "level_1_maze_1",
        vec![
            vec![Path, Path, Wall, Wall, Wall, Wall],
            vec![Wall, Path, Path, Path, Path, Portal],
            vec![Wall, Path, Path, Path, Path, Wall],
            vec![Wall, Path, Wall, Wall, Wall, Wall],
        ],
        Position::new(1, 1),
    )
    .with_item(Position::new(1, 0), Item::weapon("Fire", DamageKind::Fire))
    .with_portal(Position::new(5, 1), "level_1_maze_2")
}

fn level_1_maze_2() -> SceneConfig {
    SceneConfig::empty(
        "level_1_maze_2",
        vec![
            vec![Portal, Path, Path, Path, Path, Wall],
            vec![Wall, Path, Path, Path, Path, Wall],
            vec![Wall, Path, Path, Path, Path, BossPortal],
            vec![Wall, Path, Wall, Wall, Wall, Wall],
        ],
        Position::new(1, 1),
    )
    .with_item(
        Position::new(3, 2),
        Item::info_card("Water", DamageKind::Water),
    )
    .with_portal(Position::new(0, 0), "level_1_maze_1")
    .with_portal(Position::new(5, 2), "level_1_boss")
}

fn level_1_boss() -> SceneConfig {
    SceneConfig::empty(
        "level_1_boss",
        vec![
            vec![Wall, Wall, Wall],
            vec![Portal, Path, Path],
            vec![Wall, Wall, Wall],
        ],
        Position::new(1, 1),
    )
    .with_portal(Position::new(0, 1), "level_1_maze_2")
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::MazeScene;

    #[test]
    fn every_campaign_scene_builds() {
        for config in campaign() {
            MazeScene::new(&config)
                .unwrap_or_else(|e| panic!("scene {} failed to build: {e}", config.id));
        }
    }

    #[test]
    fn every_portal_destination_resolves_within_the_campaign() {
        let scenes = campaign();
        for config in &scenes {
            for portal in &config.portals {
                assert!(
                    scenes.iter().any(|other| other.id == portal.destination),
                    "portal in {} points to unknown scene {}",
                    config.id,
                    portal.destination
                );
            }
        }
    }

    #[test]
    fn the_entry_scene_exists() {
        assert!(campaign().iter().any(|config| config.id == entry_scene()));
    }
}
