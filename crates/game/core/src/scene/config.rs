//! Static scene authoring data.
//!
//! Everything here is supplied at scene authoring time (layout matrix, spawn
//! coordinate, item and portal placements), never computed at runtime.
//! Loaders in `maze-content` deserialize these from RON files.

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{GridError, Item, LayoutError, Position, SceneId, TileKind};

/// An item and the tile it starts on.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemPlacement {
    pub position: Position,
    pub item: Item,
}

/// A portal tile and the scene it leads to.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PortalPlacement {
    pub position: Position,
    pub destination: SceneId,
}

/// Static configuration for one maze scene.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneConfig {
    pub id: SceneId,
    pub layout: Vec<Vec<TileKind>>,
    pub spawn: Position,
    pub items: Vec<ItemPlacement>,
    pub portals: Vec<PortalPlacement>,
}

/// Errors raised while turning a [`SceneConfig`] into a live scene.
///
/// All of these indicate an authoring bug and are fatal: the scene cannot be
/// built into something playable.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SceneConfigError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("spawn {0} is outside the layout bounds")]
    SpawnOutOfBounds(Position),

    #[error("spawn {0} is not a walkable tile")]
    SpawnNotWalkable(Position),

    /// An item or portal placement violated a grid invariant.
    #[error("invalid static placement: {0}")]
    Placement(#[from] GridError),

    #[error("scene declares {found} portals, at most {max} are supported")]
    TooManyPortals { found: usize, max: usize },
}

impl GameError for SceneConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Layout(_) => "SCENE_CONFIG_LAYOUT",
            Self::SpawnOutOfBounds(_) => "SCENE_CONFIG_SPAWN_OUT_OF_BOUNDS",
            Self::SpawnNotWalkable(_) => "SCENE_CONFIG_SPAWN_NOT_WALKABLE",
            Self::Placement(_) => "SCENE_CONFIG_PLACEMENT",
            Self::TooManyPortals { .. } => "SCENE_CONFIG_TOO_MANY_PORTALS",
        }
    }
}

impl SceneConfig {
    /// Starts a config with an empty item and portal list.
    pub fn empty(id: impl Into<String>, layout: Vec<Vec<TileKind>>, spawn: Position) -> Self {
        Self {
            id: SceneId::new(id),
            layout,
            spawn,
            items: Vec::new(),
            portals: Vec::new(),
        }
    }

    pub fn with_item(mut self, position: Position, item: Item) -> Self {
        self.items.push(ItemPlacement { position, item });
        self
    }

    pub fn with_portal(mut self, position: Position, destination: impl Into<String>) -> Self {
        self.portals.push(PortalPlacement {
            position,
            destination: SceneId::new(destination),
        });
        self
    }

    /// Upper bound check for the bounded portal registry.
    pub(super) fn check_portal_count(&self) -> Result<(), SceneConfigError> {
        if self.portals.len() > GameConfig::MAX_PORTALS_PER_SCENE {
            return Err(SceneConfigError::TooManyPortals {
                found: self.portals.len(),
                max: GameConfig::MAX_PORTALS_PER_SCENE,
            });
        }
        Ok(())
    }
}
