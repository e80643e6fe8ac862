//! Deterministic maze gameplay logic shared across presentation frontends.
//!
//! `maze-core` defines the canonical rules (grid, movement, inventory, scene
//! transitions) and exposes pure APIs that any host environment can drive.
//! Rendering, input device binding, and audio live entirely outside this
//! crate; the core communicates with them through [`scene::SceneEvent`]
//! values drained after each command.
pub mod config;
pub mod error;
pub mod scene;
pub mod state;

pub use config::GameConfig;
pub use error::{ErrorSeverity, GameError};
pub use scene::{
    Direction, ItemPlacement, MazeScene, MoveOutcome, PortalBinding, PortalPlacement, SceneConfig,
    SceneConfigError, SceneEvent, SessionTransferState,
};
pub use state::{
    Backpack, DamageKind, Grid, GridError, Item, ItemCategory, LayoutError, PlayerState, Position,
    SceneId, Tile, TileKind,
};
