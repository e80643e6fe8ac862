use crate::state::{Item, Position, SceneId, Tile};

use super::SessionTransferState;

/// Notifications emitted by a scene for the presentation layer.
///
/// The core never touches engine objects; it describes what changed and the
/// frontend decides how to re-render. Events are queued in order and drained
/// via [`crate::scene::MazeScene::drain_events`].
#[derive(Clone, Debug, PartialEq)]
pub enum SceneEvent {
    /// The player avatar occupies a new coordinate (committed move or spawn).
    PlayerMoved { from: Position, to: Position },

    /// A tile's state changed (item removed, portal bound); carries the full
    /// tile description for re-rendering.
    TileChanged { tile: Tile },

    /// An occupant item was picked up on arrival.
    ItemCollected { position: Position, item: Item },

    /// The player stepped onto a bound portal; the session manager should
    /// pause this scene and resume-or-launch the destination.
    TransitionRequested {
        destination: SceneId,
        transfer: SessionTransferState,
    },
}
