/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Edge length of one grid tile in world units. Tile anchors are derived
    /// from it deterministically; see [`crate::state::Position::anchor`].
    pub tile_edge_length: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of portal bindings per scene. Scenes are small,
    /// hand-authored mazes; the registry is scanned linearly.
    pub const MAX_PORTALS_PER_SCENE: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TILE_EDGE_LENGTH: u32 = 100;

    pub fn new() -> Self {
        Self {
            tile_edge_length: Self::DEFAULT_TILE_EDGE_LENGTH,
        }
    }

    pub fn with_tile_edge_length(tile_edge_length: u32) -> Self {
        Self { tile_edge_length }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
