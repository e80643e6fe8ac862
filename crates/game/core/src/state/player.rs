use super::{Backpack, Position};

/// The player avatar's logical state: a grid coordinate plus the backpack it
/// exclusively owns for the scene's lifetime.
///
/// The invariant that `position` refers to a walkable tile is maintained by
/// [`crate::scene::MazeScene`]: user-driven movement validates against the
/// grid, and the transition spawn path only targets portal or spawn tiles.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub position: Position,
    pub backpack: Backpack,
}

impl PlayerState {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            backpack: Backpack::new(),
        }
    }
}
