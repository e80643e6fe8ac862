use crate::state::{Backpack, Item, SceneId};

/// Snapshot handed from a departing scene to its destination.
///
/// Created at the moment a portal is entered, consumed exactly once by the
/// destination scene's activation ([`crate::scene::MazeScene::enter`]), then
/// discarded. Inventory is transferred by value; the destination repopulates
/// a fresh backpack from it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionTransferState {
    /// Ordered backpack contents at the time of departure.
    pub items: Vec<Item>,
    /// Identifier of the scene being departed.
    pub from_scene: SceneId,
}

impl SessionTransferState {
    pub fn capture(backpack: &Backpack, from_scene: SceneId) -> Self {
        Self {
            items: backpack.all_items(),
            from_scene,
        }
    }
}
