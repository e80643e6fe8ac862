use super::{Item, Position, SceneId};

/// Canonical tile classes for the maze layout matrix.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TileKind {
    Empty,
    Path,
    Wall,
    Portal,
    BossPortal,
}

impl TileKind {
    /// Walls are never walkable; every other kind is.
    pub fn is_walkable(self) -> bool {
        !matches!(self, TileKind::Wall)
    }

    /// Only portal kinds may carry a destination scene identifier.
    pub fn carries_portal(self) -> bool {
        matches!(self, TileKind::Portal | TileKind::BossPortal)
    }
}

/// One cell of the maze grid.
///
/// Tiles are created once from the static starting layout when a scene
/// initializes; the occupant item and portal destination are set
/// post-construction by scene setup, through [`super::Grid`] accessors only.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    position: Position,
    kind: TileKind,
    item: Option<Item>,
    portal_to: Option<SceneId>,
}

impl Tile {
    pub(super) fn new(position: Position, kind: TileKind) -> Self {
        Self {
            position,
            kind,
            item: None,
            portal_to: None,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn kind(&self) -> TileKind {
        self.kind
    }

    pub fn item(&self) -> Option<&Item> {
        self.item.as_ref()
    }

    pub fn portal_to(&self) -> Option<&SceneId> {
        self.portal_to.as_ref()
    }

    pub fn is_walkable(&self) -> bool {
        self.kind.is_walkable()
    }

    pub(super) fn set_item(&mut self, item: Item) {
        self.item = Some(item);
    }

    pub(super) fn take_item(&mut self) -> Option<Item> {
        self.item.take()
    }

    pub(super) fn set_portal_to(&mut self, destination: SceneId) {
        self.portal_to = Some(destination);
    }
}
