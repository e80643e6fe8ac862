use crate::error::{ErrorSeverity, GameError};

use super::{Item, Position, SceneId, Tile, TileKind};

/// Errors raised while turning a static layout matrix into a [`Grid`].
///
/// These surface at scene construction and are fatal: a malformed layout
/// cannot produce a playable scene.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutError {
    /// The layout matrix has no rows or an empty first row.
    #[error("layout matrix is empty")]
    Empty,

    /// The layout matrix is not rectangular.
    #[error("layout row {row} has {found} tiles, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl GameError for LayoutError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "LAYOUT_EMPTY",
            Self::Ragged { .. } => "LAYOUT_RAGGED",
        }
    }
}

/// Errors raised by grid accessors on misuse.
///
/// These indicate a static-configuration bug rather than a runtime player
/// condition, so they are surfaced to the caller instead of being swallowed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridError {
    /// Coordinate lies outside the grid dimensions.
    #[error("position {0} is out of grid bounds")]
    OutOfBounds(Position),

    /// The tile already holds an occupant item.
    #[error("tile at {0} already holds an item")]
    TileOccupied(Position),

    /// Portal destinations may only be bound to portal tiles.
    #[error("tile at {0} is not a portal tile")]
    NotAPortalTile(Position),
}

impl GameError for GridError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::OutOfBounds(_) => ErrorSeverity::Validation,
            Self::TileOccupied(_) | Self::NotAPortalTile(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfBounds(_) => "GRID_OUT_OF_BOUNDS",
            Self::TileOccupied(_) => "GRID_TILE_OCCUPIED",
            Self::NotAPortalTile(_) => "GRID_NOT_A_PORTAL_TILE",
        }
    }
}

/// Fixed-size, row-major tile matrix. Dimensions never change after
/// construction; every in-range coordinate maps to exactly one tile.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Builds a grid from the static starting layout.
    ///
    /// Tiles are created at coordinates derived from their row/column index.
    /// Rejects empty and non-rectangular matrices.
    pub fn from_layout(rows: &[Vec<TileKind>]) -> Result<Self, LayoutError> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(LayoutError::Empty);
        }

        let mut tiles = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(LayoutError::Ragged {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, kind) in row.iter().enumerate() {
                tiles.push(Tile::new(Position::new(x as i32, y as i32), *kind));
            }
        }

        Ok(Self {
            width: width as u32,
            height: height as u32,
            tiles,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    fn index_of(&self, position: Position) -> Option<usize> {
        if !self.contains(position) {
            return None;
        }
        Some(position.y as usize * self.width as usize + position.x as usize)
    }

    /// Returns the tile at the given coordinate.
    pub fn tile(&self, position: Position) -> Result<&Tile, GridError> {
        self.index_of(position)
            .map(|index| &self.tiles[index])
            .ok_or(GridError::OutOfBounds(position))
    }

    fn tile_mut(&mut self, position: Position) -> Result<&mut Tile, GridError> {
        self.index_of(position)
            .map(|index| &mut self.tiles[index])
            .ok_or(GridError::OutOfBounds(position))
    }

    /// False if out of bounds or the tile is a wall; true otherwise.
    pub fn is_walkable(&self, position: Position) -> bool {
        self.tile(position)
            .map(|tile| tile.is_walkable())
            .unwrap_or(false)
    }

    /// Places an occupant item on a tile.
    ///
    /// Fails if the tile already holds an item (the original occupant is
    /// left intact) or the coordinate is out of bounds.
    pub fn place_item(&mut self, position: Position, item: Item) -> Result<(), GridError> {
        let tile = self.tile_mut(position)?;
        if tile.item().is_some() {
            return Err(GridError::TileOccupied(position));
        }
        tile.set_item(item);
        Ok(())
    }

    /// Removes and returns the occupant item of a tile, if any.
    pub fn take_item(&mut self, position: Position) -> Result<Option<Item>, GridError> {
        Ok(self.tile_mut(position)?.take_item())
    }

    /// Binds a portal destination to a portal tile.
    pub fn set_portal(&mut self, position: Position, destination: SceneId) -> Result<(), GridError> {
        let tile = self.tile_mut(position)?;
        if !tile.kind().carries_portal() {
            return Err(GridError::NotAPortalTile(position));
        }
        tile.set_portal_to(destination);
        Ok(())
    }

    /// Iterates over all bound portals: the scene's portal registry.
    pub fn portals(&self) -> impl Iterator<Item = (Position, &SceneId)> + '_ {
        self.tiles
            .iter()
            .filter_map(|tile| tile.portal_to().map(|to| (tile.position(), to)))
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles.iter()
    }
}
