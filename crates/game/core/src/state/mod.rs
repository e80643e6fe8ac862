//! Mutable maze state and the value types it is built from.
//!
//! The [`Grid`] owns its tiles exclusively; everything else references the
//! grid or is copied by value. Scenes mutate this state synchronously, one
//! logical actor at a time.
mod backpack;
mod common;
mod grid;
mod item;
mod player;
mod tile;

pub use backpack::Backpack;
pub use common::{Position, SceneId};
pub use grid::{Grid, GridError, LayoutError};
pub use item::{DamageKind, Item, ItemCategory};
pub use player::PlayerState;
pub use tile::{Tile, TileKind};
