//! The parametrized maze scene: grid, player, and transition resolution.
//!
//! A single component configured per level via [`SceneConfig`] replaces the
//! per-level scene subclasses of the original game. All mutation happens
//! synchronously through [`MazeScene`] methods; the presentation layer
//! drains [`SceneEvent`]s after each command.
mod config;
mod events;
mod movement;
mod transfer;

use arrayvec::ArrayVec;

pub use config::{ItemPlacement, PortalPlacement, SceneConfig, SceneConfigError};
pub use events::SceneEvent;
pub use movement::{Direction, MoveOutcome};
pub use transfer::SessionTransferState;

use crate::config::GameConfig;
use crate::state::{Grid, PlayerState, Position, SceneId};

/// One entry of a scene's portal registry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PortalBinding {
    pub position: Position,
    pub destination: SceneId,
}

type PortalRegistry = ArrayVec<PortalBinding, { GameConfig::MAX_PORTALS_PER_SCENE }>;

/// A live maze scene instance.
///
/// Owns its [`Grid`] and [`PlayerState`]. The portal registry is cached at
/// construction; it is small and fixed, so spawn resolution scans it
/// linearly.
#[derive(Clone, Debug)]
pub struct MazeScene {
    id: SceneId,
    grid: Grid,
    player: PlayerState,
    default_spawn: Position,
    portal_registry: PortalRegistry,
    events: Vec<SceneEvent>,
}

impl MazeScene {
    /// Builds a scene from static configuration.
    ///
    /// Fails only on authoring bugs: malformed layouts, spawn coordinates
    /// outside bounds or on walls, and invalid item/portal placements.
    pub fn new(config: &SceneConfig) -> Result<Self, SceneConfigError> {
        let mut grid = Grid::from_layout(&config.layout)?;

        if !grid.contains(config.spawn) {
            return Err(SceneConfigError::SpawnOutOfBounds(config.spawn));
        }
        if !grid.is_walkable(config.spawn) {
            return Err(SceneConfigError::SpawnNotWalkable(config.spawn));
        }

        for placement in &config.items {
            grid.place_item(placement.position, placement.item.clone())?;
        }

        config.check_portal_count()?;
        let mut portal_registry = PortalRegistry::new();
        for placement in &config.portals {
            grid.set_portal(placement.position, placement.destination.clone())?;
            portal_registry.push(PortalBinding {
                position: placement.position,
                destination: placement.destination.clone(),
            });
        }

        Ok(Self {
            id: config.id.clone(),
            grid,
            player: PlayerState::new(config.spawn),
            default_spawn: config.spawn,
            portal_registry,
            events: Vec::new(),
        })
    }

    pub fn id(&self) -> &SceneId {
        &self.id
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn default_spawn(&self) -> Position {
        self.default_spawn
    }

    pub fn portal_registry(&self) -> &[PortalBinding] {
        &self.portal_registry
    }

    /// Activates the scene, fresh or resumed.
    ///
    /// With a transfer state, the backpack is cleared and repopulated from
    /// the snapshot and the player spawns on the portal leading back to the
    /// origin scene (or the default spawn when no portal matches). Without
    /// one, this is a fresh entry at the default spawn.
    pub fn enter(&mut self, transfer: Option<SessionTransferState>) {
        let spawn = match transfer {
            Some(transfer) => {
                self.player.backpack.restore_from(&transfer.items);
                self.resolve_spawn(Some(&transfer.from_scene))
            }
            None => self.resolve_spawn(None),
        };
        self.set_player_position(spawn);
    }

    /// Resolves where the player should appear.
    ///
    /// Re-entry lands the player back on the door they used: the registry is
    /// scanned for a portal whose destination equals the origin scene. No
    /// match, or a fresh entry, falls back to the fixed default spawn. This
    /// never fails.
    pub fn resolve_spawn(&self, from_scene: Option<&SceneId>) -> Position {
        if let Some(origin) = from_scene {
            for binding in &self.portal_registry {
                if binding.destination == *origin {
                    return binding.position;
                }
            }
        }
        self.default_spawn
    }

    /// Unconditionally repositions the player, bypassing walkability checks.
    ///
    /// Used only by the transition-resolution path, never by user-driven
    /// movement: the destination scene must be able to place the player on a
    /// portal tile without re-validating the step.
    pub fn set_player_position(&mut self, position: Position) {
        let from = self.player.position;
        self.player.position = position;
        self.events.push(SceneEvent::PlayerMoved {
            from,
            to: position,
        });
    }

    /// Executes a directional move command.
    ///
    /// A non-walkable destination is silently rejected ([`MoveOutcome::Blocked`]).
    /// On arrival, a tile occupant is picked up into the backpack, and a
    /// bound portal triggers a transition request carrying the inventory
    /// snapshot and this scene's identity.
    pub fn handle_move(&mut self, direction: Direction) -> MoveOutcome {
        let destination = self.player.position.offset(direction);
        if !self.grid.is_walkable(destination) {
            return MoveOutcome::Blocked;
        }

        let from = self.player.position;
        self.player.position = destination;
        self.events.push(SceneEvent::PlayerMoved {
            from,
            to: destination,
        });

        // Pickup-on-entry: the destination is in bounds (walkable implies it).
        if let Ok(Some(item)) = self.grid.take_item(destination) {
            self.events.push(SceneEvent::ItemCollected {
                position: destination,
                item: item.clone(),
            });
            if let Ok(tile) = self.grid.tile(destination) {
                self.events.push(SceneEvent::TileChanged { tile: tile.clone() });
            }
            self.player.backpack.add_item(item);
        }

        if let Some(portal_destination) = self
            .grid
            .tile(destination)
            .ok()
            .and_then(|tile| tile.portal_to().cloned())
        {
            let transfer = SessionTransferState::capture(&self.player.backpack, self.id.clone());
            self.events.push(SceneEvent::TransitionRequested {
                destination: portal_destination,
                transfer,
            });
        }

        MoveOutcome::Moved { destination }
    }

    /// Drains the ordered event queue accumulated since the last call.
    pub fn drain_events(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{DamageKind, Item, ItemCategory, TileKind};

    // Layout codes from the original starting matrices: 1 = Path, 2 = Wall.
    fn fixture_config() -> SceneConfig {
        use TileKind::*;
        SceneConfig::empty(
            "maze_1",
            vec![vec![Path, Path, Wall], vec![Wall, Path, Wall]],
            Position::new(1, 0),
        )
        .with_item(Position::new(0, 0), Item::weapon("Fire", DamageKind::Fire))
    }

    fn portal_config() -> SceneConfig {
        use TileKind::*;
        SceneConfig::empty(
            "maze_1",
            vec![vec![Path, Path, Portal], vec![Wall, Path, Wall]],
            Position::new(0, 0),
        )
        .with_portal(Position::new(2, 0), "maze_2")
    }

    #[test]
    fn blocked_moves_leave_the_player_unchanged() {
        let mut scene = MazeScene::new(&fixture_config()).unwrap();

        assert_eq!(scene.handle_move(Direction::Right), MoveOutcome::Blocked);
        assert_eq!(scene.handle_move(Direction::Up), MoveOutcome::Blocked);
        assert_eq!(scene.player().position, Position::new(1, 0));
        assert!(scene.drain_events().is_empty());
    }

    #[test]
    fn arrival_picks_up_the_tile_occupant() {
        let mut scene = MazeScene::new(&fixture_config()).unwrap();

        let outcome = scene.handle_move(Direction::Left);
        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                destination: Position::new(0, 0)
            }
        );

        let items = scene.player().backpack.all_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label, "Fire");
        assert_eq!(items[0].category, ItemCategory::Weapon);

        // The tile occupant is gone and the change was reported.
        assert!(scene.grid().tile(Position::new(0, 0)).unwrap().item().is_none());
        let events = scene.drain_events();
        assert!(events.iter().any(|event| matches!(
            event,
            SceneEvent::ItemCollected { position, .. } if *position == Position::new(0, 0)
        )));
        assert!(events.iter().any(|event| matches!(
            event,
            SceneEvent::TileChanged { tile } if tile.position() == Position::new(0, 0)
        )));
    }

    #[test]
    fn stepping_onto_a_portal_requests_a_transition() {
        let mut scene = MazeScene::new(&portal_config()).unwrap();
        scene.handle_move(Direction::Right);
        let outcome = scene.handle_move(Direction::Right);
        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                destination: Position::new(2, 0)
            }
        );

        let events = scene.drain_events();
        let request = events
            .iter()
            .find_map(|event| match event {
                SceneEvent::TransitionRequested {
                    destination,
                    transfer,
                } => Some((destination, transfer)),
                _ => None,
            })
            .expect("transition requested");

        assert_eq!(request.0, &SceneId::new("maze_2"));
        assert_eq!(request.1.from_scene, SceneId::new("maze_1"));
        assert!(request.1.items.is_empty());
    }

    #[test]
    fn re_entry_lands_on_the_matching_portal() {
        let mut scene = MazeScene::new(&portal_config()).unwrap();
        let transfer = SessionTransferState {
            items: vec![Item::weapon("Fire", DamageKind::Fire)],
            from_scene: SceneId::new("maze_2"),
        };

        scene.enter(Some(transfer));
        assert_eq!(scene.player().position, Position::new(2, 0));
        assert_eq!(scene.player().backpack.len(), 1);
    }

    #[test]
    fn unmatched_origin_falls_back_to_the_default_spawn() {
        let mut scene = MazeScene::new(&portal_config()).unwrap();
        scene.set_player_position(Position::new(1, 1));

        let transfer = SessionTransferState {
            items: Vec::new(),
            from_scene: SceneId::new("somewhere_else"),
        };
        scene.enter(Some(transfer));
        assert_eq!(scene.player().position, scene.default_spawn());
    }

    #[test]
    fn fresh_entry_uses_the_default_spawn() {
        let mut scene = MazeScene::new(&portal_config()).unwrap();
        scene.set_player_position(Position::new(1, 1));

        scene.enter(None);
        assert_eq!(scene.player().position, Position::new(0, 0));
    }

    #[test]
    fn repeated_restores_do_not_duplicate_items() {
        let mut scene = MazeScene::new(&portal_config()).unwrap();
        let transfer = SessionTransferState {
            items: vec![
                Item::weapon("Fire", DamageKind::Fire),
                Item::info_card("Void", DamageKind::Void),
            ],
            from_scene: SceneId::new("maze_2"),
        };

        scene.enter(Some(transfer.clone()));
        scene.enter(Some(transfer.clone()));
        assert_eq!(scene.player().backpack.all_items(), transfer.items);
    }

    #[test]
    fn construction_rejects_bad_spawns() {
        use TileKind::*;
        let outside = SceneConfig::empty(
            "maze_1",
            vec![vec![Path, Wall]],
            Position::new(5, 5),
        );
        assert_eq!(
            MazeScene::new(&outside).unwrap_err(),
            SceneConfigError::SpawnOutOfBounds(Position::new(5, 5))
        );

        let on_wall = SceneConfig::empty(
            "maze_1",
            vec![vec![Path, Wall]],
            Position::new(1, 0),
        );
        assert_eq!(
            MazeScene::new(&on_wall).unwrap_err(),
            SceneConfigError::SpawnNotWalkable(Position::new(1, 0))
        );
    }
}
