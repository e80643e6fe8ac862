//! Scene-stack session manager.
//!
//! Mirrors the original engine's pause/resume scene stack: paused maze
//! instances keep their grid and item placements intact across visits, and a
//! transition resumes an existing instance when one exists rather than
//! constructing a new one.

use std::collections::HashMap;

use tracing::{debug, info};

use maze_core::{
    Direction, GameConfig, Item, MazeScene, MoveOutcome, Position, SceneConfig, SceneEvent,
    SceneId, SessionTransferState, Tile,
};

use crate::error::SessionError;
use crate::input::{Key, direction_for};

/// Notification interface the presentation layer injects.
///
/// The core never inspects engine objects; it forwards tile descriptions and
/// avatar movement here and the frontend decides how to draw them. Tile
/// anchors are precomputed from the configured tile edge length.
pub trait RenderSink {
    fn scene_activated(&mut self, _scene: &SceneId) {}
    fn player_moved(&mut self, _scene: &SceneId, _from: Position, _to: Position) {}
    fn tile_changed(&mut self, _scene: &SceneId, _tile: &Tile, _anchor: (i32, i32)) {}
    fn item_collected(&mut self, _scene: &SceneId, _item: &Item) {}
}

/// Sink that drops every notification; for headless and test use.
#[derive(Debug, Default)]
pub struct NullSink;

impl RenderSink for NullSink {}

/// Owns the scene registry and the live scene table, and routes commands to
/// the active scene.
pub struct SessionManager {
    config: GameConfig,
    registry: HashMap<SceneId, SceneConfig>,
    scenes: HashMap<SceneId, MazeScene>,
    active: Option<SceneId>,
    sink: Box<dyn RenderSink>,
}

impl SessionManager {
    pub fn new(
        configs: impl IntoIterator<Item = SceneConfig>,
        config: GameConfig,
        sink: Box<dyn RenderSink>,
    ) -> Self {
        let registry = configs
            .into_iter()
            .map(|scene| (scene.id.clone(), scene))
            .collect();
        Self {
            config,
            registry,
            scenes: HashMap::new(),
            active: None,
            sink,
        }
    }

    /// Session preloaded with the built-in campaign.
    pub fn with_campaign(sink: Box<dyn RenderSink>) -> Self {
        Self::new(maze_content::campaign(), GameConfig::default(), sink)
    }

    pub fn active_scene(&self) -> Option<&MazeScene> {
        self.active.as_ref().and_then(|id| self.scenes.get(id))
    }

    pub fn scene(&self, id: &SceneId) -> Option<&MazeScene> {
        self.scenes.get(id)
    }

    /// Starts a scene fresh (no transfer state), e.g. from the main menu.
    pub fn start(&mut self, id: &SceneId) -> Result<(), SessionError> {
        let config = self
            .registry
            .get(id)
            .ok_or_else(|| SessionError::UnknownScene(id.clone()))?;

        info!(scene = %id, "starting scene");
        let mut scene = MazeScene::new(config)?;
        scene.enter(None);
        let events = scene.drain_events();
        self.scenes.insert(id.clone(), scene);
        self.active = Some(id.clone());
        self.sink.scene_activated(id);
        self.forward(id, events);
        Ok(())
    }

    /// Maps a key event onto a directional command and executes it.
    /// Unbound keys are ignored.
    pub fn handle_key(&mut self, key: Key) -> Result<Option<MoveOutcome>, SessionError> {
        match direction_for(key) {
            Some(direction) => self.handle_move(direction).map(Some),
            None => Ok(None),
        }
    }

    /// Forwards a move command to the active scene, then acts on whatever
    /// the scene reported: render notifications go to the sink, a transition
    /// request pauses the current scene and resumes or launches the
    /// destination.
    pub fn handle_move(&mut self, direction: Direction) -> Result<MoveOutcome, SessionError> {
        let active = self.active.clone().ok_or(SessionError::NoActiveScene)?;
        let scene = self
            .scenes
            .get_mut(&active)
            .ok_or(SessionError::NoActiveScene)?;

        let outcome = scene.handle_move(direction);
        let events = scene.drain_events();
        let transition = self.forward(&active, events);

        if let Some((destination, transfer)) = transition {
            self.transition(destination, transfer)?;
        }
        Ok(outcome)
    }

    /// Resume-or-launch policy for a transition request.
    ///
    /// The departing scene stays in the live table, paused with all of its
    /// state. An already-visited destination is resumed in place; otherwise
    /// a new instance is constructed from the registry.
    fn transition(
        &mut self,
        destination: SceneId,
        transfer: SessionTransferState,
    ) -> Result<(), SessionError> {
        info!(from = %transfer.from_scene, to = %destination, "scene transition");

        let events = if let Some(scene) = self.scenes.get_mut(&destination) {
            debug!(scene = %destination, "resuming paused instance");
            scene.enter(Some(transfer));
            scene.drain_events()
        } else {
            debug!(scene = %destination, "launching new instance");
            let config = self
                .registry
                .get(&destination)
                .ok_or_else(|| SessionError::UnknownScene(destination.clone()))?;
            let mut scene = MazeScene::new(config)?;
            scene.enter(Some(transfer));
            let events = scene.drain_events();
            self.scenes.insert(destination.clone(), scene);
            events
        };

        self.active = Some(destination.clone());
        self.sink.scene_activated(&destination);
        self.forward(&destination, events);
        Ok(())
    }

    /// Pushes render events into the sink; returns the transition request if
    /// one was among them.
    fn forward(
        &mut self,
        scene: &SceneId,
        events: Vec<SceneEvent>,
    ) -> Option<(SceneId, SessionTransferState)> {
        let mut transition = None;
        for event in events {
            match event {
                SceneEvent::PlayerMoved { from, to } => {
                    self.sink.player_moved(scene, from, to);
                }
                SceneEvent::TileChanged { tile } => {
                    let anchor = tile.position().anchor(self.config.tile_edge_length);
                    self.sink.tile_changed(scene, &tile, anchor);
                }
                SceneEvent::ItemCollected { item, .. } => {
                    self.sink.item_collected(scene, &item);
                }
                SceneEvent::TransitionRequested {
                    destination,
                    transfer,
                } => {
                    transition = Some((destination, transfer));
                }
            }
        }
        transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use maze_core::{DamageKind, TileKind};

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    }

    // Two mazes joined by facing portals, an item in the first.
    fn fixture() -> Vec<SceneConfig> {
        use TileKind::*;
        let a = SceneConfig::empty(
            "maze_a",
            vec![vec![Path, Path, Portal], vec![Wall, Path, Wall]],
            Position::new(0, 0),
        )
        .with_item(Position::new(1, 0), Item::weapon("Fire", DamageKind::Fire))
        .with_portal(Position::new(2, 0), "maze_b");

        let b = SceneConfig::empty(
            "maze_b",
            vec![vec![Portal, Path, Path], vec![Wall, Path, Wall]],
            Position::new(1, 0),
        )
        .with_portal(Position::new(0, 0), "maze_a");

        vec![a, b]
    }

    #[derive(Default)]
    struct Recording {
        activations: Vec<SceneId>,
        collected: Vec<Item>,
        tile_anchors: Vec<(i32, i32)>,
    }

    struct RecordingSink(Rc<RefCell<Recording>>);

    impl RenderSink for RecordingSink {
        fn scene_activated(&mut self, scene: &SceneId) {
            self.0.borrow_mut().activations.push(scene.clone());
        }

        fn item_collected(&mut self, _scene: &SceneId, item: &Item) {
            self.0.borrow_mut().collected.push(item.clone());
        }

        fn tile_changed(&mut self, _scene: &SceneId, _tile: &Tile, anchor: (i32, i32)) {
            self.0.borrow_mut().tile_anchors.push(anchor);
        }
    }

    fn session_with_recorder() -> (SessionManager, Rc<RefCell<Recording>>) {
        init_tracing();
        let recording = Rc::new(RefCell::new(Recording::default()));
        let sink = RecordingSink(Rc::clone(&recording));
        let session = SessionManager::new(fixture(), GameConfig::default(), Box::new(sink));
        (session, recording)
    }

    #[test]
    fn portal_walk_switches_scene_and_carries_the_backpack() {
        let (mut session, recording) = session_with_recorder();
        session.start(&SceneId::new("maze_a")).unwrap();

        // Pick up the item, then step onto the portal.
        session.handle_move(Direction::Right).unwrap();
        session.handle_move(Direction::Right).unwrap();

        let active = session.active_scene().expect("active scene");
        assert_eq!(active.id(), &SceneId::new("maze_b"));
        // Re-entry resolution: land on maze_b's portal back to maze_a.
        assert_eq!(active.player().position, Position::new(0, 0));
        assert_eq!(active.player().backpack.len(), 1);

        let recording = recording.borrow();
        assert_eq!(recording.collected.len(), 1);
        assert_eq!(recording.collected[0].label, "Fire");
        assert_eq!(
            recording.activations,
            vec![SceneId::new("maze_a"), SceneId::new("maze_b")]
        );
        // Anchor of the emptied tile (1, 0) with the default edge length.
        assert_eq!(
            recording.tile_anchors,
            vec![(GameConfig::DEFAULT_TILE_EDGE_LENGTH as i32, 0)]
        );
    }

    #[test]
    fn returning_resumes_the_paused_instance() {
        let (mut session, _) = session_with_recorder();
        session.start(&SceneId::new("maze_a")).unwrap();

        session.handle_move(Direction::Right).unwrap();
        session.handle_move(Direction::Right).unwrap();
        assert_eq!(session.active_scene().unwrap().id(), &SceneId::new("maze_b"));

        // Walk back through maze_b's portal.
        session.handle_move(Direction::Right).unwrap();
        session.handle_move(Direction::Left).unwrap();

        let scene_a = session.active_scene().expect("active scene");
        assert_eq!(scene_a.id(), &SceneId::new("maze_a"));
        // Re-entry lands on the portal that leads back to maze_b.
        assert_eq!(scene_a.player().position, Position::new(2, 0));
        // The paused instance kept its state: the item tile is still empty
        // and the restored backpack holds exactly one copy.
        assert!(
            scene_a
                .grid()
                .tile(Position::new(1, 0))
                .unwrap()
                .item()
                .is_none()
        );
        assert_eq!(scene_a.player().backpack.len(), 1);
    }

    #[test]
    fn keys_map_to_moves_and_unbound_keys_are_ignored() {
        let (mut session, _) = session_with_recorder();
        session.start(&SceneId::new("maze_a")).unwrap();

        let outcome = session.handle_key(Key::Char('d')).unwrap();
        assert_eq!(
            outcome,
            Some(MoveOutcome::Moved {
                destination: Position::new(1, 0)
            })
        );
        assert_eq!(session.handle_key(Key::Char('q')).unwrap(), None);
    }

    #[test]
    fn unknown_scenes_and_missing_active_scene_are_reported() {
        let (mut session, _) = session_with_recorder();
        assert_eq!(
            session.handle_move(Direction::Up),
            Err(SessionError::NoActiveScene)
        );
        assert_eq!(
            session.start(&SceneId::new("nope")),
            Err(SessionError::UnknownScene(SceneId::new("nope")))
        );
    }

    #[test]
    fn campaign_session_starts_at_the_entry_scene() {
        init_tracing();
        let mut session = SessionManager::with_campaign(Box::new(NullSink));
        session.start(&maze_content::entry_scene()).unwrap();
        assert_eq!(
            session.active_scene().unwrap().id(),
            &maze_content::entry_scene()
        );
    }
}
