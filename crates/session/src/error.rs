use maze_core::{SceneConfigError, SceneId};

/// Errors surfaced by the session layer.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The requested scene is not in the registry.
    #[error("unknown scene {0}")]
    UnknownScene(SceneId),

    /// A command arrived before any scene was started.
    #[error("no active scene")]
    NoActiveScene,

    /// Building a scene from its static configuration failed.
    #[error("scene construction failed: {0}")]
    Scene(#[from] SceneConfigError),
}
