//! Single-threaded session orchestration.
//!
//! The session layer sits between a presentation frontend and `maze-core`:
//! it owns the scene registry and the stack of paused scene instances,
//! forwards directional commands to the active scene, and acts on the
//! transition requests the core emits (pause current, resume-or-launch the
//! destination with the inventory snapshot). Render notifications flow out
//! through an injected [`RenderSink`].
pub mod error;
pub mod input;
pub mod session;

pub use error::SessionError;
pub use input::{Key, direction_for};
pub use session::{NullSink, RenderSink, SessionManager};
