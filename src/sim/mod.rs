//! Deterministic game core
//!
//! All gameplay logic lives here. This module must stay pure and predictable:
//! - Seeded RNG only (one `Pcg32` owned by the session)
//! - Single-threaded, advanced synchronously from engine callbacks
//! - No rendering, physics integration, or DOM dependencies

pub mod craft;
pub mod phase;
pub mod state;
pub mod stream;
pub mod tick;
pub mod trail;

pub use craft::Craft;
pub use phase::{Effect, SessionEvent, transition};
pub use state::{GamePhase, Session};
pub use stream::{Lane, Obstacle, ObstacleStream, next_wall};
pub use tick::format_elapsed;
pub use trail::Trail;
