//! External engine seam
//!
//! The core delegates rigid-body dynamics, collision detection, and rendering
//! to an engine behind the [`World`] trait. The simulation only ever asks the
//! world to add/remove bodies, move them, and stop the step generator; the
//! engine calls back into the session with the event structs defined here.

pub mod headless;

pub use headless::HeadlessWorld;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Opaque handle to a body owned by the external world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u64);

/// Role label attached to every body; collision handling keys off this tag
/// rather than body identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Wall,
    Craft,
    Particle,
}

/// Disjoint collision-filter category bits. Two bodies collide only if each
/// one's mask includes the other's category.
pub mod category {
    /// Never assigned to a body; the input-capture pointer masks only this,
    /// so the craft cannot be dragged.
    pub const DEFAULT: u16 = 0x0001;
    pub const WALL: u16 = 0x0002;
    pub const CRAFT: u16 = 0x0004;
    pub const PARTICLE: u16 = 0x0008;
}

/// Category/mask pair for collision filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionFilter {
    pub category: u16,
    pub mask: u16,
}

impl CollisionFilter {
    /// Walls interact with the craft only.
    pub fn wall() -> Self {
        Self {
            category: category::WALL,
            mask: category::CRAFT,
        }
    }

    /// The craft interacts with walls only, never the input pointer.
    pub fn craft() -> Self {
        Self {
            category: category::CRAFT,
            mask: category::WALL,
        }
    }

    /// Trail particles are purely visual and collide with nothing.
    pub fn particle() -> Self {
        Self {
            category: category::PARTICLE,
            mask: 0,
        }
    }

    /// Input-capture filter: grabs only default-category bodies.
    pub fn input_capture() -> Self {
        Self {
            category: category::DEFAULT,
            mask: category::DEFAULT,
        }
    }
}

/// Body geometry understood by the engine's factories.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Rect { width: f32, height: f32 },
    Circle { radius: f32 },
}

/// Visual style hints passed through to the renderer untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub fill: &'static str,
    pub stroke: Option<&'static str>,
    pub line_width: f32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            fill: "#ffffff",
            stroke: None,
            line_width: 1.0,
        }
    }
}

/// Everything the engine needs to create a body: center position, shape,
/// role tag, static flag, filter, and style hints.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyDef {
    pub role: Role,
    pub shape: Shape,
    pub position: Vec2,
    pub is_static: bool,
    pub filter: CollisionFilter,
    pub style: RenderStyle,
}

/// One simulation step notification (`beforeUpdate`).
///
/// `delta_ms` may be absent on the first step of a run; the core substitutes
/// a nominal 60 Hz frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeforeUpdate {
    pub delta_ms: Option<f32>,
    pub timestamp_ms: f64,
}

/// Pointer-down notification from the engine's input capture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerDown {
    pub delta_ms: Option<f32>,
}

/// One member of a reported collision pair: the handle plus the role tag it
/// carried at collision time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairBody {
    pub id: BodyId,
    pub role: Role,
}

/// A colliding pair as reported by `collisionStart`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionPair {
    pub body_a: PairBody,
    pub body_b: PairBody,
}

/// A `collisionStart` notification; an empty pair list is a valid no-op.
#[derive(Debug, Clone, Default)]
pub struct CollisionStart {
    pub pairs: Vec<CollisionPair>,
}

/// The mutation surface the core drives on the external engine.
///
/// Implementations must be single-threaded and synchronous; the core is
/// always called between simulation steps and performs no reentrancy
/// guarding of its own.
pub trait World {
    /// Create a body from a full definition and return its handle.
    fn add_body(&mut self, def: BodyDef) -> BodyId;

    /// Remove a body. Removing an already-removed body is a no-op.
    fn remove_body(&mut self, id: BodyId);

    /// Remove every body and detach the input capture.
    fn clear(&mut self);

    /// Current center position of a body (the engine integrates dynamic
    /// bodies between ticks, so this is the authoritative read).
    fn position(&self, id: BodyId) -> Vec2;

    fn set_position(&mut self, id: BodyId, position: Vec2);

    fn set_velocity(&mut self, id: BodyId, velocity: Vec2);

    /// Attach the pointer input-capture constraint with the given filter.
    fn attach_input_capture(&mut self, filter: CollisionFilter);

    /// Halt the step generator; no further `beforeUpdate` events arrive
    /// until the caller restarts it.
    fn stop_stepping(&mut self);
}
