//! Player craft
//!
//! One long-lived dynamic body. Horizontal motion and gravity belong to the
//! external engine; the controller's only job is the vertical impulse on
//! pointer input, mirrored onto the live trail particles so the trail lifts
//! with the craft.

use glam::Vec2;

use crate::Viewport;
use crate::consts::*;
use crate::engine::{BodyDef, BodyId, CollisionFilter, RenderStyle, Role, Shape, World};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Craft {
    pub id: BodyId,
    pub dim: f32,
}

impl Craft {
    /// Create a fresh craft at screen center. It collides with walls only;
    /// the input-capture pointer ignores it entirely.
    pub fn spawn<W: World>(world: &mut W, viewport: Viewport) -> Self {
        let dim = viewport.craft_dim();
        let id = world.add_body(BodyDef {
            role: Role::Craft,
            shape: Shape::Rect {
                width: dim,
                height: dim,
            },
            position: viewport.center(),
            is_static: false,
            filter: CollisionFilter::craft(),
            style: RenderStyle::default(),
        });
        Self { id, dim }
    }

    /// Apply the upward input impulse: `CRAFT_IMPULSE` scaled by the frame's
    /// delta-to-nominal ratio, so a full 60 Hz frame yields exactly
    /// -450 px/s and a half frame half that. Events with no delta fall back
    /// to the nominal frame. The same velocity lands on every live particle.
    pub fn apply_impulse<W: World>(
        &self,
        world: &mut W,
        particles: impl Iterator<Item = BodyId>,
        delta_ms: Option<f32>,
    ) {
        let scale = delta_ms.unwrap_or(NOMINAL_FRAME_MS) / NOMINAL_FRAME_MS;
        let velocity = Vec2::new(0.0, -(CRAFT_IMPULSE * scale));
        world.set_velocity(self.id, velocity);
        for particle in particles {
            world.set_velocity(particle, velocity);
        }
    }
}
