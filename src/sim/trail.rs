//! Decorative particle trail
//!
//! A bounded FIFO of non-colliding circle bodies trailing the craft. The
//! trail scrolls with the corridor, expires at the same left threshold as the
//! walls, gains one particle per tick, and evicts the oldest once the cap is
//! exceeded, so it never holds more than `TRAIL_CAP` after a tick.

use std::collections::VecDeque;

use glam::Vec2;

use crate::consts::*;
use crate::engine::{BodyDef, BodyId, CollisionFilter, RenderStyle, Role, Shape, World};

#[derive(Debug, Default)]
pub struct Trail {
    particles: VecDeque<BodyId>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Live particle handles, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = BodyId> + '_ {
        self.particles.iter().copied()
    }

    /// Drop every handle; the caller clears the world alongside.
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Scroll the trail with the corridor, expire off-screen particles, and
    /// append one fresh particle just left of the craft.
    ///
    /// Particle positions are read back from the world before shifting: they
    /// are dynamic bodies, and the engine integrates them between ticks.
    pub fn advance<W: World>(
        &mut self,
        world: &mut W,
        craft_position: Vec2,
        craft_dim: f32,
        delta_s: f32,
    ) {
        let shift = WALL_SPEED_X * delta_s;

        let mut survivors = VecDeque::with_capacity(self.particles.len() + 1);
        for id in self.particles.drain(..) {
            let current = world.position(id);
            let next = Vec2::new(current.x - shift, current.y);
            if next.x < WALL_DELETE_X {
                world.remove_body(id);
            } else {
                world.set_position(id, next);
                survivors.push_back(id);
            }
        }
        self.particles = survivors;

        let spawn = Vec2::new(
            craft_position.x - craft_dim * 0.5 - TRAIL_GAP_PX,
            craft_position.y,
        );
        let id = world.add_body(BodyDef {
            role: Role::Particle,
            shape: Shape::Circle {
                radius: craft_dim * 0.1,
            },
            position: spawn,
            is_static: false,
            filter: CollisionFilter::particle(),
            style: RenderStyle::default(),
        });
        self.particles.push_back(id);

        while self.particles.len() > TRAIL_CAP {
            if let Some(oldest) = self.particles.pop_front() {
                world.remove_body(oldest);
            }
        }
    }
}
