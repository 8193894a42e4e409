//! Obstacle stream
//!
//! Three scrolling collections of static obstacles, each a sliding window
//! over an implicit infinite sequence: the lower and upper corridor walls are
//! dense and count-maintained (always exactly `WALL_COUNT` after a tick),
//! while floating hazards are sparse and probability-spawned. Removal uses a
//! two-pass survivor filter so nothing is spliced mid-iteration.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::Viewport;
use crate::consts::*;
use crate::engine::{BodyDef, BodyId, CollisionFilter, RenderStyle, Role, Shape, World};

/// Which scrolling collection an obstacle belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lane {
    Lower,
    Upper,
    Floating,
}

/// A corridor obstacle: the world handle plus the position the stream owns.
/// Obstacles are static, so the stream's copy is authoritative and mirrored
/// into the world with `set_position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub id: BodyId,
    pub lane: Lane,
    pub position: Vec2,
}

/// Next obstacle position for a lane's sliding window.
///
/// `frontier_x` is the window's current frontier: the rightmost member's
/// center x for the corridor bands, or the accumulated stride past the entry
/// edge for the floating lane. Corridor walls pack one wall width apart with
/// a uniformly random offset into the lane's band; floating hazards enter
/// well off the right edge with a slight jitter around mid-screen.
pub fn next_wall<R: Rng>(lane: Lane, frontier_x: f32, viewport: Viewport, rng: &mut R) -> Vec2 {
    let h = viewport.height;
    match lane {
        Lane::Lower => Vec2::new(
            frontier_x + viewport.wall_width(),
            h - rng.random_range(0.0..h * LOWER_BAND_FRACTION),
        ),
        Lane::Upper => Vec2::new(
            frontier_x + viewport.wall_width(),
            rng.random_range(0.0..h * UPPER_BAND_FRACTION),
        ),
        Lane::Floating => Vec2::new(
            viewport.width * FLOATING_SPAWN_X_FRACTION + frontier_x,
            h / 2.0 + rng.random_range(0.0..h * FLOATING_JITTER_FRACTION),
        ),
    }
}

fn wall_def(lane: Lane, position: Vec2, viewport: Viewport) -> BodyDef {
    let shape = match lane {
        Lane::Lower | Lane::Upper => Shape::Rect {
            width: viewport.wall_width(),
            height: viewport.wall_height(),
        },
        Lane::Floating => Shape::Rect {
            width: viewport.floating_width(),
            height: viewport.floating_height(),
        },
    };
    BodyDef {
        role: Role::Wall,
        shape,
        position,
        is_static: true,
        filter: CollisionFilter::wall(),
        style: RenderStyle {
            fill: WALL_COLOR,
            stroke: Some(WALL_COLOR),
            line_width: 1.0,
        },
    }
}

/// The three obstacle collections, ordered left to right (spawn order).
#[derive(Debug, Default)]
pub struct ObstacleStream {
    pub lower: Vec<Obstacle>,
    pub upper: Vec<Obstacle>,
    pub floating: Vec<Obstacle>,
}

impl ObstacleStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every collection. Callers are expected to clear the world
    /// alongside (a fresh session discards, never repairs).
    pub fn clear(&mut self) {
        self.lower.clear();
        self.upper.clear();
        self.floating.clear();
    }

    /// Build the initial corridor: `WALL_COUNT` walls per band starting at
    /// x = 0, band offsets fully random. Floating hazards start empty.
    pub fn populate<W: World, R: Rng>(&mut self, world: &mut W, rng: &mut R, viewport: Viewport) {
        self.clear();
        // Seed frontier one width left of zero so the first wall lands at x = 0
        top_up_band(
            &mut self.lower,
            Lane::Lower,
            world,
            rng,
            viewport,
            -viewport.wall_width(),
        );
        top_up_band(
            &mut self.upper,
            Lane::Upper,
            world,
            rng,
            viewport,
            -viewport.wall_width(),
        );
    }

    /// Advance every collection by `delta_s` of scroll: shift left, remove
    /// members past the deletion threshold, then top the corridor bands back
    /// up to `WALL_COUNT` and roll the floating spawn dice.
    pub fn advance<W: World, R: Rng>(
        &mut self,
        world: &mut W,
        rng: &mut R,
        viewport: Viewport,
        delta_s: f32,
    ) {
        let shift = WALL_SPEED_X * delta_s;

        shift_and_expire(&mut self.lower, world, shift);
        shift_and_expire(&mut self.upper, world, shift);
        shift_and_expire(&mut self.floating, world, shift);

        // If a pathological delta emptied a band, the window rebuilds just
        // off the right viewport edge rather than on top of the craft.
        top_up_band(&mut self.lower, Lane::Lower, world, rng, viewport, viewport.width);
        top_up_band(&mut self.upper, Lane::Upper, world, rng, viewport, viewport.width);

        if rng.random_ratio(1, FLOATING_SPAWN_ODDS) {
            let stride = self.floating.len() as f32 * viewport.floating_width();
            let position = next_wall(Lane::Floating, stride, viewport, rng);
            let id = world.add_body(wall_def(Lane::Floating, position, viewport));
            self.floating.push(Obstacle {
                id,
                lane: Lane::Floating,
                position,
            });
        }
    }
}

/// Two-pass shift/delete: every member moves left, survivors are collected
/// into a fresh ordered sequence, expired members are removed from the world.
fn shift_and_expire<W: World>(collection: &mut Vec<Obstacle>, world: &mut W, shift: f32) {
    let mut survivors = Vec::with_capacity(collection.len());
    for mut obstacle in collection.drain(..) {
        obstacle.position.x -= shift;
        if obstacle.position.x < WALL_DELETE_X {
            world.remove_body(obstacle.id);
        } else {
            world.set_position(obstacle.id, obstacle.position);
            survivors.push(obstacle);
        }
    }
    *collection = survivors;
}

/// Append fresh walls at the window frontier until the band holds exactly
/// `WALL_COUNT`. `empty_frontier_x` seeds the frontier when the band has no
/// rightmost member to extend from.
fn top_up_band<W: World, R: Rng>(
    collection: &mut Vec<Obstacle>,
    lane: Lane,
    world: &mut W,
    rng: &mut R,
    viewport: Viewport,
    empty_frontier_x: f32,
) {
    while collection.len() < WALL_COUNT {
        let frontier = collection
            .last()
            .map(|o| o.position.x)
            .unwrap_or(empty_frontier_x);
        let position = next_wall(lane, frontier, viewport, rng);
        let id = world.add_body(wall_def(lane, position, viewport));
        collection.push(Obstacle { id, lane, position });
    }
}
