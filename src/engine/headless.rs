//! Bookkeeping [`World`] implementation with no physics behind it.
//!
//! Stores body definitions and positions in a map so the session logic can be
//! driven headless: by the demo binary and by every test in the crate. The
//! engine-owned concerns (integration, collision detection, rendering) simply
//! do not happen here.

use std::collections::HashMap;

use glam::Vec2;

use super::{BodyDef, BodyId, CollisionFilter, World};

/// Live body record inside the headless world.
#[derive(Debug, Clone)]
pub struct BodyState {
    pub def: BodyDef,
    pub position: Vec2,
    pub velocity: Vec2,
}

/// In-memory world: a map of bodies plus the runner/input-capture flags the
/// core toggles.
#[derive(Debug, Default)]
pub struct HeadlessWorld {
    bodies: HashMap<BodyId, BodyState>,
    next_id: u64,
    input_capture: Option<CollisionFilter>,
    stepping_stopped: bool,
}

impl HeadlessWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a body handle is still live.
    pub fn contains(&self, id: BodyId) -> bool {
        self.bodies.contains_key(&id)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn body(&self, id: BodyId) -> Option<&BodyState> {
        self.bodies.get(&id)
    }

    pub fn velocity(&self, id: BodyId) -> Vec2 {
        self.bodies.get(&id).map(|b| b.velocity).unwrap_or(Vec2::ZERO)
    }

    pub fn input_capture(&self) -> Option<CollisionFilter> {
        self.input_capture
    }

    pub fn stepping_stopped(&self) -> bool {
        self.stepping_stopped
    }

    /// Restart the step generator, as the surrounding runner would on a
    /// start/restart signal.
    pub fn resume_stepping(&mut self) {
        self.stepping_stopped = false;
    }
}

impl World for HeadlessWorld {
    fn add_body(&mut self, def: BodyDef) -> BodyId {
        self.next_id += 1;
        let id = BodyId(self.next_id);
        let position = def.position;
        self.bodies.insert(
            id,
            BodyState {
                def,
                position,
                velocity: Vec2::ZERO,
            },
        );
        id
    }

    fn remove_body(&mut self, id: BodyId) {
        self.bodies.remove(&id);
    }

    fn clear(&mut self) {
        self.bodies.clear();
        self.input_capture = None;
    }

    fn position(&self, id: BodyId) -> Vec2 {
        self.bodies.get(&id).map(|b| b.position).unwrap_or(Vec2::ZERO)
    }

    fn set_position(&mut self, id: BodyId, position: Vec2) {
        if let Some(body) = self.bodies.get_mut(&id) {
            body.position = position;
        }
    }

    fn set_velocity(&mut self, id: BodyId, velocity: Vec2) {
        if let Some(body) = self.bodies.get_mut(&id) {
            body.velocity = velocity;
        }
    }

    fn attach_input_capture(&mut self, filter: CollisionFilter) {
        self.input_capture = Some(filter);
    }

    fn stop_stepping(&mut self) {
        self.stepping_stopped = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{RenderStyle, Role, Shape};

    fn rect_def(x: f32) -> BodyDef {
        BodyDef {
            role: Role::Wall,
            shape: Shape::Rect {
                width: 10.0,
                height: 10.0,
            },
            position: Vec2::new(x, 0.0),
            is_static: true,
            filter: CollisionFilter::wall(),
            style: RenderStyle::default(),
        }
    }

    #[test]
    fn test_add_remove_roundtrip() {
        let mut world = HeadlessWorld::new();
        let id = world.add_body(rect_def(5.0));
        assert!(world.contains(id));
        assert_eq!(world.position(id), Vec2::new(5.0, 0.0));

        world.remove_body(id);
        assert!(!world.contains(id));
        // Removing twice is a no-op
        world.remove_body(id);
        assert_eq!(world.body_count(), 0);
    }

    #[test]
    fn test_clear_detaches_input_capture() {
        let mut world = HeadlessWorld::new();
        world.add_body(rect_def(0.0));
        world.attach_input_capture(CollisionFilter::input_capture());
        assert!(world.input_capture().is_some());

        world.clear();
        assert_eq!(world.body_count(), 0);
        assert!(world.input_capture().is_none());
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut world = HeadlessWorld::new();
        let a = world.add_body(rect_def(0.0));
        world.remove_body(a);
        let b = world.add_body(rect_def(1.0));
        assert_ne!(a, b);
    }
}
