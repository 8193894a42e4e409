//! Per-step orchestration
//!
//! The engine delivers one `beforeUpdate` per simulation step; the tick
//! advances the obstacle stream, then the trail, then refreshes the elapsed
//! clock, in that order. Nothing here blocks or reenters: each tick runs to
//! completion on the engine's thread.

use super::state::{GamePhase, Session};
use crate::consts::*;
use crate::engine::{BeforeUpdate, World};
use crate::ui::Hud;

impl Session {
    /// Advance one simulation step. A missing delta falls back to the
    /// nominal 60 Hz frame. Outside `Playing` this is a no-op: the runner is
    /// normally stopped anyway, but a stray late event must not mutate a
    /// dead session.
    pub fn tick<W: World, H: Hud>(&mut self, world: &mut W, hud: &mut H, event: &BeforeUpdate) {
        if self.phase() != GamePhase::Playing {
            return;
        }
        let Some(craft_id) = self.craft().map(|c| c.id) else {
            return;
        };

        let delta_s = event.delta_ms.unwrap_or(NOMINAL_FRAME_MS) / 1000.0;
        let viewport = self.viewport();

        self.stream.advance(world, &mut self.rng, viewport, delta_s);

        let craft_position = world.position(craft_id);
        self.trail
            .advance(world, craft_position, viewport.craft_dim(), delta_s);

        hud.set_clock(&format_elapsed(event.timestamp_ms));
    }
}

/// Render total elapsed simulated time as `{H}h:{M}m:{S}s`.
pub fn format_elapsed(timestamp_ms: f64) -> String {
    let total_seconds = (timestamp_ms / 1000.0).round() as u64;
    let hours = total_seconds / 3600;
    let rem = total_seconds % 3600;
    let minutes = rem / 60;
    let seconds = rem % 60;
    format!("{hours}h:{minutes}m:{seconds}s")
}
