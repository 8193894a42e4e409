//! Heli Run - an endless side-scrolling corridor game core
//!
//! Core modules:
//! - `sim`: game state, obstacle streaming, particle trail, tick coordination
//! - `engine`: the seam to the external rigid-body physics/render engine
//! - `ui`: HUD side effects (elapsed-time readout, game-over panel)
//!
//! The crate owns no physics integration, collision detection, or rendering;
//! those live behind the [`engine::World`] trait. The simulation itself is
//! deterministic: seeded RNG only, single-threaded, advanced one tick at a
//! time from the engine's `beforeUpdate` callback.

pub mod engine;
pub mod sim;
pub mod ui;

pub use sim::{GamePhase, Session};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Game configuration constants
pub mod consts {
    /// Wall obstacles kept alive per band (lower and upper)
    pub const WALL_COUNT: usize = 21;
    /// Bodies scrolled left of this x are removed from world and collection
    pub const WALL_DELETE_X: f32 = -50.0;
    /// Leftward corridor scroll speed (px/s)
    pub const WALL_SPEED_X: f32 = 350.0;
    /// Lower wall y-offset band, as a fraction of viewport height
    pub const LOWER_BAND_FRACTION: f32 = 0.07;
    /// Upper wall y-offset band, as a fraction of viewport height
    pub const UPPER_BAND_FRACTION: f32 = 0.05;
    /// A floating wall spawns with probability 1/FLOATING_SPAWN_ODDS per tick
    pub const FLOATING_SPAWN_ODDS: u32 = 70;
    /// Floating walls enter this far past the right edge (fraction of width)
    pub const FLOATING_SPAWN_X_FRACTION: f32 = 1.1;
    /// Vertical jitter band around mid-screen (fraction of viewport height)
    pub const FLOATING_JITTER_FRACTION: f32 = 0.02;
    /// Upward impulse on input, at a nominal 60 Hz frame (px/s)
    pub const CRAFT_IMPULSE: f32 = 450.0;
    /// Fallback frame time when an event carries no delta (ms)
    pub const NOMINAL_FRAME_MS: f32 = 1000.0 / 60.0;
    /// Maximum decorative trail particles alive at once
    pub const TRAIL_CAP: usize = 10;
    /// Gap between the craft's left edge and a fresh trail particle (px)
    pub const TRAIL_GAP_PX: f32 = 10.0;
    /// Corridor wall fill/stroke color
    pub const WALL_COLOR: &str = "#772323";
}

/// Viewport dimensions plus the body sizes derived from them.
///
/// All obstacle and craft dimensions scale off the viewport, matching the
/// window-relative sizing of the original game.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The larger screen dimension; body sizes key off this so portrait and
    /// landscape viewports get comparable obstacles.
    #[inline]
    pub fn wide_dim(&self) -> f32 {
        self.width.max(self.height)
    }

    /// Corridor wall width (also the horizontal spacing between walls)
    #[inline]
    pub fn wall_width(&self) -> f32 {
        self.wide_dim() * 0.05
    }

    /// Corridor wall height
    #[inline]
    pub fn wall_height(&self) -> f32 {
        self.height * 0.4
    }

    /// Floating obstacle width
    #[inline]
    pub fn floating_width(&self) -> f32 {
        self.wide_dim() * 0.03
    }

    /// Floating obstacle height
    #[inline]
    pub fn floating_height(&self) -> f32 {
        self.height * 0.15
    }

    /// Side length of the (square) craft
    #[inline]
    pub fn craft_dim(&self) -> f32 {
        self.wide_dim() * 0.03
    }

    /// Screen center, where a fresh craft spawns
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}
