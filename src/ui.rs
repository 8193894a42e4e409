//! HUD side effects
//!
//! The core writes two things to the surrounding UI: the elapsed-time
//! readout every tick, and the game-over panel toggles on phase transitions.
//! Both go through the [`Hud`] trait so the session stays testable without a
//! document to mutate.

/// UI surface the session writes to. Implementations are synchronous and
/// must tolerate repeated show/hide calls.
pub trait Hud {
    /// Replace the elapsed-time readout (already formatted `{H}h:{M}m:{S}s`).
    fn set_clock(&mut self, text: &str);

    /// Raise the game-over panel above the play field.
    fn show_game_over(&mut self);

    /// Drop the game-over panel back below the play field.
    fn hide_game_over(&mut self);
}

/// In-memory HUD that records the last writes; used by tests and the demo
/// driver.
#[derive(Debug, Default)]
pub struct RecordingHud {
    pub clock: String,
    pub game_over_visible: bool,
}

impl Hud for RecordingHud {
    fn set_clock(&mut self, text: &str) {
        self.clock.clear();
        self.clock.push_str(text);
    }

    fn show_game_over(&mut self) {
        self.game_over_visible = true;
    }

    fn hide_game_over(&mut self) {
        self.game_over_visible = false;
    }
}
