//! Session phase transitions
//!
//! The two-state lifecycle (Playing, GameOver) expressed as a pure transition
//! function returning the next phase plus the side effects the caller must
//! apply to the engine and HUD. Keeping this pure makes the transition logic
//! testable without any engine present.

use serde::{Deserialize, Serialize};

/// Current phase of a session. A freshly created session sits in `GameOver`
/// with no bodies yet; `setup` + `start` is the only way into `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active run; ticks advance the corridor
    Playing,
    /// Run ended (or not yet begun); the step generator is halted
    GameOver,
}

/// Events that can move the session between phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The caller is (re)starting the engine's run loop
    Start,
    /// A collision pair carried a wall-tagged body
    WallContact,
}

/// Side effects a transition asks the caller to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Halt the engine's step generator
    StopStepping,
    /// Raise the game-over panel
    ShowGameOverPanel,
    /// Drop the game-over panel below the play field
    HideGameOverPanel,
}

/// Pure transition function. Repeated `WallContact` in `GameOver` is
/// idempotent: the pair scan may fire more than once per crash.
pub fn transition(phase: GamePhase, event: SessionEvent) -> (GamePhase, Vec<Effect>) {
    match (phase, event) {
        (GamePhase::GameOver, SessionEvent::Start) => {
            (GamePhase::Playing, vec![Effect::HideGameOverPanel])
        }
        (GamePhase::Playing, SessionEvent::WallContact) => (
            GamePhase::GameOver,
            vec![Effect::StopStepping, Effect::ShowGameOverPanel],
        ),
        (phase, _) => (phase, Vec::new()),
    }
}
