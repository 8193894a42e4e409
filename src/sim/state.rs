//! Session state and lifecycle
//!
//! One owned struct holds everything the original game kept in module-level
//! globals: the three obstacle collections, the trail, the craft handle, the
//! seeded RNG, and the phase. `setup` is a full reset (discard and rebuild),
//! never an incremental repair.

pub use super::phase::GamePhase;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::craft::Craft;
use super::phase::{Effect, SessionEvent, transition};
use super::stream::ObstacleStream;
use super::trail::Trail;
use crate::Viewport;
use crate::engine::{CollisionFilter, CollisionStart, PointerDown, Role, World};
use crate::ui::Hud;

/// A complete game session. All mutation happens synchronously from engine
/// callbacks on a single thread; invariants hold between callbacks, not
/// within them.
#[derive(Debug)]
pub struct Session {
    seed: u64,
    viewport: Viewport,
    pub(crate) rng: Pcg32,
    phase: GamePhase,
    pub stream: ObstacleStream,
    pub trail: Trail,
    craft: Option<Craft>,
}

impl Session {
    /// Idle pre-session state: no bodies anywhere, phase `GameOver`.
    pub fn new(seed: u64, viewport: Viewport) -> Self {
        Self {
            seed,
            viewport,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::GameOver,
            stream: ObstacleStream::new(),
            trail: Trail::new(),
            craft: None,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn craft(&self) -> Option<&Craft> {
        self.craft.as_ref()
    }

    /// Full reset for a new run: clear the world and every collection, build
    /// the initial corridor with fresh random band offsets, spawn a centered
    /// craft, and re-attach the input capture. The phase flips to `Playing`
    /// only via [`Session::start`], once the caller restarts the runner.
    pub fn setup<W: World>(&mut self, world: &mut W) {
        world.clear();
        self.stream.clear();
        self.trail.clear();
        self.craft = None;

        self.stream.populate(world, &mut self.rng, self.viewport);
        self.craft = Some(Craft::spawn(world, self.viewport));
        world.attach_input_capture(CollisionFilter::input_capture());

        log::info!(
            "session reset: {}+{} corridor walls, craft at {:?}",
            self.stream.lower.len(),
            self.stream.upper.len(),
            self.viewport.center(),
        );
    }

    /// Transition to `Playing`. The caller is responsible for (re)starting
    /// the engine's step generator alongside.
    pub fn start<H: Hud>(&mut self, hud: &mut H) {
        let (next, effects) = transition(self.phase, SessionEvent::Start);
        self.phase = next;
        for effect in effects {
            if effect == Effect::HideGameOverPanel {
                hud.hide_game_over();
            }
        }
    }

    /// Discard the session's bodies entirely and return to idle.
    pub fn teardown<W: World>(&mut self, world: &mut W) {
        world.clear();
        self.stream.clear();
        self.trail.clear();
        self.craft = None;
        self.phase = GamePhase::GameOver;
    }

    /// `collisionStart` handler. Filtering guarantees walls only ever touch
    /// the craft, so any wall-tagged member of any pair is terminal; which
    /// side carries the tag does not matter. An empty pair list is a no-op.
    pub fn on_collision_start<W: World, H: Hud>(
        &mut self,
        world: &mut W,
        hud: &mut H,
        event: &CollisionStart,
    ) {
        let wall_hit = event
            .pairs
            .iter()
            .any(|pair| pair.body_a.role == Role::Wall || pair.body_b.role == Role::Wall);
        if !wall_hit {
            return;
        }

        let (next, effects) = transition(self.phase, SessionEvent::WallContact);
        if next != self.phase {
            log::info!("wall contact: run over");
        }
        self.phase = next;
        for effect in effects {
            match effect {
                Effect::StopStepping => world.stop_stepping(),
                Effect::ShowGameOverPanel => hud.show_game_over(),
                Effect::HideGameOverPanel => hud.hide_game_over(),
            }
        }
    }

    /// Pointer-down handler: vertical impulse on the craft and the trail.
    pub fn on_pointer_down<W: World>(&mut self, world: &mut W, event: &PointerDown) {
        if let Some(craft) = &self.craft {
            craft.apply_impulse(world, self.trail.iter(), event.delta_ms);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::engine::{
        BeforeUpdate, BodyId, CollisionPair, HeadlessWorld, PairBody,
    };
    use crate::ui::RecordingHud;
    use glam::Vec2;

    fn pair(role_a: Role, role_b: Role) -> CollisionPair {
        CollisionPair {
            body_a: PairBody {
                id: BodyId(900),
                role: role_a,
            },
            body_b: PairBody {
                id: BodyId(901),
                role: role_b,
            },
        }
    }

    fn playing_session(world: &mut HeadlessWorld) -> (Session, RecordingHud) {
        let mut hud = RecordingHud::default();
        let mut session = Session::new(42, Viewport::new(1280.0, 720.0));
        session.setup(world);
        session.start(&mut hud);
        (session, hud)
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = Session::new(1, Viewport::new(800.0, 600.0));
        assert_eq!(session.phase(), GamePhase::GameOver);
        assert!(session.craft().is_none());
        assert!(session.stream.lower.is_empty());
    }

    #[test]
    fn test_setup_yields_fresh_world_regardless_of_prior_state() {
        let mut world = HeadlessWorld::new();
        let (mut session, mut hud) = playing_session(&mut world);

        // Dirty the session: run a while, then crash it
        for frame in 0..120 {
            let event = BeforeUpdate {
                delta_ms: Some(NOMINAL_FRAME_MS),
                timestamp_ms: frame as f64 * NOMINAL_FRAME_MS as f64,
            };
            session.tick(&mut world, &mut hud, &event);
        }
        session.on_collision_start(
            &mut world,
            &mut hud,
            &CollisionStart {
                pairs: vec![pair(Role::Wall, Role::Craft)],
            },
        );
        assert_eq!(session.phase(), GamePhase::GameOver);

        session.setup(&mut world);
        assert_eq!(session.stream.lower.len(), WALL_COUNT);
        assert_eq!(session.stream.upper.len(), WALL_COUNT);
        assert!(session.stream.floating.is_empty());
        assert!(session.trail.is_empty());
        let craft = session.craft().unwrap();
        assert_eq!(world.position(craft.id), Vec2::new(640.0, 360.0));
        // Walls + craft only
        assert_eq!(world.body_count(), WALL_COUNT * 2 + 1);
        assert!(world.input_capture().is_some());
    }

    #[test]
    fn test_wall_pair_transitions_to_game_over_either_side() {
        for wall_side_a in [true, false] {
            let mut world = HeadlessWorld::new();
            let (mut session, mut hud) = playing_session(&mut world);
            let reported = if wall_side_a {
                pair(Role::Wall, Role::Craft)
            } else {
                pair(Role::Craft, Role::Wall)
            };

            session.on_collision_start(
                &mut world,
                &mut hud,
                &CollisionStart {
                    pairs: vec![pair(Role::Particle, Role::Particle), reported],
                },
            );
            assert_eq!(session.phase(), GamePhase::GameOver);
            assert!(world.stepping_stopped());
            assert!(hud.game_over_visible);
        }
    }

    #[test]
    fn test_non_wall_pair_leaves_playing() {
        let mut world = HeadlessWorld::new();
        let (mut session, mut hud) = playing_session(&mut world);

        session.on_collision_start(
            &mut world,
            &mut hud,
            &CollisionStart {
                pairs: vec![pair(Role::Particle, Role::Craft)],
            },
        );
        assert_eq!(session.phase(), GamePhase::Playing);
        assert!(!world.stepping_stopped());
        assert!(!hud.game_over_visible);
    }

    #[test]
    fn test_empty_pair_list_is_noop() {
        let mut world = HeadlessWorld::new();
        let (mut session, mut hud) = playing_session(&mut world);

        session.on_collision_start(&mut world, &mut hud, &CollisionStart::default());
        assert_eq!(session.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_repeated_wall_contact_is_idempotent() {
        let mut world = HeadlessWorld::new();
        let (mut session, mut hud) = playing_session(&mut world);
        let event = CollisionStart {
            pairs: vec![pair(Role::Wall, Role::Craft)],
        };

        session.on_collision_start(&mut world, &mut hud, &event);
        session.on_collision_start(&mut world, &mut hud, &event);
        assert_eq!(session.phase(), GamePhase::GameOver);
    }

    #[test]
    fn test_restart_cycle_hides_panel_and_resumes() {
        let mut world = HeadlessWorld::new();
        let (mut session, mut hud) = playing_session(&mut world);

        session.on_collision_start(
            &mut world,
            &mut hud,
            &CollisionStart {
                pairs: vec![pair(Role::Wall, Role::Craft)],
            },
        );
        assert!(hud.game_over_visible);

        session.setup(&mut world);
        world.resume_stepping();
        session.start(&mut hud);
        assert_eq!(session.phase(), GamePhase::Playing);
        assert!(!hud.game_over_visible);
    }

    #[test]
    fn test_teardown_returns_to_idle() {
        let mut world = HeadlessWorld::new();
        let (mut session, _hud) = playing_session(&mut world);

        session.teardown(&mut world);
        assert_eq!(session.phase(), GamePhase::GameOver);
        assert!(session.craft().is_none());
        assert_eq!(world.body_count(), 0);
    }

    #[test]
    fn test_pointer_down_reaches_craft() {
        let mut world = HeadlessWorld::new();
        let (mut session, _hud) = playing_session(&mut world);

        session.on_pointer_down(
            &mut world,
            &PointerDown {
                delta_ms: Some(1000.0 / 60.0),
            },
        );
        let craft_id = session.craft().unwrap().id;
        assert_eq!(world.velocity(craft_id), Vec2::new(0.0, -450.0));
    }
}
