//! Game state and core simulation types
//!
//! Everything needed to resume or replay a session deterministically lives
//! here and derives serde.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::stage::Stage;
use crate::consts::*;
use crate::settings::SessionConfig;
use crate::stages::StageProgress;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title card, waiting for any input
    Title,
    /// Intro countdown between the title and gameplay
    TitleTransition { countdown: u32 },
    /// Active gameplay
    Playing,
    /// A unit died; waiting for the retry input
    GameOver,
    /// Stage cleared; waiting for the advance input
    Cleared,
    /// Every stage cleared; waiting for input to start over
    AllCleared,
}

/// Autonomous walk direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// Sign of horizontal motion: -1.0 for left, 1.0 for right
    #[inline]
    pub fn sign(&self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// One of the two player-controlled bodies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub pos: Vec2,
    pub vel: Vec2,
    pub facing: Facing,
    /// Recomputed from collision every tick, never carried over stale
    pub on_ground: bool,
    /// Captured by a goal; horizontal position is frozen
    pub stopped: bool,
}

impl Unit {
    /// Place a unit at a stage start position with its default walk state
    pub fn spawn(pos: Vec2, facing: Facing) -> Self {
        Self {
            pos,
            vel: Vec2::new(BASE_SPEED * facing.sign(), 0.0),
            facing,
            on_ground: false,
            stopped: false,
        }
    }

    /// Bounding box size (units are square)
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::splat(UNIT_SIZE)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + UNIT_SIZE
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + UNIT_SIZE
    }

    /// Start a jump if standing on ground and not captured. Returns whether
    /// the jump fired so the caller can emit the cue.
    pub fn jump(&mut self) -> bool {
        if self.on_ground && !self.stopped {
            self.vel.y = -JUMP_STRENGTH;
            self.on_ground = false;
            true
        } else {
            false
        }
    }
}

/// The full simulation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Current phase
    pub phase: GamePhase,
    /// Left player's unit, walks right from spawn
    pub blue: Unit,
    /// Right player's unit, walks left from spawn
    pub red: Unit,
    /// Geometry of the stage currently in play
    pub stage: Stage,
    /// Stage index bookkeeping
    pub progress: StageProgress,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Prompt-text blink toggle (cosmetic)
    pub blink_on: bool,
}

impl GameState {
    /// Create a session at the title screen with the configured stage loaded
    pub fn new(config: &SessionConfig) -> Self {
        let progress = StageProgress::new(config);
        let stage = progress.geometry();
        let (blue_start, red_start) = progress.start_positions();
        Self {
            phase: GamePhase::Title,
            blue: Unit::spawn(blue_start, Facing::Right),
            red: Unit::spawn(red_start, Facing::Left),
            stage,
            progress,
            time_ticks: 0,
            blink_on: true,
        }
    }

    /// Reload geometry and respawn both units from the current stage's
    /// catalog entry. Used on retry, advance, and restart transitions.
    pub fn load_current_stage(&mut self) {
        self.stage = self.progress.geometry();
        let (blue_start, red_start) = self.progress.start_positions();
        self.blue = Unit::spawn(blue_start, Facing::Right);
        self.red = Unit::spawn(red_start, Facing::Left);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_walks_toward_facing() {
        let u = Unit::spawn(Vec2::new(100.0, 100.0), Facing::Right);
        assert_eq!(u.vel, Vec2::new(BASE_SPEED, 0.0));
        assert!(!u.on_ground);
        assert!(!u.stopped);

        let u = Unit::spawn(Vec2::new(600.0, 100.0), Facing::Left);
        assert_eq!(u.vel, Vec2::new(-BASE_SPEED, 0.0));
    }

    #[test]
    fn jump_fires_only_from_the_ground() {
        let mut u = Unit::spawn(Vec2::new(100.0, 100.0), Facing::Right);
        assert!(!u.jump(), "airborne jump must be a no-op");
        assert_eq!(u.vel.y, 0.0);

        u.on_ground = true;
        assert!(u.jump());
        assert_eq!(u.vel.y, -JUMP_STRENGTH);
        assert!(!u.on_ground, "jumping leaves the ground");

        // A second press in the same airborne stretch does nothing
        assert!(!u.jump());
        assert_eq!(u.vel.y, -JUMP_STRENGTH);
    }

    #[test]
    fn captured_units_cannot_jump() {
        let mut u = Unit::spawn(Vec2::new(380.0, 560.0), Facing::Right);
        u.on_ground = true;
        u.stopped = true;
        assert!(!u.jump());
        assert_eq!(u.vel.y, 0.0);
    }

    #[test]
    fn new_session_starts_at_title() {
        let state = GameState::new(&SessionConfig::default());
        assert_eq!(state.phase, GamePhase::Title);
        assert_eq!(state.progress.current(), 1);
        assert!(!state.stage.platforms.is_empty());
    }

    #[test]
    fn load_current_stage_respawns_units() {
        let mut state = GameState::new(&SessionConfig::default());
        state.blue.pos = Vec2::new(0.0, 0.0);
        state.blue.stopped = true;
        state.load_current_stage();
        assert!(!state.blue.stopped);
        assert_eq!(state.blue.facing, Facing::Right);
        assert_eq!(state.red.facing, Facing::Left);
    }
}
