//! Duo Jump - a two-player cooperative platformer simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collision, game state machine)
//! - `stages`: Authored stage catalog and progression
//! - `render`: Draw-list composition for a renderer frontend
//! - `audio`: Cue and music dispatch boundary
//! - `settings`: Session configuration

pub mod audio;
pub mod render;
pub mod settings;
pub mod sim;
pub mod stages;

pub use settings::SessionConfig;
pub use sim::{GameState, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Screen width in pixels
    pub const SCREEN_WIDTH: f32 = 800.0;
    /// Screen height in pixels
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Nominal tick rate (ticks per second); physics constants below are per-tick
    pub const TICK_RATE: u32 = 60;

    /// Units are square, this many pixels per side
    pub const UNIT_SIZE: f32 = 20.0;

    /// Autonomous walk speed (pixels per tick)
    pub const BASE_SPEED: f32 = 1.0;
    /// Downward acceleration (pixels per tick per tick)
    pub const GRAVITY: f32 = 0.35;
    /// Upward speed applied by a jump (pixels per tick)
    pub const JUMP_STRENGTH: f32 = 13.0;

    /// How far below a platform top a unit still counts as resting on it,
    /// shared by the speed-modifier lookup and the side-blocking exemption
    pub const STAND_TOLERANCE: f32 = 2.0;

    /// Stage authoring grid cell size (same as UNIT_SIZE)
    pub const CELL_SIZE: f32 = 20.0;
    /// Grid columns across the screen
    pub const GRID_WIDTH: i32 = 40;
    /// Grid rows down the screen
    pub const GRID_HEIGHT: i32 = 30;

    /// Walk-speed multiplier on speed-up platforms
    pub const SPEED_UP_MODIFIER: f32 = 1.3;
    /// Walk-speed multiplier on speed-down platforms
    pub const SPEED_DOWN_MODIFIER: f32 = 0.7;

    /// Intro countdown length between the title screen and gameplay
    pub const INTRO_TICKS: u32 = 60;
    /// Prompt text blink cadence (toggles every this many ticks)
    pub const BLINK_INTERVAL_TICKS: u32 = 30;
}

/// Convert a grid cell coordinate (or cell count) to pixels
#[inline]
pub fn grid_to_px(cells: i32) -> f32 {
    cells as f32 * consts::CELL_SIZE
}

/// Convert a pixel coordinate to its containing grid cell
#[inline]
pub fn px_to_grid(px: f32) -> i32 {
    (px / consts::CELL_SIZE) as i32
}
