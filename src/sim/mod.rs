//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (platforms in declaration order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod events;
pub mod physics;
pub mod stage;
pub mod state;
pub mod tick;

pub use events::{Cue, MusicAction, TickEvents};
pub use physics::step_unit;
pub use stage::{Platform, Spike, Stage};
pub use state::{Facing, GamePhase, GameState, Unit};
pub use tick::{TickInput, tick};
