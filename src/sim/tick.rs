//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. All physics
//! constants are per-tick, so the same input script always replays to the
//! same state.

use crate::consts::*;

use super::collision::aabb_intersects;
use super::events::{Cue, MusicAction, TickEvents};
use super::physics::step_unit;
use super::stage::Stage;
use super::state::{GamePhase, GameState, Unit};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Left player pressed jump this tick
    pub jump_blue: bool,
    /// Right player pressed jump this tick
    pub jump_red: bool,
    /// Confirm press (retry, next stage, restart)
    pub advance: bool,
}

impl TickInput {
    /// Whether anything was pressed at all
    #[inline]
    pub fn any(&self) -> bool {
        self.jump_blue || self.jump_red || self.advance
    }
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) -> TickEvents {
    let mut events = TickEvents::default();

    state.time_ticks += 1;
    if state.time_ticks % BLINK_INTERVAL_TICKS as u64 == 0 {
        state.blink_on = !state.blink_on;
    }

    match state.phase {
        GamePhase::Title => {
            if input.any() {
                events.cue(Cue::Start);
                set_phase(
                    state,
                    GamePhase::TitleTransition {
                        countdown: INTRO_TICKS,
                    },
                );
            }
        }
        GamePhase::TitleTransition { countdown } => {
            if countdown <= 1 {
                state.load_current_stage();
                events.music(MusicAction::Start);
                set_phase(state, GamePhase::Playing);
            } else {
                state.phase = GamePhase::TitleTransition {
                    countdown: countdown - 1,
                };
            }
        }
        GamePhase::Playing => {
            if input.jump_blue && state.blue.jump() {
                events.cue(Cue::Jump);
            }
            if input.jump_red && state.red.jump() {
                events.cue(Cue::Jump);
            }

            step_unit(&mut state.blue, &state.stage);
            step_unit(&mut state.red, &state.stage);

            // Death outranks a simultaneous clear
            if any_unit_dead(state) {
                events.cue(Cue::Death);
                events.music(MusicAction::Pause);
                set_phase(state, GamePhase::GameOver);
            } else if both_units_on_goal(state) {
                events.music(MusicAction::Stop);
                events.cue(Cue::Clear);
                set_phase(state, GamePhase::Cleared);
            }
        }
        GamePhase::GameOver => {
            if input.advance {
                state.load_current_stage();
                events.music(MusicAction::Resume);
                set_phase(state, GamePhase::Playing);
            }
        }
        GamePhase::Cleared => {
            if input.advance {
                if state.progress.advance() {
                    state.load_current_stage();
                    events.music(MusicAction::Start);
                    set_phase(state, GamePhase::Playing);
                } else {
                    events.music(MusicAction::Stop);
                    events.cue(Cue::Finale);
                    set_phase(state, GamePhase::AllCleared);
                }
            }
        }
        GamePhase::AllCleared => {
            if input.any() {
                state.progress.reset_to_first();
                state.load_current_stage();
                events.music(MusicAction::Start);
                set_phase(state, GamePhase::Playing);
            }
        }
    }

    events
}

fn set_phase(state: &mut GameState, next: GamePhase) {
    log::debug!("phase {:?} -> {:?}", state.phase, next);
    state.phase = next;
}

fn unit_dead(unit: &Unit, stage: &Stage) -> bool {
    if unit.pos.y > SCREEN_HEIGHT {
        return true;
    }
    stage
        .spikes
        .iter()
        .any(|spike| aabb_intersects(unit.pos, unit.size(), spike.pos, spike.size()))
}

fn any_unit_dead(state: &GameState) -> bool {
    unit_dead(&state.blue, &state.stage) || unit_dead(&state.red, &state.stage)
}

/// Clearing only needs goal overlap while grounded, unlike capture which
/// demands full containment. A unit half on the goal's edge still counts.
fn unit_on_goal(unit: &Unit, stage: &Stage) -> bool {
    unit.on_ground
        && stage
            .goals()
            .any(|goal| aabb_intersects(unit.pos, unit.size(), goal.pos, goal.size))
}

fn both_units_on_goal(state: &GameState) -> bool {
    unit_on_goal(&state.blue, &state.stage) && unit_on_goal(&state.red, &state.stage)
}
