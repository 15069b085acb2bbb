//! Duo Jump entry point
//!
//! Headless demo run: drives a session with scripted input to exercise the
//! whole state machine end to end. A renderer frontend replaces the script
//! with real key events and draws each composed frame.

use duo_jump::SessionConfig;
use duo_jump::audio::AudioManager;
use duo_jump::consts::TICK_RATE;
use duo_jump::render;
use duo_jump::sim::{GamePhase, GameState, TickInput, tick};

fn main() {
    env_logger::init();

    let config = SessionConfig::from_env();
    log::info!(
        "Duo Jump starting on stage {} (muted: {})",
        config.start_stage,
        config.muted
    );

    let mut state = GameState::new(&config);
    let mut audio = AudioManager::new();
    audio.set_muted(config.muted);

    let max_ticks = TICK_RATE as u64 * 30;
    for n in 0..max_ticks {
        let input = scripted_input(n, &state);
        let events = tick(&mut state, &input);
        audio.handle(&events);
        if state.phase == GamePhase::AllCleared {
            break;
        }
    }

    let frame = render::compose(&state);
    log::info!(
        "finished after {} ticks in {:?} on stage {} ({} rects, {} texts composed)",
        state.time_ticks,
        state.phase,
        state.progress.current(),
        frame.rects.len(),
        frame.texts.len()
    );
}

/// Blind input script: confirm through menu screens, hop on staggered
/// periods during play. Enough to tour the state machine without being any
/// good at the game.
fn scripted_input(n: u64, state: &GameState) -> TickInput {
    match state.phase {
        GamePhase::Title => TickInput {
            advance: true,
            ..TickInput::default()
        },
        GamePhase::GameOver | GamePhase::Cleared => TickInput {
            advance: n % 30 == 0,
            ..TickInput::default()
        },
        GamePhase::Playing => TickInput {
            jump_blue: n % 90 == 0,
            jump_red: n % 130 == 0,
            advance: false,
        },
        GamePhase::TitleTransition { .. } | GamePhase::AllCleared => TickInput::default(),
    }
}
