//! Draw-list composition
//!
//! Turns a [`GameState`] into flat lists of colored rectangles and text so a
//! renderer frontend only has to blit, never to understand gameplay.

use glam::Vec2;

use crate::consts::*;
use crate::sim::{GamePhase, GameState, Platform};

/// Palette (RGBA, linear 0..1)
pub mod colors {
    /// Clear color behind everything
    pub const BACKGROUND: [f32; 4] = [0.05, 0.05, 0.08, 1.0];
    pub const PLATFORM: [f32; 4] = [0.59, 0.59, 0.59, 1.0];
    pub const SPEED_UP: [f32; 4] = [0.30, 0.85, 0.30, 1.0];
    pub const SPEED_DOWN: [f32; 4] = [0.90, 0.55, 0.15, 1.0];
    pub const GOAL: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const SPIKE: [f32; 4] = [0.85, 0.10, 0.10, 1.0];
    pub const UNIT_BLUE: [f32; 4] = [0.0, 0.39, 1.0, 1.0];
    pub const UNIT_RED: [f32; 4] = [1.0, 0.39, 0.39, 1.0];
    pub const TEXT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    /// Translucent black sheet under state overlays
    pub const OVERLAY: [f32; 4] = [0.0, 0.0, 0.0, 0.59];
}

/// A filled axis-aligned rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct RectShape {
    pub pos: Vec2,
    pub size: Vec2,
    pub color: [f32; 4],
}

/// A text run anchored at its top-left corner
#[derive(Debug, Clone, PartialEq)]
pub struct TextShape {
    pub pos: Vec2,
    pub text: String,
    pub color: [f32; 4],
}

/// One frame's draw list, in painting order
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Frame {
    pub rects: Vec<RectShape>,
    pub texts: Vec<TextShape>,
}

impl Frame {
    fn rect(&mut self, pos: Vec2, size: Vec2, color: [f32; 4]) {
        self.rects.push(RectShape { pos, size, color });
    }

    fn text(&mut self, x: f32, y: f32, text: impl Into<String>) {
        self.texts.push(TextShape {
            pos: Vec2::new(x, y),
            text: text.into(),
            color: colors::TEXT,
        });
    }
}

/// Compose the draw list for the current state
pub fn compose(state: &GameState) -> Frame {
    let mut frame = Frame::default();

    for platform in &state.stage.platforms {
        frame.rect(platform.pos, platform.size, platform_color(platform));
    }
    for spike in &state.stage.spikes {
        frame.rect(spike.pos, spike.size(), colors::SPIKE);
    }
    frame.rect(state.blue.pos, state.blue.size(), colors::UNIT_BLUE);
    frame.rect(state.red.pos, state.red.size(), colors::UNIT_RED);

    match state.phase {
        GamePhase::Title => {
            overlay(&mut frame);
            frame.text(330.0, 260.0, "DUO JUMP");
            if state.blink_on {
                frame.text(300.0, 310.0, "Press any key to start");
            }
        }
        GamePhase::TitleTransition { .. } => {
            // Prompt disappears once the intro countdown is running
            overlay(&mut frame);
            frame.text(330.0, 260.0, "DUO JUMP");
        }
        GamePhase::Playing => {
            frame.text(10.0, 30.0, format!("Stage {}", state.progress.current()));
        }
        GamePhase::GameOver => {
            overlay(&mut frame);
            frame.text(320.0, 270.0, "GAME OVER");
            if state.blink_on {
                frame.text(280.0, 310.0, "Press SPACE to retry");
            }
        }
        GamePhase::Cleared => {
            overlay(&mut frame);
            frame.text(300.0, 270.0, "STAGE CLEARED!");
            if state.blink_on {
                if state.progress.current() < state.progress.total() {
                    frame.text(260.0, 310.0, "Press SPACE for next stage");
                } else {
                    frame.text(275.0, 310.0, "Press SPACE to continue");
                }
            }
        }
        GamePhase::AllCleared => {
            overlay(&mut frame);
            frame.text(270.0, 270.0, "ALL STAGES CLEARED!");
            if state.blink_on {
                frame.text(280.0, 310.0, "Press any key to restart");
            }
        }
    }

    frame
}

fn platform_color(platform: &Platform) -> [f32; 4] {
    if platform.is_goal {
        colors::GOAL
    } else if platform.speed_modifier > 1.0 {
        colors::SPEED_UP
    } else if platform.speed_modifier < 1.0 {
        colors::SPEED_DOWN
    } else {
        colors::PLATFORM
    }
}

fn overlay(frame: &mut Frame) {
    frame.rect(
        Vec2::ZERO,
        Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
        colors::OVERLAY,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SessionConfig;

    fn state_in(phase: GamePhase) -> GameState {
        let mut state = GameState::new(&SessionConfig::default());
        state.phase = phase;
        state
    }

    #[test]
    fn playing_frame_draws_every_stage_shape_and_the_hud() {
        let state = state_in(GamePhase::Playing);
        let frame = compose(&state);
        let expected = state.stage.platforms.len() + state.stage.spikes.len() + 2;
        assert_eq!(frame.rects.len(), expected);
        assert_eq!(frame.texts.len(), 1);
        assert_eq!(frame.texts[0].text, "Stage 1");
        assert!(!frame.rects.iter().any(|r| r.color == colors::OVERLAY));
    }

    #[test]
    fn goal_and_speed_platforms_get_their_own_colors() {
        let mut state = state_in(GamePhase::Playing);
        state.progress = crate::stages::StageProgress::new(&SessionConfig {
            start_stage: 3,
            ..SessionConfig::default()
        });
        state.load_current_stage();
        let frame = compose(&state);
        assert!(frame.rects.iter().any(|r| r.color == colors::GOAL));
        assert!(frame.rects.iter().any(|r| r.color == colors::SPEED_UP));
        assert!(frame.rects.iter().any(|r| r.color == colors::SPEED_DOWN));
        assert!(frame.rects.iter().any(|r| r.color == colors::SPIKE));
    }

    #[test]
    fn game_over_overlay_covers_the_screen() {
        let state = state_in(GamePhase::GameOver);
        let frame = compose(&state);
        let sheet = frame
            .rects
            .iter()
            .find(|r| r.color == colors::OVERLAY)
            .expect("overlay sheet missing");
        assert_eq!(sheet.size, Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        assert!(frame.texts.iter().any(|t| t.text == "GAME OVER"));
        assert!(frame.texts.iter().any(|t| t.text == "Press SPACE to retry"));
    }

    #[test]
    fn blink_hides_the_prompt_line_only() {
        let mut state = state_in(GamePhase::GameOver);
        state.blink_on = false;
        let frame = compose(&state);
        assert!(frame.texts.iter().any(|t| t.text == "GAME OVER"));
        assert!(!frame.texts.iter().any(|t| t.text.starts_with("Press")));
    }

    #[test]
    fn cleared_prompt_depends_on_remaining_stages() {
        let frame = compose(&state_in(GamePhase::Cleared));
        assert!(
            frame
                .texts
                .iter()
                .any(|t| t.text == "Press SPACE for next stage")
        );

        let mut last = GameState::new(&SessionConfig {
            start_stage: crate::stages::STAGE_COUNT,
            ..SessionConfig::default()
        });
        last.phase = GamePhase::Cleared;
        let frame = compose(&last);
        assert!(frame.texts.iter().any(|t| t.text == "Press SPACE to continue"));
    }

    #[test]
    fn countdown_screen_drops_the_start_prompt() {
        let frame = compose(&state_in(GamePhase::Title));
        assert!(frame.texts.iter().any(|t| t.text == "Press any key to start"));

        let frame = compose(&state_in(GamePhase::TitleTransition { countdown: 30 }));
        assert!(frame.texts.iter().any(|t| t.text == "DUO JUMP"));
        assert!(!frame.texts.iter().any(|t| t.text.starts_with("Press")));
    }
}
