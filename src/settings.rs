//! Session configuration
//!
//! How a session is launched: which stage to begin on and whether audio
//! starts muted. Read once at startup; the simulation never consults the
//! environment itself.

use serde::{Deserialize, Serialize};

use crate::stages::{FIRST_STAGE, STAGE_COUNT};

/// Launch options for one play session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Stage to load first. 0 selects the debug playground, which is
    /// otherwise unreachable.
    pub start_stage: usize,
    /// Start with all audio muted
    pub muted: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            start_stage: FIRST_STAGE,
            muted: false,
        }
    }
}

impl SessionConfig {
    /// Clamp fields to usable values, warning on anything out of range
    pub fn validate(mut self) -> Self {
        if self.start_stage > STAGE_COUNT {
            log::warn!(
                "start stage {} does not exist, starting from {FIRST_STAGE}",
                self.start_stage
            );
            self.start_stage = FIRST_STAGE;
        }
        self
    }

    /// Build a config from the environment: `DUOJUMP_STAGE` picks the
    /// starting stage, `DUOJUMP_MUTE` silences audio.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var("DUOJUMP_STAGE") {
            match raw.parse::<usize>() {
                Ok(stage) => config.start_stage = stage,
                Err(_) => log::warn!("ignoring unparseable DUOJUMP_STAGE={raw:?}"),
            }
        }
        if let Ok(raw) = std::env::var("DUOJUMP_MUTE") {
            config.muted = matches!(raw.as_str(), "1" | "true" | "yes");
        }
        config.validate()
    }
}
