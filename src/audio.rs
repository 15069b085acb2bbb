//! Audio dispatch boundary
//!
//! Consumes the cue and music-transport requests the simulation emits each
//! tick. The crate is headless, so dispatch means transport bookkeeping and
//! debug logging; a frontend wires this same surface to a real mixer.

use crate::sim::{Cue, MusicAction, TickEvents};

/// Audio manager for the game
#[derive(Debug)]
pub struct AudioManager {
    master_volume: f32,
    muted: bool,
    bgm_playing: bool,
    bgm_paused: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            muted: false,
            bgm_playing: false,
            bgm_paused: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Whether background music is audibly running
    pub fn bgm_playing(&self) -> bool {
        self.bgm_playing && !self.bgm_paused
    }

    pub fn bgm_paused(&self) -> bool {
        self.bgm_paused
    }

    /// Apply everything one tick asked for
    pub fn handle(&mut self, events: &TickEvents) {
        for cue in &events.cues {
            self.play(*cue);
        }
        for action in &events.music {
            self.music(*action);
        }
    }

    /// Play a one-shot sound cue
    pub fn play(&self, cue: Cue) {
        if self.muted || self.master_volume <= 0.0 {
            return;
        }
        log::debug!("cue: {cue:?}");
    }

    /// Drive the background-music transport. Pause and resume only apply to
    /// music that was started and not yet stopped.
    pub fn music(&mut self, action: MusicAction) {
        match action {
            MusicAction::Start => {
                self.bgm_playing = true;
                self.bgm_paused = false;
            }
            MusicAction::Stop => {
                self.bgm_playing = false;
                self.bgm_paused = false;
            }
            MusicAction::Pause => {
                if self.bgm_playing {
                    self.bgm_paused = true;
                }
            }
            MusicAction::Resume => {
                if self.bgm_playing {
                    self.bgm_paused = false;
                }
            }
        }
        log::debug!("music: {action:?}");
    }
}
