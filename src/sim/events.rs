//! Side-effect requests emitted by the simulation
//!
//! The tick function stays pure by returning these instead of touching
//! audio directly. Boundary code drains them after every tick.

use serde::{Deserialize, Serialize};

/// One-shot sound effect requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cue {
    /// A unit left the ground
    Jump,
    /// A unit died to a spike or fell out of the stage
    Death,
    /// Both units reached the goal
    Clear,
    /// The session left the title screen
    Start,
    /// The final stage was cleared
    Finale,
}

/// Background-music transport requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MusicAction {
    Start,
    Stop,
    Pause,
    Resume,
}

/// Everything a single tick asked the outside world to do, in order
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TickEvents {
    pub cues: Vec<Cue>,
    pub music: Vec<MusicAction>,
}

impl TickEvents {
    pub fn is_empty(&self) -> bool {
        self.cues.is_empty() && self.music.is_empty()
    }

    pub(crate) fn cue(&mut self, cue: Cue) {
        self.cues.push(cue);
    }

    pub(crate) fn music(&mut self, action: MusicAction) {
        self.music.push(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_events_are_empty() {
        let events = TickEvents::default();
        assert!(events.is_empty());
        assert!(events.cues.is_empty());
        assert!(events.music.is_empty());
    }

    #[test]
    fn pushes_preserve_order() {
        let mut events = TickEvents::default();
        events.cue(Cue::Start);
        events.music(MusicAction::Start);
        events.cue(Cue::Jump);
        assert_eq!(events.cues, vec![Cue::Start, Cue::Jump]);
        assert_eq!(events.music, vec![MusicAction::Start]);
        assert!(!events.is_empty());
    }
}
