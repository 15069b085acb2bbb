//! Stage catalog and progression
//!
//! The catalog is a flat array indexed by stage number. Index 0 is a debug
//! playground reachable only through configuration; the normal run is
//! 1 through [`STAGE_COUNT`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::settings::SessionConfig;
use crate::sim::Stage;

mod layouts;

/// Number of stages in the normal progression
pub const STAGE_COUNT: usize = 10;
/// Index the run starts from and resets to
pub const FIRST_STAGE: usize = 1;

struct CatalogEntry {
    build: fn() -> Stage,
    blue_start: Vec2,
    red_start: Vec2,
}

const CATALOG: [CatalogEntry; STAGE_COUNT + 1] = [
    CatalogEntry {
        build: layouts::stage_0,
        blue_start: Vec2::new(760.0, 80.0),
        red_start: Vec2::new(620.0, 80.0),
    },
    CatalogEntry {
        build: layouts::stage_1,
        blue_start: Vec2::new(20.0, 20.0),
        red_start: Vec2::new(760.0, 20.0),
    },
    CatalogEntry {
        build: layouts::stage_2,
        blue_start: Vec2::new(20.0, 560.0),
        red_start: Vec2::new(760.0, 560.0),
    },
    CatalogEntry {
        build: layouts::stage_3,
        blue_start: Vec2::new(20.0, 360.0),
        red_start: Vec2::new(760.0, 360.0),
    },
    CatalogEntry {
        build: layouts::stage_4,
        blue_start: Vec2::new(100.0, 100.0),
        red_start: Vec2::new(600.0, 100.0),
    },
    CatalogEntry {
        build: layouts::stage_5,
        blue_start: Vec2::new(100.0, 100.0),
        red_start: Vec2::new(600.0, 100.0),
    },
    CatalogEntry {
        build: layouts::stage_6,
        blue_start: Vec2::new(100.0, 100.0),
        red_start: Vec2::new(600.0, 100.0),
    },
    CatalogEntry {
        build: layouts::stage_7,
        blue_start: Vec2::new(100.0, 100.0),
        red_start: Vec2::new(600.0, 100.0),
    },
    CatalogEntry {
        build: layouts::stage_8,
        blue_start: Vec2::new(100.0, 100.0),
        red_start: Vec2::new(600.0, 100.0),
    },
    CatalogEntry {
        build: layouts::stage_9,
        blue_start: Vec2::new(100.0, 100.0),
        red_start: Vec2::new(600.0, 100.0),
    },
    CatalogEntry {
        build: layouts::stage_10,
        blue_start: Vec2::new(100.0, 100.0),
        red_start: Vec2::new(600.0, 100.0),
    },
];

fn checked_index(index: usize) -> usize {
    if index > STAGE_COUNT {
        log::warn!("stage index {index} out of range, using stage {FIRST_STAGE}");
        FIRST_STAGE
    } else {
        index
    }
}

/// Build the geometry for a stage index. Out-of-range indexes fall back to
/// the first stage rather than panicking.
pub fn geometry(index: usize) -> Stage {
    (CATALOG[checked_index(index)].build)()
}

/// Spawn points for the blue and red units on a stage
pub fn start_positions(index: usize) -> (Vec2, Vec2) {
    let entry = &CATALOG[checked_index(index)];
    (entry.blue_start, entry.red_start)
}

/// Position within the stage run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageProgress {
    current: usize,
    total: usize,
}

impl StageProgress {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            current: checked_index(config.start_stage),
            total: STAGE_COUNT,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Move to the next stage. Returns false from the last stage and leaves
    /// the index unchanged so the caller can treat the run as finished.
    pub fn advance(&mut self) -> bool {
        if self.current < self.total {
            self.current += 1;
            true
        } else {
            false
        }
    }

    pub fn reset_to_first(&mut self) {
        self.current = FIRST_STAGE;
    }

    pub fn geometry(&self) -> Stage {
        geometry(self.current)
    }

    pub fn start_positions(&self) -> (Vec2, Vec2) {
        start_positions(self.current)
    }
}
