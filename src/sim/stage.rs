//! Stage geometry: platforms, spikes, and their authoring constructors
//!
//! Stages are immutable once built. Layouts are authored either directly in
//! pixels or on the coarse cell grid (see `crate::grid_to_px`).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::grid_to_px;

/// Static axis-aligned platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub pos: Vec2,
    pub size: Vec2,
    /// Goal platforms capture units instead of colliding with them
    pub is_goal: bool,
    /// Multiplies a grounded unit's walk speed (1.0 = neutral)
    pub speed_modifier: f32,
}

impl Platform {
    /// Solid platform placed in pixels
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
            is_goal: false,
            speed_modifier: 1.0,
        }
    }

    /// Full-width ground strip along the bottom of the screen
    pub fn ground() -> Self {
        Self::new(0.0, SCREEN_HEIGHT - 50.0, SCREEN_WIDTH, 50.0)
    }

    /// Goal zone placed in pixels
    pub fn goal(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            is_goal: true,
            ..Self::new(x, y, width, height)
        }
    }

    /// Solid platform authored in grid cells
    pub fn grid(cx: i32, cy: i32, cw: i32, ch: i32) -> Self {
        Self::new(grid_to_px(cx), grid_to_px(cy), grid_to_px(cw), grid_to_px(ch))
    }

    /// Goal zone authored in grid cells
    pub fn grid_goal(cx: i32, cy: i32, cw: i32, ch: i32) -> Self {
        Self {
            is_goal: true,
            ..Self::grid(cx, cy, cw, ch)
        }
    }

    /// Grid platform that speeds up units standing on it
    pub fn grid_speed_up(cx: i32, cy: i32, cw: i32, ch: i32) -> Self {
        Self {
            speed_modifier: SPEED_UP_MODIFIER,
            ..Self::grid(cx, cy, cw, ch)
        }
    }

    /// Grid platform that slows down units standing on it
    pub fn grid_speed_down(cx: i32, cy: i32, cw: i32, ch: i32) -> Self {
        Self {
            speed_modifier: SPEED_DOWN_MODIFIER,
            ..Self::grid(cx, cy, cw, ch)
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// Lethal hazard occupying one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spike {
    pub pos: Vec2,
}

impl Spike {
    /// Spike authored in grid cells
    pub fn grid(cx: i32, cy: i32) -> Self {
        Self {
            pos: Vec2::new(grid_to_px(cx), grid_to_px(cy)),
        }
    }

    /// Spikes are one cell square
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::splat(CELL_SIZE)
    }
}

/// One authored level: platforms plus spike hazards
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    pub platforms: Vec<Platform>,
    pub spikes: Vec<Spike>,
}

impl Stage {
    /// Iterate goal platforms only
    pub fn goals(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.iter().filter(|p| p.is_goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_constructor_scales_to_pixels() {
        let p = Platform::grid(1, 29, 10, 2);
        assert_eq!(p.pos, Vec2::new(20.0, 580.0));
        assert_eq!(p.size, Vec2::new(200.0, 40.0));
        assert!(!p.is_goal);
        assert_eq!(p.speed_modifier, 1.0);
    }

    #[test]
    fn grid_goal_sets_flag_but_not_modifier() {
        let p = Platform::grid_goal(19, 27, 2, 2);
        assert!(p.is_goal);
        assert_eq!(p.speed_modifier, 1.0);
        assert_eq!(p.right(), 420.0);
        assert_eq!(p.bottom(), 580.0);
    }

    #[test]
    fn speed_constructors_use_the_authored_modifiers() {
        assert_eq!(Platform::grid_speed_up(0, 0, 1, 1).speed_modifier, SPEED_UP_MODIFIER);
        assert_eq!(
            Platform::grid_speed_down(0, 0, 1, 1).speed_modifier,
            SPEED_DOWN_MODIFIER
        );
    }

    #[test]
    fn ground_spans_the_screen() {
        let g = Platform::ground();
        assert_eq!(g.left(), 0.0);
        assert_eq!(g.right(), SCREEN_WIDTH);
        assert_eq!(g.bottom(), SCREEN_HEIGHT);
    }

    #[test]
    fn goals_iterator_filters() {
        let stage = Stage {
            platforms: vec![
                Platform::new(0.0, 550.0, 800.0, 50.0),
                Platform::goal(350.0, 530.0, 100.0, 20.0),
            ],
            spikes: Vec::new(),
        };
        let goals: Vec<_> = stage.goals().collect();
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0].pos, Vec2::new(350.0, 530.0));
    }
}
