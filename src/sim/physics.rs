//! Per-unit physics resolution against static stage geometry
//!
//! The step order inside `step_unit` is load-bearing: the speed-modifier
//! lookup reads the previous tick's ground contact, landing runs before side
//! blocking, and goal capture runs last against the settled position.
//! Reordering changes behavior at platform edges.

use crate::consts::*;

use super::collision::{aabb_contains, rests_on, spans_overlap};
use super::stage::Stage;
use super::state::{Facing, Unit};

/// Advance one unit by one tick against the stage
pub fn step_unit(unit: &mut Unit, stage: &Stage) {
    // 1. Gravity
    unit.vel.y += GRAVITY;

    // 2. Walk-speed modifier from the platform the unit stood on last tick
    let modifier = if unit.on_ground {
        standing_modifier(unit, stage)
    } else {
        1.0
    };

    // 3. Horizontal update, frozen once captured
    if !unit.stopped {
        unit.vel.x = BASE_SPEED * unit.facing.sign() * modifier;
        unit.pos.x += unit.vel.x;
    } else {
        unit.vel.x = 0.0;
    }

    // 4. Screen-edge bounce, the unit's only autonomous steering
    if !unit.stopped {
        if unit.pos.x <= 0.0 {
            unit.pos.x = 0.0;
            unit.facing = Facing::Right;
        } else if unit.pos.x >= SCREEN_WIDTH - UNIT_SIZE {
            unit.pos.x = SCREEN_WIDTH - UNIT_SIZE;
            unit.facing = Facing::Left;
        }
    }

    // 5. Vertical update, unconditional even when captured; the landing pass
    //    below re-snaps a captured unit every tick
    unit.pos.y += unit.vel.y;

    // 6. Landing. Ground contact is recomputed from scratch every tick; the
    //    first matching platform settles the unit and zeroes its fall, which
    //    disqualifies every later candidate.
    unit.on_ground = false;
    for platform in &stage.platforms {
        if platform.is_goal {
            continue;
        }
        let overlap = spans_overlap(unit.left(), unit.right(), platform.left(), platform.right());
        let crossing_top =
            unit.vel.y > 0.0 && unit.bottom() > platform.top() && unit.top() < platform.top();
        if overlap && crossing_top {
            unit.pos.y = platform.top() - UNIT_SIZE;
            unit.vel.y = 0.0;
            unit.on_ground = true;
        }
    }

    // 7. Side blocking: platforms double as walls that reverse the walk
    if !unit.stopped {
        resolve_blocking(unit, stage);
    }

    // 8. Screen-floor fallback for units that fell through everything
    if unit.pos.y > SCREEN_HEIGHT {
        unit.pos.y = SCREEN_HEIGHT - UNIT_SIZE;
        unit.on_ground = true;
        unit.vel.y = 0.0;
    }

    // 9. Goal capture. Requires full containment while grounded; partial
    //    overlap never captures.
    if unit.on_ground {
        for goal in stage.goals() {
            if aabb_contains(goal.pos, goal.size, unit.pos, unit.size()) {
                unit.stopped = true;
                unit.vel.x = 0.0;
                break;
            }
        }
    }
}

/// Modifier of the first non-goal platform the unit rests on, in declaration
/// order. 1.0 when nothing is under the unit's feet.
fn standing_modifier(unit: &Unit, stage: &Stage) -> f32 {
    for platform in &stage.platforms {
        if platform.is_goal {
            continue;
        }
        let overlap = spans_overlap(unit.left(), unit.right(), platform.left(), platform.right());
        if overlap && rests_on(unit.bottom(), platform.top(), STAND_TOLERANCE) {
            return platform.speed_modifier;
        }
    }
    1.0
}

/// Push a unit out of any platform side it walked into and reverse its walk.
/// Resting on top (within the standing tolerance) exempts a platform, and
/// only an edge actually straddled blocks, so a unit rising through a slab
/// mid-jump passes freely.
fn resolve_blocking(unit: &mut Unit, stage: &Stage) {
    for platform in &stage.platforms {
        if platform.is_goal {
            continue;
        }
        let overlap_x = spans_overlap(unit.left(), unit.right(), platform.left(), platform.right());
        let overlap_y =
            unit.bottom() > platform.top() + STAND_TOLERANCE && unit.top() < platform.bottom();
        if !(overlap_x && overlap_y) {
            continue;
        }
        match unit.facing {
            Facing::Right if unit.left() < platform.left() => {
                unit.pos.x = platform.left() - UNIT_SIZE;
                unit.facing = Facing::Left;
            }
            Facing::Left if unit.right() > platform.right() => {
                unit.pos.x = platform.right();
                unit.facing = Facing::Right;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::stage::Platform;
    use glam::Vec2;
    use proptest::prelude::*;

    /// Ground strip with a goal hanging flush above it, the layout used by
    /// most collision scenarios here
    fn goal_over_ground() -> Stage {
        Stage {
            platforms: vec![
                Platform::new(0.0, 550.0, 800.0, 50.0),
                Platform::goal(350.0, 530.0, 100.0, 20.0),
            ],
            spikes: Vec::new(),
        }
    }

    fn airborne_at(x: f32, y: f32, facing: Facing) -> Unit {
        Unit::spawn(Vec2::new(x, y), facing)
    }

    fn resting_at(x: f32, y: f32, facing: Facing) -> Unit {
        let mut u = Unit::spawn(Vec2::new(x, y), facing);
        u.on_ground = true;
        u
    }

    #[test]
    fn gravity_accelerates_a_falling_unit() {
        let stage = Stage::default();
        let mut u = airborne_at(400.0, 100.0, Facing::Right);
        step_unit(&mut u, &stage);
        assert_eq!(u.vel.y, GRAVITY);
        step_unit(&mut u, &stage);
        assert_eq!(u.vel.y, 2.0 * GRAVITY);
        assert!(u.pos.y > 100.0);
    }

    #[test]
    fn falling_unit_lands_flush_on_a_platform() {
        let stage = goal_over_ground();
        let mut u = airborne_at(100.0, 500.0, Facing::Right);
        for _ in 0..120 {
            step_unit(&mut u, &stage);
            if u.on_ground {
                break;
            }
        }
        assert!(u.on_ground);
        assert_eq!(u.pos.y, 530.0, "bottom snapped onto the platform top");
        assert_eq!(u.vel.y, 0.0);
    }

    #[test]
    fn resting_unit_does_not_sink_or_jitter() {
        let stage = goal_over_ground();
        let mut u = resting_at(100.0, 530.0, Facing::Right);
        for _ in 0..10 {
            step_unit(&mut u, &stage);
            assert_eq!(u.pos.y, 530.0);
            assert!(u.on_ground);
            assert_eq!(u.vel.y, 0.0);
        }
    }

    #[test]
    fn walk_reverses_at_screen_edges() {
        let stage = goal_over_ground();
        let mut u = resting_at(SCREEN_WIDTH - UNIT_SIZE - 0.5, 530.0, Facing::Right);
        step_unit(&mut u, &stage);
        assert_eq!(u.pos.x, SCREEN_WIDTH - UNIT_SIZE);
        assert_eq!(u.facing, Facing::Left);

        let mut u = resting_at(0.5, 530.0, Facing::Left);
        step_unit(&mut u, &stage);
        assert_eq!(u.pos.x, 0.0);
        assert_eq!(u.facing, Facing::Right);
    }

    #[test]
    fn fully_contained_grounded_unit_is_captured() {
        // Landing settles the unit at y=530, exactly filling the goal's span
        let stage = goal_over_ground();
        let mut u = resting_at(360.0, 535.0, Facing::Right);
        step_unit(&mut u, &stage);
        assert_eq!(u.pos.y, 530.0);
        assert!(u.stopped);
        assert_eq!(u.vel.x, 0.0);
    }

    #[test]
    fn partial_goal_overlap_never_captures() {
        // 340..360 against a goal spanning 350..450
        let stage = goal_over_ground();
        let mut u = resting_at(340.0, 535.0, Facing::Right);
        step_unit(&mut u, &stage);
        assert!(!u.stopped);
    }

    #[test]
    fn airborne_unit_inside_goal_is_not_captured() {
        let stage = goal_over_ground();
        let mut u = airborne_at(360.0, 531.0, Facing::Right);
        u.vel.y = -5.0; // rising, so no landing this tick
        step_unit(&mut u, &stage);
        assert!(!u.stopped);
    }

    #[test]
    fn captured_unit_stays_frozen() {
        let stage = goal_over_ground();
        let mut u = resting_at(370.0, 530.0, Facing::Right);
        step_unit(&mut u, &stage);
        assert!(u.stopped);
        let captured_x = u.pos.x;
        for _ in 0..60 {
            step_unit(&mut u, &stage);
        }
        assert_eq!(u.pos.x, captured_x);
        assert_eq!(u.pos.y, 530.0);
    }

    #[test]
    fn standing_on_a_speed_platform_scales_the_walk() {
        let stage = Stage {
            platforms: vec![Platform {
                speed_modifier: 1.3,
                ..Platform::new(0.0, 550.0, 800.0, 50.0)
            }],
            spikes: Vec::new(),
        };
        let mut u = resting_at(100.0, 530.0, Facing::Right);
        step_unit(&mut u, &stage);
        assert_eq!(u.vel.x, 1.3 * BASE_SPEED);
        assert_eq!(u.pos.x, 100.0 + 1.3 * BASE_SPEED);
    }

    #[test]
    fn modifier_reverts_off_the_platform() {
        // Speed strip covers only the left half; past it the walk is neutral
        let stage = Stage {
            platforms: vec![
                Platform {
                    speed_modifier: 1.3,
                    ..Platform::new(0.0, 550.0, 400.0, 10.0)
                },
                Platform::new(400.0, 550.0, 400.0, 10.0),
            ],
            spikes: Vec::new(),
        };
        let mut on_strip = resting_at(200.0, 530.0, Facing::Right);
        step_unit(&mut on_strip, &stage);
        assert_eq!(on_strip.vel.x, 1.3 * BASE_SPEED);

        let mut past_strip = resting_at(500.0, 530.0, Facing::Right);
        step_unit(&mut past_strip, &stage);
        assert_eq!(past_strip.vel.x, BASE_SPEED);

        let mut airborne = airborne_at(200.0, 400.0, Facing::Right);
        step_unit(&mut airborne, &stage);
        assert_eq!(airborne.vel.x, BASE_SPEED);
    }

    #[test]
    fn first_declared_platform_wins_the_modifier_tie() {
        // Two strips share the unit's footprint; declaration order decides
        let stage = Stage {
            platforms: vec![
                Platform {
                    speed_modifier: 0.7,
                    ..Platform::new(0.0, 550.0, 200.0, 10.0)
                },
                Platform {
                    speed_modifier: 1.3,
                    ..Platform::new(100.0, 550.0, 200.0, 10.0)
                },
            ],
            spikes: Vec::new(),
        };
        let mut u = resting_at(150.0, 530.0, Facing::Right);
        step_unit(&mut u, &stage);
        assert_eq!(u.vel.x, 0.7 * BASE_SPEED);
    }

    #[test]
    fn walking_into_a_wall_clamps_and_reverses() {
        let stage = Stage {
            platforms: vec![
                Platform::new(0.0, 580.0, 800.0, 20.0),
                // Wall rising from the floor
                Platform::new(400.0, 500.0, 40.0, 80.0),
            ],
            spikes: Vec::new(),
        };
        let mut u = resting_at(379.5, 560.0, Facing::Right);
        step_unit(&mut u, &stage);
        assert_eq!(u.pos.x, 380.0, "clamped just left of the wall");
        assert_eq!(u.facing, Facing::Left);

        let mut u = resting_at(440.5, 560.0, Facing::Left);
        step_unit(&mut u, &stage);
        assert_eq!(u.pos.x, 440.0, "clamped just right of the wall");
        assert_eq!(u.facing, Facing::Right);
    }

    #[test]
    fn standing_on_a_platform_is_exempt_from_its_blocking() {
        // Narrow pedestal; the unit on top walks off it without being pushed
        let stage = Stage {
            platforms: vec![Platform::new(300.0, 400.0, 60.0, 200.0)],
            spikes: Vec::new(),
        };
        let mut u = resting_at(320.0, 380.0, Facing::Right);
        step_unit(&mut u, &stage);
        assert_eq!(u.pos.x, 321.0);
        assert_eq!(u.facing, Facing::Right);
    }

    #[test]
    fn rising_through_a_slab_is_not_blocked() {
        // Mid-jump pass-through: the unit straddles no side edge
        let stage = Stage {
            platforms: vec![Platform::new(100.0, 300.0, 200.0, 20.0)],
            spikes: Vec::new(),
        };
        let mut u = airborne_at(180.0, 310.0, Facing::Right);
        u.vel.y = -JUMP_STRENGTH;
        step_unit(&mut u, &stage);
        assert_eq!(u.facing, Facing::Right);
        assert!(u.pos.y < 310.0, "still rising");
    }

    #[test]
    fn screen_floor_catches_a_unit_that_fell_through() {
        // With no geometry at all the unit can never pass the screen bottom
        let stage = Stage::default();
        let mut u = airborne_at(400.0, 100.0, Facing::Right);
        let mut clamped = false;
        for _ in 0..300 {
            step_unit(&mut u, &stage);
            assert!(u.pos.y <= SCREEN_HEIGHT);
            if u.on_ground {
                clamped = true;
                assert_eq!(u.pos.y, SCREEN_HEIGHT - UNIT_SIZE);
                assert_eq!(u.vel.y, 0.0);
            }
        }
        assert!(clamped);
    }

    #[test]
    fn coincident_platforms_land_once() {
        // Two platforms sharing span and top edge still produce one clean snap
        let stage = Stage {
            platforms: vec![
                Platform::new(100.0, 500.0, 100.0, 10.0),
                Platform::new(100.0, 500.0, 100.0, 10.0),
            ],
            spikes: Vec::new(),
        };
        let mut u = airborne_at(140.0, 478.0, Facing::Right);
        u.vel.y = 3.0;
        step_unit(&mut u, &stage);
        assert!(u.on_ground);
        assert_eq!(u.pos.y, 480.0);
        assert_eq!(u.vel.y, 0.0);
    }

    proptest! {
        /// Jump scripts never push a unit past the horizontal screen bounds
        #[test]
        fn walk_stays_inside_screen_bounds(
            start_x in 0.0f32..(SCREEN_WIDTH - UNIT_SIZE),
            jumps in proptest::collection::vec(any::<bool>(), 200),
        ) {
            let stage = Stage {
                platforms: vec![Platform::new(0.0, 550.0, 800.0, 50.0)],
                spikes: Vec::new(),
            };
            let mut u = Unit::spawn(Vec2::new(start_x, 300.0), Facing::Right);
            for jump in jumps {
                if jump {
                    u.jump();
                }
                step_unit(&mut u, &stage);
                prop_assert!(u.pos.x >= 0.0);
                prop_assert!(u.pos.x <= SCREEN_WIDTH - UNIT_SIZE);
            }
        }

        /// Wherever a wide platform sits, a unit resting mid-span stays put
        /// vertically across ticks
        #[test]
        fn resting_height_is_stable(
            platform_x in 0.0f32..400.0,
            platform_top in 100.0f32..560.0,
        ) {
            let stage = Stage {
                platforms: vec![Platform::new(platform_x, platform_top, 300.0, 20.0)],
                spikes: Vec::new(),
            };
            let mut u = Unit::spawn(
                Vec2::new(platform_x + 140.0, platform_top - UNIT_SIZE),
                Facing::Right,
            );
            u.on_ground = true;
            for _ in 0..3 {
                step_unit(&mut u, &stage);
                prop_assert_eq!(u.pos.y, platform_top - UNIT_SIZE);
                prop_assert!(u.on_ground);
            }
        }
    }
}
