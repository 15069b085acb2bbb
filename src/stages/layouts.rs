//! Authored stage geometry
//!
//! Stages 0 through 3 are authored on the 20px cell grid (generated offline
//! from ASCII art), stages 4 through 10 directly in pixels. Stage 0 is a
//! dense playground kept out of normal progression.

use crate::sim::{Platform, Spike, Stage};

/// Debug playground: one of everything, not part of the normal run
pub(crate) fn stage_0() -> Stage {
    Stage {
        platforms: vec![
            Platform::grid(0, 0, 40, 1),
            Platform::grid(0, 1, 1, 30),
            Platform::grid(39, 1, 1, 30),
            Platform::grid(23, 6, 17, 1),
            Platform::grid(5, 11, 4, 2),
            Platform::grid(30, 11, 1, 2),
            Platform::grid(11, 12, 20, 1),
            Platform::grid(1, 13, 1, 1),
            Platform::grid(2, 14, 1, 1),
            Platform::grid(3, 15, 1, 1),
            Platform::grid(4, 16, 1, 1),
            Platform::grid(5, 17, 2, 2),
            Platform::grid(12, 17, 1, 2),
            Platform::grid(15, 17, 7, 2),
            Platform::grid(24, 17, 1, 2),
            Platform::grid(27, 17, 1, 2),
            Platform::grid(30, 17, 1, 2),
            Platform::grid(34, 17, 1, 1),
            Platform::grid(7, 18, 6, 1),
            Platform::grid(25, 18, 3, 1),
            Platform::grid(31, 18, 3, 1),
            Platform::grid(37, 18, 3, 3),
            Platform::grid(13, 22, 1, 3),
            Platform::grid(26, 22, 1, 3),
            Platform::grid(5, 23, 2, 2),
            Platform::grid(9, 23, 11, 2),
            Platform::grid(22, 23, 15, 2),
            Platform::grid(1, 29, 5, 2),
            Platform::grid(8, 29, 1, 2),
            Platform::grid(13, 29, 1, 2),
            Platform::grid(16, 29, 1, 2),
            Platform::grid(21, 29, 1, 2),
            Platform::grid(24, 29, 1, 2),
            Platform::grid(29, 29, 1, 2),
            Platform::grid(32, 29, 1, 2),
            Platform::grid(37, 29, 3, 2),
            Platform::grid(9, 30, 5, 1),
            Platform::grid(17, 30, 5, 1),
            Platform::grid(25, 30, 5, 1),
            Platform::grid(33, 30, 7, 1),
            Platform::grid_goal(37, 27, 2, 2),
            Platform::grid_speed_up(23, 5, 16, 1),
            Platform::grid_speed_up(11, 11, 19, 1),
            Platform::grid_speed_up(25, 17, 2, 1),
            Platform::grid_speed_up(31, 17, 3, 1),
            Platform::grid_speed_up(9, 29, 4, 1),
            Platform::grid_speed_up(17, 29, 4, 1),
            Platform::grid_speed_up(25, 29, 4, 1),
            Platform::grid_speed_up(33, 29, 4, 1),
            Platform::grid_speed_down(7, 17, 5, 1),
        ],
        spikes: vec![
            Spike::grid(9, 12),
            Spike::grid(10, 12),
            Spike::grid(37, 17),
            Spike::grid(38, 17),
            Spike::grid(13, 18),
            Spike::grid(14, 18),
            Spike::grid(22, 18),
            Spike::grid(23, 18),
            Spike::grid(28, 18),
            Spike::grid(29, 18),
            Spike::grid(7, 24),
            Spike::grid(8, 24),
            Spike::grid(20, 24),
            Spike::grid(21, 24),
            Spike::grid(37, 24),
            Spike::grid(38, 24),
            Spike::grid(6, 30),
            Spike::grid(7, 30),
            Spike::grid(14, 30),
            Spike::grid(15, 30),
            Spike::grid(22, 30),
            Spike::grid(23, 30),
            Spike::grid(30, 30),
            Spike::grid(31, 30),
        ],
    }
}

/// Mirrored descent down four floors, goal in the bottom center slot
pub(crate) fn stage_1() -> Stage {
    Stage {
        platforms: vec![
            Platform::grid(0, 0, 40, 1),
            Platform::grid(0, 1, 1, 29),
            Platform::grid(19, 1, 2, 24),
            Platform::grid(39, 1, 1, 29),
            Platform::grid(1, 5, 16, 2),
            Platform::grid(23, 5, 17, 2),
            Platform::grid(3, 11, 5, 2),
            Platform::grid(10, 11, 20, 2),
            Platform::grid(32, 11, 5, 2),
            Platform::grid(1, 17, 3, 2),
            Platform::grid(6, 17, 11, 2),
            Platform::grid(23, 17, 11, 2),
            Platform::grid(36, 17, 4, 2),
            Platform::grid(4, 18, 13, 1),
            Platform::grid(34, 18, 6, 1),
            Platform::grid(3, 23, 9, 2),
            Platform::grid(14, 23, 12, 2),
            Platform::grid(28, 23, 9, 2),
            Platform::grid(12, 24, 25, 1),
            Platform::grid(1, 29, 12, 1),
            Platform::grid(15, 29, 10, 1),
            Platform::grid(27, 29, 13, 1),
            Platform::grid_goal(19, 28, 2, 1),
            Platform::grid_speed_up(12, 23, 2, 1),
            Platform::grid_speed_up(26, 23, 2, 1),
            Platform::grid_speed_up(4, 28, 2, 1),
            Platform::grid_speed_down(4, 17, 2, 1),
            Platform::grid_speed_down(34, 17, 2, 1),
            Platform::grid_speed_down(34, 28, 2, 1),
        ],
        spikes: vec![
            Spike::grid(8, 12),
            Spike::grid(9, 12),
            Spike::grid(30, 12),
            Spike::grid(31, 12),
            Spike::grid(13, 29),
            Spike::grid(14, 29),
            Spike::grid(25, 29),
            Spike::grid(26, 29),
        ],
    }
}

/// Open floor with two spike pits flanking a raised goal
pub(crate) fn stage_2() -> Stage {
    Stage {
        platforms: vec![
            Platform::grid(0, 0, 40, 1),
            Platform::grid(0, 1, 1, 30),
            Platform::grid(39, 1, 1, 30),
            Platform::grid(5, 28, 1, 3),
            Platform::grid(34, 28, 1, 3),
            Platform::grid(1, 29, 10, 2),
            Platform::grid(13, 29, 14, 2),
            Platform::grid(29, 29, 11, 2),
            Platform::grid_goal(19, 27, 2, 2),
        ],
        spikes: vec![
            Spike::grid(11, 30),
            Spike::grid(12, 30),
            Spike::grid(27, 30),
            Spike::grid(28, 30),
        ],
    }
}

/// Central pillar split, slow upper ledges and fast lower runs
pub(crate) fn stage_3() -> Stage {
    Stage {
        platforms: vec![
            Platform::grid(0, 0, 40, 1),
            Platform::grid(0, 1, 1, 30),
            Platform::grid(39, 1, 1, 30),
            Platform::grid(19, 17, 2, 8),
            Platform::grid(1, 19, 5, 1),
            Platform::grid(34, 19, 6, 1),
            Platform::grid(14, 24, 12, 1),
            Platform::grid(1, 29, 10, 2),
            Platform::grid(13, 29, 14, 2),
            Platform::grid(29, 29, 11, 2),
            Platform::grid_goal(19, 27, 2, 2),
            Platform::grid_speed_up(3, 24, 11, 1),
            Platform::grid_speed_up(26, 24, 11, 1),
            Platform::grid_speed_down(6, 19, 11, 1),
            Platform::grid_speed_down(23, 19, 11, 1),
        ],
        spikes: vec![
            Spike::grid(11, 30),
            Spike::grid(12, 30),
            Spike::grid(27, 30),
            Spike::grid(28, 30),
        ],
    }
}

/// First asymmetric stage: separate climbing routes, paired goals
pub(crate) fn stage_4() -> Stage {
    Stage {
        platforms: vec![
            Platform::ground(),
            // Left route
            Platform::new(50.0, 450.0, 100.0, 20.0),
            Platform::new(180.0, 400.0, 80.0, 20.0),
            Platform::new(100.0, 320.0, 120.0, 20.0),
            Platform::new(250.0, 260.0, 90.0, 20.0),
            // Right route
            Platform::new(650.0, 460.0, 100.0, 20.0),
            Platform::new(580.0, 380.0, 70.0, 20.0),
            Platform::new(620.0, 300.0, 100.0, 20.0),
            Platform::new(540.0, 220.0, 80.0, 20.0),
            // Central links
            Platform::new(320.0, 350.0, 80.0, 20.0),
            Platform::new(420.0, 280.0, 70.0, 20.0),
            Platform::new(360.0, 180.0, 80.0, 20.0),
            Platform::goal(340.0, 140.0, 50.0, 15.0),
            Platform::goal(410.0, 140.0, 50.0, 15.0),
        ],
        spikes: Vec::new(),
    }
}

/// Zigzag left route against a stepped right route, one shared goal
pub(crate) fn stage_5() -> Stage {
    Stage {
        platforms: vec![
            Platform::ground(),
            Platform::new(80.0, 480.0, 60.0, 15.0),
            Platform::new(200.0, 440.0, 50.0, 15.0),
            Platform::new(120.0, 380.0, 70.0, 15.0),
            Platform::new(250.0, 340.0, 60.0, 15.0),
            Platform::new(160.0, 280.0, 80.0, 15.0),
            Platform::new(280.0, 220.0, 50.0, 15.0),
            Platform::new(620.0, 470.0, 100.0, 15.0),
            Platform::new(580.0, 420.0, 80.0, 15.0),
            Platform::new(640.0, 370.0, 60.0, 15.0),
            Platform::new(560.0, 320.0, 90.0, 15.0),
            Platform::new(600.0, 270.0, 70.0, 15.0),
            Platform::new(540.0, 200.0, 80.0, 15.0),
            Platform::new(350.0, 300.0, 50.0, 15.0),
            Platform::new(420.0, 260.0, 40.0, 15.0),
            Platform::new(380.0, 200.0, 60.0, 15.0),
            Platform::new(340.0, 160.0, 40.0, 15.0),
            Platform::new(420.0, 160.0, 40.0, 15.0),
            Platform::goal(370.0, 120.0, 60.0, 20.0),
        ],
        spikes: Vec::new(),
    }
}

/// Long jumps on the left, precision hops on the right, twin goals
pub(crate) fn stage_6() -> Stage {
    Stage {
        platforms: vec![
            Platform::ground(),
            Platform::new(60.0, 460.0, 80.0, 20.0),
            Platform::new(220.0, 400.0, 60.0, 15.0),
            Platform::new(140.0, 340.0, 50.0, 15.0),
            Platform::new(280.0, 280.0, 70.0, 15.0),
            Platform::new(180.0, 220.0, 60.0, 15.0),
            Platform::new(660.0, 470.0, 80.0, 15.0),
            Platform::new(600.0, 430.0, 40.0, 15.0),
            Platform::new(640.0, 390.0, 35.0, 15.0),
            Platform::new(580.0, 350.0, 45.0, 15.0),
            Platform::new(620.0, 310.0, 40.0, 15.0),
            Platform::new(560.0, 270.0, 50.0, 15.0),
            Platform::new(600.0, 230.0, 45.0, 15.0),
            Platform::new(320.0, 360.0, 80.0, 15.0),
            Platform::new(440.0, 320.0, 60.0, 15.0),
            Platform::new(380.0, 260.0, 50.0, 15.0),
            Platform::new(300.0, 180.0, 45.0, 15.0),
            Platform::new(360.0, 160.0, 40.0, 15.0),
            Platform::new(420.0, 180.0, 45.0, 15.0),
            Platform::goal(330.0, 120.0, 40.0, 15.0),
            Platform::goal(430.0, 120.0, 40.0, 15.0),
        ],
        spikes: Vec::new(),
    }
}

/// Maze left, vertical climb right, obstacle course in the middle
pub(crate) fn stage_7() -> Stage {
    Stage {
        platforms: vec![
            Platform::ground(),
            Platform::new(50.0, 480.0, 70.0, 15.0),
            Platform::new(160.0, 450.0, 40.0, 15.0),
            Platform::new(80.0, 410.0, 60.0, 15.0),
            Platform::new(180.0, 380.0, 50.0, 15.0),
            Platform::new(120.0, 340.0, 45.0, 15.0),
            Platform::new(200.0, 300.0, 55.0, 15.0),
            Platform::new(140.0, 260.0, 50.0, 15.0),
            Platform::new(220.0, 220.0, 45.0, 15.0),
            Platform::new(160.0, 180.0, 60.0, 15.0),
            Platform::new(650.0, 480.0, 100.0, 15.0),
            Platform::new(700.0, 440.0, 50.0, 15.0),
            Platform::new(620.0, 400.0, 60.0, 15.0),
            Platform::new(680.0, 360.0, 45.0, 15.0),
            Platform::new(600.0, 320.0, 70.0, 15.0),
            Platform::new(660.0, 280.0, 50.0, 15.0),
            Platform::new(580.0, 240.0, 60.0, 15.0),
            Platform::new(640.0, 200.0, 55.0, 15.0),
            Platform::new(570.0, 160.0, 80.0, 15.0),
            Platform::new(280.0, 400.0, 30.0, 15.0),
            Platform::new(340.0, 380.0, 25.0, 15.0),
            Platform::new(300.0, 340.0, 35.0, 15.0),
            Platform::new(360.0, 320.0, 30.0, 15.0),
            Platform::new(320.0, 280.0, 40.0, 15.0),
            Platform::new(380.0, 260.0, 35.0, 15.0),
            Platform::new(340.0, 220.0, 30.0, 15.0),
            Platform::new(400.0, 200.0, 40.0, 15.0),
            Platform::new(280.0, 140.0, 50.0, 15.0),
            Platform::new(370.0, 120.0, 60.0, 15.0),
            Platform::new(470.0, 140.0, 50.0, 15.0),
            Platform::goal(385.0, 80.0, 50.0, 20.0),
        ],
        spikes: Vec::new(),
    }
}

/// Crossing paths: each unit must finish on the side it started opposite
pub(crate) fn stage_8() -> Stage {
    Stage {
        platforms: vec![
            Platform::ground(),
            Platform::new(650.0, 470.0, 100.0, 20.0),
            Platform::new(50.0, 470.0, 100.0, 20.0),
            Platform::new(580.0, 420.0, 60.0, 15.0),
            Platform::new(120.0, 420.0, 60.0, 15.0),
            Platform::new(500.0, 370.0, 70.0, 15.0),
            Platform::new(200.0, 370.0, 70.0, 15.0),
            Platform::new(420.0, 320.0, 80.0, 15.0),
            Platform::new(280.0, 320.0, 80.0, 15.0),
            Platform::new(340.0, 270.0, 40.0, 15.0),
            Platform::new(420.0, 270.0, 40.0, 15.0),
            Platform::new(200.0, 220.0, 70.0, 15.0),
            Platform::new(500.0, 220.0, 70.0, 15.0),
            Platform::new(120.0, 170.0, 60.0, 15.0),
            Platform::new(580.0, 170.0, 60.0, 15.0),
            Platform::new(300.0, 130.0, 80.0, 15.0),
            Platform::new(420.0, 130.0, 80.0, 15.0),
            Platform::goal(150.0, 90.0, 50.0, 15.0),
            Platform::goal(600.0, 90.0, 50.0, 15.0),
        ],
        spikes: Vec::new(),
    }
}

/// Double crossover with three goals to choose from
pub(crate) fn stage_9() -> Stage {
    Stage {
        platforms: vec![
            Platform::ground(),
            Platform::new(400.0, 480.0, 80.0, 15.0),
            Platform::new(200.0, 460.0, 60.0, 15.0),
            Platform::new(600.0, 460.0, 60.0, 15.0),
            Platform::new(120.0, 420.0, 50.0, 15.0),
            Platform::new(680.0, 420.0, 50.0, 15.0),
            Platform::new(180.0, 380.0, 40.0, 15.0),
            Platform::new(620.0, 380.0, 40.0, 15.0),
            Platform::new(280.0, 360.0, 30.0, 15.0),
            Platform::new(520.0, 360.0, 30.0, 15.0),
            Platform::new(320.0, 320.0, 35.0, 15.0),
            Platform::new(480.0, 320.0, 35.0, 15.0),
            Platform::new(260.0, 280.0, 40.0, 15.0),
            Platform::new(540.0, 280.0, 40.0, 15.0),
            Platform::new(360.0, 240.0, 25.0, 15.0),
            Platform::new(440.0, 240.0, 25.0, 15.0),
            Platform::new(400.0, 220.0, 30.0, 15.0),
            Platform::new(180.0, 200.0, 80.0, 15.0),
            Platform::new(580.0, 180.0, 60.0, 15.0),
            Platform::new(100.0, 160.0, 50.0, 15.0),
            Platform::new(650.0, 140.0, 70.0, 15.0),
            Platform::new(200.0, 120.0, 40.0, 15.0),
            Platform::new(560.0, 100.0, 45.0, 15.0),
            Platform::goal(50.0, 80.0, 40.0, 15.0),
            Platform::goal(380.0, 60.0, 40.0, 15.0),
            Platform::goal(710.0, 80.0, 40.0, 15.0),
        ],
        spikes: Vec::new(),
    }
}

/// Final stage: triple paths weaving into a single high goal
pub(crate) fn stage_10() -> Stage {
    Stage {
        platforms: vec![
            Platform::ground(),
            Platform::new(100.0, 480.0, 50.0, 15.0),
            Platform::new(375.0, 480.0, 50.0, 15.0),
            Platform::new(650.0, 480.0, 50.0, 15.0),
            Platform::new(50.0, 440.0, 40.0, 15.0),
            Platform::new(380.0, 440.0, 40.0, 15.0),
            Platform::new(700.0, 440.0, 40.0, 15.0),
            Platform::new(120.0, 400.0, 30.0, 15.0),
            Platform::new(200.0, 380.0, 25.0, 15.0),
            Platform::new(280.0, 360.0, 35.0, 15.0),
            Platform::new(360.0, 340.0, 30.0, 15.0),
            Platform::new(440.0, 360.0, 35.0, 15.0),
            Platform::new(520.0, 380.0, 25.0, 15.0),
            Platform::new(600.0, 400.0, 30.0, 15.0),
            Platform::new(680.0, 420.0, 35.0, 15.0),
            Platform::new(160.0, 320.0, 40.0, 15.0),
            Platform::new(240.0, 300.0, 30.0, 15.0),
            Platform::new(320.0, 280.0, 35.0, 15.0),
            Platform::new(400.0, 260.0, 40.0, 15.0),
            Platform::new(480.0, 280.0, 35.0, 15.0),
            Platform::new(560.0, 300.0, 30.0, 15.0),
            Platform::new(640.0, 320.0, 40.0, 15.0),
            Platform::new(100.0, 240.0, 25.0, 15.0),
            Platform::new(180.0, 220.0, 20.0, 15.0),
            Platform::new(260.0, 200.0, 30.0, 15.0),
            Platform::new(340.0, 180.0, 25.0, 15.0),
            Platform::new(420.0, 160.0, 35.0, 15.0),
            Platform::new(500.0, 180.0, 25.0, 15.0),
            Platform::new(580.0, 200.0, 30.0, 15.0),
            Platform::new(660.0, 220.0, 20.0, 15.0),
            Platform::new(720.0, 240.0, 25.0, 15.0),
            Platform::new(200.0, 140.0, 50.0, 15.0),
            Platform::new(300.0, 120.0, 40.0, 15.0),
            Platform::new(380.0, 100.0, 40.0, 15.0),
            Platform::new(460.0, 120.0, 40.0, 15.0),
            Platform::new(550.0, 140.0, 50.0, 15.0),
            Platform::goal(375.0, 60.0, 50.0, 20.0),
        ],
        spikes: Vec::new(),
    }
}
