use std::collections::VecDeque;

use crate::maze::{Direction, DirectionSource, Maze};

/// Replays a fixed list of directions, so tests can predict every carve.
pub struct ScriptedDirections {
    /// Directions still to be drawn, front first.
    /// Drawing past the end panics, which flags a script that is too short.
    directions: VecDeque<Direction>,
}

impl ScriptedDirections {
    pub fn new(directions: &[Direction]) -> Self {
        Self {
            directions: directions.iter().copied().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.directions.len()
    }
}

impl DirectionSource for ScriptedDirections {
    fn next_direction(&mut self) -> Direction {
        self.directions
            .pop_front()
            .expect("scripted directions ran out before the maze was finished")
    }
}

/// Draws for the 3x3 reference maze. The walk goes down the left column,
/// along the bottom, back up through the middle, dead-ends in the bottom-right
/// corner, then backtracks to finish the top row. The `Left` and `Right` draws
/// at the fifth and eighth positions are rejected.
pub fn reference_script() -> Vec<Direction> {
    use Direction::*;

    vec![Down, Down, Right, Up, Left, Right, Down, Right, Up, Left]
}

/// ```text
/// +---+---+---+
/// |   |       |
/// +   +---+   +
/// |   |       |
/// +   +   +   +
/// |       |   |
/// +---+---+---+
/// ```
pub fn reference_maze() -> Maze<ScriptedDirections> {
    Maze::new(3, ScriptedDirections::new(&reference_script())).expect("3 is a valid size")
}
