use crate::maze::{Cell, Direction, Maze};

/// Outcome of one [`Walker::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Moved(Cell),
    Blocked,
    Escaped, // Stepped down out of the bottom-right cell.
}

/// A marker that moves one cell at a time through a maze, starting in the
/// top-left corner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Walker {
    cell: Cell,
    facing: Direction,
    won: bool,
}

impl Walker {
    pub fn new() -> Self {
        Self {
            cell: Cell::new(0, 0),
            facing: Direction::Up,
            won: false,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn cell(&self) -> Cell {
        self.cell
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn has_won(&self) -> bool {
        self.won
    }

    pub fn turn(&mut self, direction: Direction) {
        self.facing = direction;
    }

    pub fn advance<R>(&mut self, maze: &Maze<R>) -> Step {
        if self.won {
            return Step::Escaped;
        }

        let next = self
            .cell
            .step(self.facing, maze.size())
            .filter(|_| !maze.has_wall(self.cell, self.facing));

        match next {
            Some(next) => {
                self.cell = next;
                Step::Moved(next)
            }
            None if self.facing == Direction::Down && self.cell == maze.exit() => {
                self.won = true;
                Step::Escaped
            }
            None => Step::Blocked,
        }
    }
}

impl Default for Walker {
    fn default() -> Self {
        Self::new()
    }
}
