pub mod config;
pub mod constants;
pub mod maze;
pub mod walker;

#[cfg(test)]
mod test_helpers;

pub use maze::{Cell, Direction, DirectionSource, Maze, MazeError};
