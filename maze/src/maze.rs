mod maker;

use std::fmt;

use rand::{SeedableRng, rngs::StdRng};

pub use maker::{Cell, Direction, DirectionSource};
use maker::MazeMaker;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    EmptyGrid,
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::EmptyGrid => write!(f, "maze must have at least one cell per side"),
        }
    }
}

impl std::error::Error for MazeError {}

/// A square perfect maze: every cell can reach every other by exactly one
/// path.
///
/// Walls are queried per cell with [`Maze::wall_above`] and
/// [`Maze::wall_left`]. Passing the size itself as the row (or column) asks
/// for the bottom (or right) border, which is always closed.
pub struct Maze<R> {
    maker: MazeMaker<R>,
}

impl<R: DirectionSource> Maze<R> {
    pub fn new(size: usize, rng: R) -> Result<Self, MazeError> {
        let mut maker = MazeMaker::new(size, rng)?;
        maker.generate();

        Ok(Self { maker })
    }

    /// Carves a new maze into the same grid.
    pub fn reset(&mut self) {
        self.maker.generate();
    }

    /// Swaps in a new randomness source, then carves a new maze with it.
    pub fn reset_with(&mut self, rng: R) {
        self.maker.rng = rng;
        self.reset();
    }

    /// Directions drawn while carving the current maze.
    pub fn draws(&self) -> usize {
        self.maker.draws()
    }
}

impl Maze<StdRng> {
    pub fn seeded(size: usize, seed: u64) -> Result<Self, MazeError> {
        Self::new(size, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(size: usize) -> Result<Self, MazeError> {
        Self::new(size, StdRng::from_rng(&mut rand::rng()))
    }
}

impl<R> Maze<R> {
    pub fn size(&self) -> usize {
        self.maker.size()
    }

    /// Whether the top edge of `(row, col)` is a wall. `row` may equal the
    /// size, which always reports the bottom border.
    pub fn wall_above(&self, row: usize, col: usize) -> bool {
        let size = self.size();
        assert!(
            row <= size && col < size,
            "wall_above({}, {}) is outside a {}x{} maze",
            row,
            col,
            size,
            size
        );

        row == size || self.maker.horizontal[row][col]
    }

    /// Whether the left edge of `(row, col)` is a wall. `col` may equal the
    /// size, which always reports the right border.
    pub fn wall_left(&self, row: usize, col: usize) -> bool {
        let size = self.size();
        assert!(
            row < size && col <= size,
            "wall_left({}, {}) is outside a {}x{} maze",
            row,
            col,
            size,
            size
        );

        col == size || self.maker.vertical[row][col]
    }

    pub fn has_wall(&self, cell: Cell, direction: Direction) -> bool {
        let Cell { row, col } = cell;
        match direction {
            Direction::Up => self.wall_above(row, col),
            Direction::Right => self.wall_left(row, col + 1),
            Direction::Down => self.wall_above(row + 1, col),
            Direction::Left => self.wall_left(row, col),
        }
    }

    /// The bottom-right cell, from which the way out leads down.
    pub fn exit(&self) -> Cell {
        let last = self.size() - 1;
        Cell::new(last, last)
    }

    pub fn horizontal(&self) -> &[Vec<bool>] {
        &self.maker.horizontal
    }

    pub fn vertical(&self) -> &[Vec<bool>] {
        &self.maker.vertical
    }

    /// Number of walls carved between neighbouring cells.
    pub fn open_edges(&self) -> usize {
        self.horizontal()
            .iter()
            .chain(self.vertical())
            .flatten()
            .filter(|&&wall| !wall)
            .count()
    }

    pub fn log(&self) -> String {
        let size = self.size();

        let top_edge = |row: usize| {
            (0..size).fold(String::from("+"), |mut line, col| {
                line.push_str(if self.wall_above(row, col) { "---+" } else { "   +" });
                line
            })
        };
        let side_edges = |row: usize| {
            (0..=size)
                .map(|col| if self.wall_left(row, col) { "|" } else { " " })
                .collect::<Vec<&str>>()
                .join("   ")
        };

        let mut lines = Vec::with_capacity(2 * size + 1);
        for row in 0..size {
            lines.push(top_edge(row));
            lines.push(side_edges(row));
        }
        lines.push(top_edge(size));

        lines.join("\n")
    }
}

impl<R> fmt::Debug for Maze<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<R> fmt::Display for Maze<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.log())
    }
}
