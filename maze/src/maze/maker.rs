pub mod algorithms;

use rand::Rng;
use strum::{EnumIter, EnumString, FromRepr, IntoEnumIterator};

use super::MazeError;
use algorithms::backtrack::Backtrack;

/// The four sides of a cell. The discriminants are the values a
/// [`DirectionSource`] draws, and the declaration order is the order in which
/// neighbours are checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, EnumString, FromRepr)]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum Direction {
    #[strum(serialize = "U", serialize = "up")]
    Up = 0,
    #[strum(serialize = "R", serialize = "right")]
    Right = 1,
    #[strum(serialize = "D", serialize = "down")]
    Down = 2,
    #[strum(serialize = "L", serialize = "left")]
    Left = 3,
}

/// Uniform source of directions used to pick where to carve next.
pub trait DirectionSource {
    fn next_direction(&mut self) -> Direction;
}

impl<R: Rng> DirectionSource for R {
    fn next_direction(&mut self) -> Direction {
        let draw: u8 = self.random_range(0..4);
        Direction::from_repr(draw).expect("draws are always in 0..4")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Cell {
        Cell { row, col }
    }

    /// The adjacent cell in `direction`, or `None` if it would fall outside a
    /// `size` x `size` grid.
    pub fn step(self, direction: Direction, size: usize) -> Option<Cell> {
        let Cell { row, col } = self;
        match direction {
            Direction::Up if row > 0 => Some(Cell::new(row - 1, col)),
            Direction::Right if col + 1 < size => Some(Cell::new(row, col + 1)),
            Direction::Down if row + 1 < size => Some(Cell::new(row + 1, col)),
            Direction::Left if col > 0 => Some(Cell::new(row, col - 1)),
            _ => None,
        }
    }
}

pub struct MazeMaker<R> {
    pub horizontal: Vec<Vec<bool>>, // Wall above each cell.
    pub vertical: Vec<Vec<bool>>,   // Wall to the left of each cell.
    pub rng: R,
    visited: Vec<Vec<bool>>,
    size: usize,
    draws: usize,
}

impl<R> MazeMaker<R> {
    pub fn size(&self) -> usize {
        self.size
    }

    /// Directions drawn from the source during the last generation, rejected
    /// draws included.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl<R: DirectionSource> MazeMaker<R> {
    /// Allocates a fully walled grid. Call [`MazeMaker::generate`] to carve it.
    pub fn new(size: usize, rng: R) -> Result<Self, MazeError> {
        if size == 0 {
            return Err(MazeError::EmptyGrid);
        }

        Ok(MazeMaker {
            horizontal: vec![vec![true; size]; size],
            vertical: vec![vec![true; size]; size],
            rng,
            visited: vec![vec![false; size]; size],
            size,
            draws: 0,
        })
    }

    pub fn generate(&mut self) {
        self.clear();
        self.backtrack();
    }

    fn clear(&mut self) {
        for row in 0..self.size {
            self.horizontal[row].fill(true);
            self.vertical[row].fill(true);
            self.visited[row].fill(false);
        }
        self.draws = 0;
    }

    fn visit_cell(&mut self, cell: Cell) {
        self.visited[cell.row][cell.col] = true;
    }

    fn is_visited(&self, cell: Cell) -> bool {
        self.visited[cell.row][cell.col]
    }

    fn unvisited_neighbor(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        cell.step(direction, self.size).filter(|&neighbor| !self.is_visited(neighbor))
    }

    fn has_unvisited_neighbor(&self, cell: Cell) -> bool {
        Direction::iter().any(|direction| self.unvisited_neighbor(cell, direction).is_some())
    }

    /// Draws directions until one leads to an unvisited cell. Draws are never
    /// restricted to the valid directions, so every rejected draw still
    /// consumes randomness.
    fn pick_unvisited_neighbor(&mut self, cell: Cell) -> (Direction, Cell) {
        debug_assert!(
            self.has_unvisited_neighbor(cell),
            "picking a neighbor of {:?} with none left to visit",
            cell
        );

        loop {
            let direction = self.rng.next_direction();
            self.draws += 1;
            if let Some(neighbor) = self.unvisited_neighbor(cell, direction) {
                return (direction, neighbor);
            }
        }
    }

    /// Walls are stored on the lower or rightmost cell of each shared edge.
    fn remove_wall_between(&mut self, cell: Cell, direction: Direction) {
        let Cell { row, col } = cell;
        match direction {
            Direction::Up => self.horizontal[row][col] = false,
            Direction::Right => self.vertical[row][col + 1] = false,
            Direction::Down => self.horizontal[row + 1][col] = false,
            Direction::Left => self.vertical[row][col] = false,
        }
    }
}
