use disjoint::DisjointSet;
use rand::{SeedableRng, rngs::StdRng};

use maze::{Maze, MazeError};

/// Joins the two sides of every open wall. A join between cells that are
/// already connected would close a loop.
fn assert_is_perfect<R>(maze: &Maze<R>) {
    let size = maze.size();
    let index = |row: usize, col: usize| row * size + col;
    let mut cells = DisjointSet::with_len(size * size);
    let mut open = 0;

    for row in 0..size {
        for col in 0..size {
            if row > 0 && !maze.wall_above(row, col) {
                open += 1;
                assert!(
                    cells.join(index(row, col), index(row - 1, col)),
                    "loop through the top of ({}, {}):\n{}",
                    row,
                    col,
                    maze
                );
            }
            if col > 0 && !maze.wall_left(row, col) {
                open += 1;
                assert!(
                    cells.join(index(row, col), index(row, col - 1)),
                    "loop through the left of ({}, {}):\n{}",
                    row,
                    col,
                    maze
                );
            }
        }
    }

    assert_eq!(open, size * size - 1, "maze should be a spanning tree:\n{}", maze);
    for cell in 1..size * size {
        assert!(cells.is_joined(0, cell), "cell {} is cut off:\n{}", cell, maze);
    }
}

fn assert_borders_are_closed<R>(maze: &Maze<R>) {
    let size = maze.size();
    for i in 0..size {
        assert!(maze.wall_above(0, i));
        assert!(maze.wall_above(size, i));
        assert!(maze.wall_left(i, 0));
        assert!(maze.wall_left(i, size));
    }
}

#[test]
fn every_seed_and_size_gives_a_perfect_maze() {
    for size in [1, 2, 3, 5, 8, 13, 21] {
        for seed in 0..16 {
            let maze = Maze::seeded(size, seed).expect("size is positive");
            assert_is_perfect(&maze);
            assert_borders_are_closed(&maze);
        }
    }
}

#[test]
fn reset_keeps_the_maze_perfect() {
    let mut maze = Maze::seeded(8, 11).expect("8 is a valid size");
    for _ in 0..32 {
        maze.reset();
        assert_is_perfect(&maze);
        assert_borders_are_closed(&maze);
    }
}

#[test]
fn reseeding_reproduces_the_walls_bit_for_bit() {
    let reference = Maze::seeded(8, 0xC0FFEE).expect("8 is a valid size");
    let mut maze = Maze::new(8, StdRng::seed_from_u64(1)).expect("8 is a valid size");

    maze.reset_with(StdRng::seed_from_u64(0xC0FFEE));

    assert_eq!(maze.horizontal(), reference.horizontal());
    assert_eq!(maze.vertical(), reference.vertical());
    assert_eq!(maze.to_string(), reference.to_string());
}

#[test]
fn thread_rng_mazes_are_perfect() {
    for _ in 0..16 {
        let maze = Maze::new(8, rand::rng()).expect("8 is a valid size");
        assert_is_perfect(&maze);
    }
}

#[test]
fn entropy_seeded_mazes_are_perfect() {
    for size in [1, 5, 8] {
        let maze = Maze::from_entropy(size).expect("size is positive");
        assert_eq!(maze.size(), size);
        assert_is_perfect(&maze);
    }
    assert!(matches!(Maze::from_entropy(0), Err(MazeError::EmptyGrid)));
}

#[test]
fn large_maze_is_perfect() {
    let maze = Maze::seeded(64, 2026).expect("64 is a valid size");
    assert_is_perfect(&maze);
    assert!(maze.draws() >= 64 * 64 - 1);
}

#[test]
fn zero_size_is_rejected() {
    let result = Maze::new(0, StdRng::seed_from_u64(0));
    assert!(matches!(result, Err(MazeError::EmptyGrid)));
    assert_eq!(
        MazeError::EmptyGrid.to_string(),
        "maze must have at least one cell per side"
    );
}

/// Walls of `Maze::seeded(8, 42)`. `StdRng` streams are only stable within a
/// `rand` minor series, so this has to be recaptured when the workspace moves
/// off `rand` 0.9.
#[test]
fn seed_42_reproduces_the_recorded_8x8_maze() {
    let maze = Maze::seeded(8, 42).expect("8 is a valid size");

    assert_eq!(
        maze.horizontal(),
        [
            [true, true, true, true, true, true, true, true],
            [false, false, true, true, true, true, true, false],
            [false, true, true, true, false, true, false, true],
            [false, false, true, false, true, false, true, false],
            [true, true, false, true, false, true, false, true],
            [false, false, true, false, false, true, true, false],
            [false, false, true, false, false, false, true, false],
            [false, true, false, true, true, false, false, true],
        ]
    );
    assert_eq!(
        maze.vertical(),
        [
            [true, true, false, false, false, false, false, false],
            [true, true, false, false, false, false, false, true],
            [true, true, false, false, true, false, true, false],
            [true, false, true, false, true, false, true, false],
            [true, false, true, false, true, false, true, false],
            [true, true, false, true, true, true, false, false],
            [true, true, true, false, true, true, true, false],
            [true, false, false, false, false, false, true, false],
        ]
    );
    assert_eq!(maze.draws(), 139);
    assert_is_perfect(&maze);
}
