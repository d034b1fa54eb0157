// Maze:
pub const SIZE: usize = 8; // Cells per side when no size is configured.

// Environment:
pub const SIZE_VAR: &str = "MAZE_SIZE";
pub const SEED_VAR: &str = "MAZE_SEED";
pub const ROUNDS_VAR: &str = "MAZE_ROUNDS"; // A fresh maze is carved after each escape.
pub const WALK_VAR: &str = "MAZE_WALK"; // Letters U, R, D, L; each turns the walker and steps once.
