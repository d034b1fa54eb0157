use log::{debug, info};

use maze::{
    Maze, MazeError,
    config::Config,
    walker::{Step, Walker},
};

/// Builds the configured maze and returns everything the viewer prints: the
/// maze itself, then one line per scripted move. Each escape before the last
/// round carves a new maze and puts the walker back at the start.
pub fn run(config: &Config) -> Result<String, MazeError> {
    let mut maze = match config.seed {
        Some(seed) => Maze::seeded(config.size, seed)?,
        None => Maze::from_entropy(config.size)?,
    };
    info!(
        "generated a {}x{} maze in {} draws",
        maze.size(),
        maze.size(),
        maze.draws()
    );

    let mut lines = vec![maze.log()];
    let mut walker = Walker::new();
    let mut round = 1;

    for &direction in &config.walk {
        walker.turn(direction);
        let step = walker.advance(&maze);
        debug!("{:?} -> {:?}", direction, step);

        lines.push(match step {
            Step::Moved(cell) => {
                format!("{:?}: moved to ({}, {})", direction, cell.row, cell.col)
            }
            Step::Blocked => format!("{:?}: blocked by a wall", direction),
            Step::Escaped => format!("{:?}: escaped!", direction),
        });

        if walker.has_won() {
            if round == config.rounds {
                break;
            }

            round += 1;
            maze.reset();
            walker.reset();
            info!("round {}: new maze after {} draws", round, maze.draws());
            lines.push(maze.log());
        }
    }

    Ok(lines.join("\n"))
}
