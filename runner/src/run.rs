use std::{
    io::{self, stdout},
    thread,
};

use log::{info, warn};
use thiserror::Error;

use common::{
    actor::State,
    maze::{Maze, MazeError},
    player::Player,
    point::Point,
};

use crate::{
    config::{Config, MazeSource},
    render,
};

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Maze(#[from] MazeError),
    #[error("failed to draw the maze: {0}")]
    Io(#[from] io::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    pub state: State,
    pub steps: usize,
    pub position: Point,
    pub discovered: usize,
}

pub fn build_maze(source: &MazeSource) -> Result<Maze, MazeError> {
    match source {
        MazeSource::File(path) => {
            info!("loading maze from {}", path.display());
            Maze::load(path)
        }
        MazeSource::Generated {
            radius,
            algorithm,
            seed,
        } => {
            info!("generating a radius {radius} maze with {algorithm}");
            Ok(Maze::generate(*radius, *algorithm, *seed))
        }
    }
}

pub fn build_player(config: &Config, maze: &Maze) -> Player {
    let mut player = Player::new(maze.start_point(), config.name.clone(), config.sprite);
    player.toggle_backtrack(config.backtrack);
    player
}

/// Updates `player` until it is free, stuck, or has used up `max_steps`,
/// calling `on_step` after every update.
pub fn walk<F>(
    maze: &Maze,
    player: &mut Player,
    max_steps: usize,
    mut on_step: F,
) -> io::Result<Summary>
where
    F: FnMut(&Player, usize) -> io::Result<()>,
{
    let mut steps = 0;

    while steps < max_steps && !player.state().is_terminal() {
        player.update(maze);
        steps += 1;
        on_step(player, steps)?;
    }

    if !player.state().is_terminal() {
        warn!(
            "{} gave up after {} steps at {}",
            player.name(),
            steps,
            player.position()
        );
    }

    Ok(Summary {
        state: player.state(),
        steps,
        position: player.position(),
        discovered: player.discovered().len(),
    })
}

pub fn run(config: &Config) -> Result<Summary, RunError> {
    let maze = build_maze(&config.maze)?;
    let mut player = build_player(config, &maze);

    if config.headless {
        return Ok(walk(&maze, &mut player, config.max_steps, |_, _| Ok(()))?);
    }

    let mut out = stdout();
    render::draw(&mut out, &maze, &player, 0)?;

    let result = walk(&maze, &mut player, config.max_steps, |player, step| {
        thread::sleep(config.step_delay);
        render::draw(&mut out, &maze, player, step)
    });
    render::restore(&mut stdout())?;

    Ok(result?)
}
