use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::Print,
    terminal::{Clear, ClearType},
};

use common::{
    maze::{Grid, Maze},
    player::Player,
    point::Point,
};

const WALL: &str = "██";
const SPACE: &str = "  ";
const DISCOVERED: &str = "··";
const TARGET: &str = "<>";
const EXIT: &str = "[]";

/// Draws the maze as text, two columns per cell.
pub fn frame(maze: &Maze, player: &Player) -> String {
    let target = player.target_point();
    let mut out = String::new();

    for y in 0..maze.height() {
        if y > 0 {
            out.push('\n');
        }

        for x in 0..maze.width() {
            let here = Point::new(x as i32, y as i32);

            if here == player.position() {
                out.push(player.sprite());
                out.push(' ');
            } else if here == maze.end_point() {
                out.push_str(EXIT);
            } else if !maze.is_cell_open(here) {
                out.push_str(WALL);
            } else if Some(here) == target {
                out.push_str(TARGET);
            } else if player.is_discovered(here) {
                out.push_str(DISCOVERED);
            } else {
                out.push_str(SPACE);
            }
        }
    }

    out
}

pub fn status(player: &Player, step: usize) -> String {
    let state = player.state().to_string();
    let mut line = format!("step {step:>5}  {state:<9}  at {}", player.position());
    if let Some(said) = player.say() {
        line.push_str("  ");
        line.push_str(&said);
    }
    line
}

pub fn draw(out: &mut impl Write, maze: &Maze, player: &Player, step: usize) -> io::Result<()> {
    queue!(out, Hide, MoveTo(0, 0), Clear(ClearType::All))?;

    for line in frame(maze, player).lines() {
        queue!(out, Print(line), Print("\r\n"))?;
    }
    queue!(out, Print(status(player, step)), Print("\r\n"))?;

    out.flush()
}

pub fn restore(out: &mut impl Write) -> io::Result<()> {
    execute!(out, Show)
}

#[cfg(test)]
mod tests {
    use common::actor::State;

    use super::*;

    fn setup() -> (Maze, Player) {
        let maze = Maze::from_text("#####\n#S .#\n###E#").expect("valid maze");
        let player = Player::new(maze.start_point(), "Dory", 'D');
        (maze, player)
    }

    #[test]
    fn frame_marks_player_walls_and_exit() {
        let (maze, player) = setup();

        assert_eq!(
            frame(&maze, &player),
            "██████████\n██D     ██\n██████[]██"
        );
    }

    #[test]
    fn frame_shows_discovered_cells_and_next_target() {
        let (maze, mut player) = setup();
        player.update(&maze);
        player.update(&maze);

        // At (2,1) now: (1,1) is behind us, (3,1) is next.
        assert_eq!(
            frame(&maze, &player).lines().nth(1),
            Some("██··D <>██")
        );
    }

    #[test]
    fn status_includes_state_and_speech() {
        let (maze, mut player) = setup();
        player.update(&maze);

        let line = status(&player, 1);
        assert!(line.contains(&State::Looking.to_string()));
        assert!(line.ends_with("Dory: Where's the exit?"));
    }

    #[test]
    fn draw_writes_every_row() {
        let (maze, player) = setup();
        let mut buffer = Vec::new();

        draw(&mut buffer, &maze, &player, 0).expect("writing to a Vec cannot fail");
        let text = String::from_utf8_lossy(&buffer);
        assert!(text.contains("██D     ██"));
        assert!(text.contains("at (1,1)"));
    }
}
