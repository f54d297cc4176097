pub mod maker;

use std::{fmt, fs, io, path::Path};

use thiserror::Error;

pub use maker::Algorithm;
use maker::MazeMaker;

use crate::point::Point;

/// What a walker needs to know about the board it is exploring.
pub trait Grid {
    /// Cells outside the board are never open.
    fn is_cell_open(&self, point: Point) -> bool;
    fn end_point(&self) -> Point;
}

#[derive(Debug, Error)]
pub enum MazeError {
    #[error("maze is empty")]
    Empty,
    #[error("row {row} is {found} cells wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown glyph {glyph:?} at row {row}, column {column}")]
    UnknownGlyph {
        glyph: char,
        row: usize,
        column: usize,
    },
    #[error("maze has no start cell ('S')")]
    MissingStart,
    #[error("maze has no end cell ('E')")]
    MissingEnd,
    #[error("maze has more than one {0:?} cell")]
    Duplicate(char),
    #[error("failed to read maze file: {0}")]
    Io(#[from] io::Error),
}

#[derive(Clone, PartialEq, Eq)]
pub struct Maze {
    pub grid: Vec<Vec<u8>>, // Indexed `grid[y][x]`; 0 is a space, 1 is a wall.
    start: Point,
    end: Point,
}

impl Maze {
    /// Generates a `(2r+1) x (2r+1)` maze, entered at the top-left room and
    /// left from the bottom-right room.
    pub fn generate(radius: usize, generator: Algorithm, seed: Option<u64>) -> Self {
        let radius = radius.max(1);
        let maker = MazeMaker::new(radius, radius, generator, seed);
        let far = (2 * radius - 1) as i32;

        Self {
            grid: maker.grid,
            start: Point::new(1, 1),
            end: Point::new(far, far),
        }
    }

    /// Parses a maze drawn with `#` for walls, a space or `.` for open
    /// cells, `S` for the start and `E` for the exit. Trailing blank lines
    /// are ignored.
    pub fn from_text(text: &str) -> Result<Self, MazeError> {
        let lines: Vec<&str> = text.trim_end_matches(['\n', '\r']).lines().collect();
        if lines.is_empty() || lines.iter().all(|line| line.is_empty()) {
            return Err(MazeError::Empty);
        }

        let width = lines[0].chars().count();
        let mut grid = Vec::with_capacity(lines.len());
        let mut start = None;
        let mut end = None;

        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(MazeError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }

            let mut cells = Vec::with_capacity(width);
            for (column, glyph) in line.chars().enumerate() {
                let here = Point::new(column as i32, row as i32);
                let cell = match glyph {
                    '#' => 1,
                    ' ' | '.' => 0,
                    'S' => {
                        if start.replace(here).is_some() {
                            return Err(MazeError::Duplicate('S'));
                        }
                        0
                    }
                    'E' => {
                        if end.replace(here).is_some() {
                            return Err(MazeError::Duplicate('E'));
                        }
                        0
                    }
                    _ => return Err(MazeError::UnknownGlyph { glyph, row, column }),
                };
                cells.push(cell);
            }
            grid.push(cells);
        }

        Ok(Self {
            grid,
            start: start.ok_or(MazeError::MissingStart)?,
            end: end.ok_or(MazeError::MissingEnd)?,
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, MazeError> {
        let text = fs::read_to_string(path)?;
        Self::from_text(&text)
    }

    pub fn start_point(&self) -> Point {
        self.start
    }

    pub fn width(&self) -> usize {
        self.grid.first().map_or(0, |row| row.len())
    }

    pub fn height(&self) -> usize {
        self.grid.len()
    }

    pub fn spaces(&self) -> usize {
        self.grid
            .iter()
            .map(|row| row.iter().filter(|&&cell| cell == 0).count())
            .sum()
    }

    pub fn log(&self) -> String {
        self.grid
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&cell| if cell == 0 { "  " } else { "██" })
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

impl Grid for Maze {
    fn is_cell_open(&self, point: Point) -> bool {
        if point.x < 0 || point.y < 0 {
            return false;
        }

        self.grid
            .get(point.y as usize)
            .and_then(|row| row.get(point.x as usize))
            .is_some_and(|&cell| cell == 0)
    }

    fn end_point(&self) -> Point {
        self.end
    }
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.log())
    }
}
