pub mod algorithms;

use rand::{
    SeedableRng,
    prelude::{IndexedRandom, Rng},
    rngs::StdRng,
};
use strum::{Display, EnumIter, EnumString};

use algorithms::{backtrack::Backtrack, binary_tree::BinaryTree, prim::Prim};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Algorithm {
    #[default]
    Backtrack, // Long winding corridors.
    Prim,       // Many short dead ends.
    BinaryTree, // Corridors funnel towards the middle.
}

// A room: a cell with odd coordinates. Walls and pillars sit between rooms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub fn new(grid: &[Vec<u8>], x: usize, y: usize) -> Cell {
        debug_assert!(
            y < grid.len() && x < grid[0].len(),
            "cell coordinates are out of bounds"
        );

        Cell { x, y }
    }
}

/// Carves a perfect maze (every room reachable, no loops) out of a grid that
/// starts solid. `0` is a space, `1` is a wall.
pub struct MazeMaker {
    pub grid: Vec<Vec<u8>>,
    pub rng: StdRng,
    width: usize,
    height: usize,
}

impl MazeMaker {
    pub fn new(
        horizontal_radius: usize,
        vertical_radius: usize,
        generator: Algorithm,
        seed: Option<u64>,
    ) -> Self {
        let width = 2 * horizontal_radius + 1;
        let height = 2 * vertical_radius + 1;

        let grid = vec![vec![1; width]; height];
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut maze = MazeMaker {
            grid,
            rng,
            width,
            height,
        };

        match generator {
            Algorithm::Backtrack => maze.backtrack(),
            Algorithm::Prim => maze.prim(),
            Algorithm::BinaryTree => maze.binary_tree(),
        }
        maze
    }

    fn get_neighbors(&self, cell: Cell, only_if_unvisited: bool) -> Vec<Cell> {
        let mut valid_neighbors = Vec::new();
        let directions = [(0, 2), (2, 0), (0, -2), (-2, 0)];

        for &(dx, dy) in &directions {
            let nx = cell.x as isize + dx;
            let ny = cell.y as isize + dy;

            let in_bounds =
                nx > 0 && nx < self.width as isize - 1 && ny > 0 && ny < self.height as isize - 1;
            if !in_bounds {
                continue;
            }

            let neighbor = Cell::new(&self.grid, nx as usize, ny as usize);
            if !only_if_unvisited || !self.is_visited(neighbor) {
                valid_neighbors.push(neighbor);
            }
        }

        valid_neighbors
    }

    fn pick_unvisited_neighbor(&mut self, cell: Cell) -> Option<Cell> {
        let neighbors = self.get_neighbors(cell, true);
        neighbors.choose(&mut self.rng).copied()
    }

    fn visit_cell(&mut self, cell: Cell) {
        let Cell { x, y } = cell;
        self.grid[y][x] = 0;
    }

    fn is_visited(&self, cell: Cell) -> bool {
        self.grid[cell.y][cell.x] == 0
    }

    fn pick_cell(&mut self) -> Option<Cell> {
        let cells = self.get_cells();
        cells.choose(&mut self.rng).copied()
    }

    fn get_cells(&self) -> Vec<Cell> {
        let mut cells = Vec::new();

        for y in (1..self.height).step_by(2) {
            for x in (1..self.width).step_by(2) {
                cells.push(Cell::new(&self.grid, x, y));
            }
        }

        cells
    }

    fn remove_wall_between(&mut self, cell_1: Cell, cell_2: Cell) {
        let x = (cell_1.x + cell_2.x) / 2;
        let y = (cell_1.y + cell_2.y) / 2;
        self.grid[y][x] = 0;
    }

    fn random_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn every_room_is_carved() {
        for algorithm in Algorithm::iter() {
            let maker = MazeMaker::new(5, 4, algorithm, Some(7));

            assert_eq!(maker.grid.len(), 9);
            assert_eq!(maker.grid[0].len(), 11);
            for cell in maker.get_cells() {
                assert!(maker.is_visited(cell), "{algorithm} left {cell:?} solid");
            }
        }
    }

    #[test]
    fn outer_wall_is_never_carved() {
        for algorithm in Algorithm::iter() {
            let maker = MazeMaker::new(6, 6, algorithm, Some(11));
            let last = maker.grid.len() - 1;

            for x in 0..maker.grid[0].len() {
                assert_eq!(maker.grid[0][x], 1);
                assert_eq!(maker.grid[last][x], 1);
            }
            for row in &maker.grid {
                assert_eq!(row[0], 1);
                assert_eq!(row[row.len() - 1], 1);
            }
        }
    }

    #[test]
    fn same_seed_gives_same_maze() {
        let a = MazeMaker::new(8, 8, Algorithm::Prim, Some(42));
        let b = MazeMaker::new(8, 8, Algorithm::Prim, Some(42));
        assert_eq!(a.grid, b.grid);
    }

    #[test]
    fn algorithm_names_parse_case_insensitively() {
        assert_eq!("binary-tree".parse::<Algorithm>(), Ok(Algorithm::BinaryTree));
        assert_eq!("Backtrack".parse::<Algorithm>(), Ok(Algorithm::Backtrack));
        assert!("kruskal".parse::<Algorithm>().is_err());
        assert_eq!(Algorithm::BinaryTree.to_string(), "binary-tree");
    }
}
