use super::super::MazeMaker;

pub trait BinaryTree {
    fn binary_tree(&mut self);
}

impl BinaryTree for MazeMaker {
    fn binary_tree(&mut self) {
        // Spine coordinates, forced odd so they land on rooms rather than
        // pillars.
        let mid_x = (self.width / 2) | 1;
        let mid_y = (self.height / 2) | 1;

        for y in (1..self.height.saturating_sub(1)).rev().filter(|y| y % 2 == 1) {
            for x in (1..self.width.saturating_sub(1)).filter(|x| x % 2 == 1) {
                self.grid[y][x] = 0;

                let mut directions = Vec::new();

                // Lean towards the spine. On the spine itself there is no
                // horizontal option, which keeps the two halves from looping
                // into each other.
                if x < mid_x {
                    directions.push((0, 1)); // East
                } else if x > mid_x {
                    directions.push((0, -1)); // West
                }

                if y < mid_y {
                    directions.push((1, 0)); // South
                } else if y > mid_y {
                    directions.push((-1, 0)); // North
                }

                if !directions.is_empty() {
                    let r = self.random_index(directions.len());
                    let (dy, dx) = directions[r];
                    let wall_y = (y as isize + dy) as usize;
                    let wall_x = (x as isize + dx) as usize;
                    self.grid[wall_y][wall_x] = 0;
                }
            }
        }
    }
}
