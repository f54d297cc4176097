use super::super::{Cell, MazeMaker};

pub trait Prim {
    fn prim(&mut self);
}

impl Prim for MazeMaker {
    fn prim(&mut self) {
        let Some(initial_cell) = self.pick_cell() else {
            return;
        };

        // Each entry is a passage that could be opened from a room already in
        // the maze to one of its neighbors.
        let mut frontier = Vec::new();
        visit_new_cell_and_add_its_passages(self, initial_cell, &mut frontier);

        while !frontier.is_empty() {
            let i = self.random_index(frontier.len());
            let (from, to) = frontier.swap_remove(i);

            if !self.is_visited(to) {
                self.remove_wall_between(from, to);
                visit_new_cell_and_add_its_passages(self, to, &mut frontier);
            }
        }
    }
}

fn visit_new_cell_and_add_its_passages(
    maze: &mut MazeMaker,
    cell: Cell,
    frontier: &mut Vec<(Cell, Cell)>,
) {
    maze.visit_cell(cell);
    for neighbor in maze.get_neighbors(cell, true) {
        frontier.push((cell, neighbor));
    }
}
