use crate::stack::Stack;

use super::super::MazeMaker;

pub trait Backtrack {
    fn backtrack(&mut self);
}

impl Backtrack for MazeMaker {
    fn backtrack(&mut self) {
        let Some(initial_cell) = self.pick_cell() else {
            return;
        };
        self.visit_cell(initial_cell);

        let mut stack = Stack::new();
        stack.push(initial_cell);

        while let Some(curr) = stack.pop() {
            if let Some(next) = self.pick_unvisited_neighbor(curr) {
                stack.push(curr);
                self.remove_wall_between(curr, next);
                self.visit_cell(next);
                stack.push(next);
            }
        }
    }
}
