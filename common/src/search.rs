//! Depth-first maze exploration driven one move at a time.
//!
//! The frontier ("look") is consumed LIFO, so the most recently discovered
//! cell is examined next. A cell enters the discovered set exactly once, the
//! first time it is found open; that set alone decides whether a cell is
//! expanded again, so the frontier may hold duplicates. The backtrack stack
//! records the cells actually occupied. When a cell turns out to be a dead
//! end the walker rewinds along that path one cell per step until it reaches
//! a cell with something left to discover, or runs out of path and jumps to
//! whatever the frontier holds next.

use log::debug;
use strum::IntoEnumIterator;

use crate::{
    actor::State,
    list::LinkedList,
    maze::Grid,
    point::{Direction, Point},
    stack::Stack,
};

/// Result of one call to [`Search::step`]: where the walker now stands (if
/// it moved) and the state it is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub position: Option<Point>,
    pub state: State,
}

#[derive(Clone, Debug)]
pub struct Search {
    look: Stack<Point>,
    discovered: LinkedList<Point>,
    backtrack: Stack<Point>,
    backtracking: bool,
}

impl Search {
    /// Discovers `start` and queues it as the first cell to look around.
    pub fn new(start: Point) -> Self {
        let mut discovered = LinkedList::new();
        discovered.add_to_front(start);

        let mut look = Stack::new();
        look.push(start);

        Self {
            look,
            discovered,
            backtrack: Stack::new(),
            backtracking: true,
        }
    }

    pub fn set_backtracking(&mut self, enabled: bool) {
        self.backtracking = enabled;
    }

    pub fn is_backtracking(&self) -> bool {
        self.backtracking
    }

    pub fn is_discovered(&self, point: Point) -> bool {
        self.discovered.find_item(&point).is_some()
    }

    pub fn discovered(&self) -> &LinkedList<Point> {
        &self.discovered
    }

    /// The cell that will be looked around on the next step.
    pub fn target(&self) -> Option<Point> {
        self.look.top().copied()
    }

    pub fn frontier_len(&self) -> usize {
        self.look.len()
    }

    /// Occupied cells, most recent first.
    pub fn path(&self) -> impl Iterator<Item = Point> + '_ {
        self.backtrack.iter().copied()
    }

    /// Makes exactly one move: onto the next frontier cell, queueing its
    /// open undiscovered neighbors, or, on a dead end, schedules the rewind
    /// to the previously occupied cell.
    pub fn step<G: Grid + ?Sized>(&mut self, grid: &G) -> Step {
        let Some(current) = self.look.pop() else {
            return Step {
                position: None,
                state: State::Stuck,
            };
        };

        if self.backtrack.top() != Some(&current) {
            self.backtrack.push(current);
        }

        if current == grid.end_point() {
            return Step {
                position: Some(current),
                state: State::Freedom,
            };
        }

        let mut found = 0;
        for direction in Direction::iter() {
            let neighbor = current.neighbor(direction);
            if grid.is_cell_open(neighbor) && !self.is_discovered(neighbor) {
                self.discovered.add_to_rear(neighbor);
                self.look.push(neighbor);
                found += 1;
            }
        }

        if found > 0 {
            debug!("at {current}: queued {found} new cell(s)");
            return Step {
                position: Some(current),
                state: State::Looking,
            };
        }

        let mut state = State::Looking;
        if self.backtracking {
            // Drop our own entry, then hand the cell before it back to the
            // frontier so the next step steps back onto it.
            self.backtrack.pop();
            if let Some(prior) = self.backtrack.pop() {
                debug!("dead end at {current}: backing up to {prior}");
                self.look.push(prior);
                state = State::Backtrack;
            }
        }

        if self.look.is_empty() {
            state = State::Stuck;
        }

        Step {
            position: Some(current),
            state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Maze;

    fn maze(rows: &[&str]) -> Maze {
        Maze::from_text(&rows.join("\n")).expect("test maze should parse")
    }

    fn run(search: &mut Search, maze: &Maze, limit: usize) -> Vec<Step> {
        let mut steps = Vec::new();
        for _ in 0..limit {
            let step = search.step(maze);
            steps.push(step);
            if step.state.is_terminal() {
                break;
            }
        }
        steps
    }

    #[test]
    fn open_three_by_three_is_solved_in_four_moves() {
        let maze = maze(&["S..", "...", "..E"]);
        let mut search = Search::new(maze.start_point());

        let steps = run(&mut search, &maze, 20);
        let positions: Vec<Point> = steps.iter().filter_map(|s| s.position).collect();

        assert_eq!(steps.last().map(|s| s.state), Some(State::Freedom));
        assert_eq!(
            positions,
            vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(1, 2),
                Point::new(2, 2),
            ]
        );
        for pair in positions.windows(2) {
            assert!(pair[0].is_adjacent(pair[1]), "{} -> {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn walled_in_start_is_stuck() {
        let maze = maze(&["#####", "#S#E#", "#####"]);
        let mut search = Search::new(maze.start_point());

        let step = search.step(&maze);
        assert_eq!(step.state, State::Stuck);
        assert_eq!(step.position, Some(maze.start_point()));

        let again = search.step(&maze);
        assert_eq!(again, Step { position: None, state: State::Stuck });
    }

    #[test]
    fn empty_frontier_reports_stuck() {
        let maze = maze(&["S#E"]);
        let mut search = Search::new(maze.start_point());
        search.look.pop();

        assert_eq!(search.step(&maze).state, State::Stuck);
    }

    #[test]
    fn dead_end_branch_backtracks_to_branch_point() {
        // From S the walker prefers down (pushed last), runs into the dead
        // end at (1,3), then has to come back up to the junction at (1,1).
        let maze = maze(&[
            "#####",
            "#S.E#",
            "#.###",
            "#.###",
            "#####",
        ]);
        let mut search = Search::new(maze.start_point());

        let steps = run(&mut search, &maze, 20);
        let trail: Vec<(Point, State)> = steps
            .iter()
            .map(|s| (s.position.expect("walker should move every step"), s.state))
            .collect();

        assert_eq!(
            trail,
            vec![
                (Point::new(1, 1), State::Looking),
                (Point::new(1, 2), State::Looking),
                (Point::new(1, 3), State::Backtrack),
                (Point::new(1, 2), State::Backtrack),
                (Point::new(1, 1), State::Looking),
                (Point::new(2, 1), State::Looking),
                (Point::new(3, 1), State::Freedom),
            ]
        );
    }

    #[test]
    fn every_cell_is_discovered_once() {
        let maze = maze(&["S...", ".##.", "...E"]);
        let mut search = Search::new(maze.start_point());
        run(&mut search, &maze, 50);

        let discovered: Vec<Point> = search.discovered().iter().copied().collect();
        for (i, point) in discovered.iter().enumerate() {
            assert!(maze.is_cell_open(*point));
            assert_eq!(search.discovered().find_item(point), Some(i));
        }
    }

    #[test]
    fn consecutive_visits_are_recorded_once() {
        let maze = maze(&["S.E"]);
        let mut search = Search::new(maze.start_point());
        search.backtrack.push(maze.start_point());

        assert_eq!(search.step(&maze).state, State::Looking);
        assert_eq!(search.path().collect::<Vec<_>>(), vec![maze.start_point()]);
    }

    #[test]
    fn without_backtracking_dead_ends_jump_to_the_next_frontier_cell() {
        let maze = maze(&[
            "#####",
            "#S.E#",
            "#.###",
            "#.###",
            "#####",
        ]);
        let mut search = Search::new(maze.start_point());
        search.set_backtracking(false);

        let steps = run(&mut search, &maze, 20);
        let positions: Vec<Point> = steps.iter().filter_map(|s| s.position).collect();

        assert!(steps.iter().all(|s| s.state != State::Backtrack));
        assert_eq!(steps.last().map(|s| s.state), Some(State::Freedom));
        assert_eq!(
            positions,
            vec![
                Point::new(1, 1),
                Point::new(1, 2),
                Point::new(1, 3),
                Point::new(2, 1),
                Point::new(3, 1),
            ]
        );
    }

    #[test]
    fn unreachable_exit_ends_stuck() {
        let maze = maze(&["S.#E", "..##"]);
        let mut search = Search::new(maze.start_point());

        let steps = run(&mut search, &maze, 50);
        assert_eq!(steps.last().map(|s| s.state), Some(State::Stuck));
        assert_eq!(search.discovered().len(), 4);
    }
}
