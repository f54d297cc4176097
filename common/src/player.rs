use log::{debug, info};

use crate::{
    actor::{Actor, Interact, State},
    list::LinkedList,
    maze::Grid,
    point::Point,
    search::Search,
};

pub const DEFAULT_NAME: &str = "Nemo";
pub const DEFAULT_SPRITE: char = '@';

/// The maze walker: an actor that explores one move per [`Player::update`].
#[derive(Clone, Debug)]
pub struct Player {
    actor: Actor,
    search: Search,
}

impl Player {
    /// Places the player at `start`, which is discovered and queued as the
    /// first cell to look around.
    pub fn new(start: Point, name: impl Into<String>, sprite: char) -> Self {
        Self {
            actor: Actor::new(name, sprite, start),
            search: Search::new(start),
        }
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn name(&self) -> &str {
        self.actor.name()
    }

    pub fn sprite(&self) -> char {
        self.actor.sprite()
    }

    pub fn position(&self) -> Point {
        self.actor.position()
    }

    pub fn state(&self) -> State {
        self.actor.state()
    }

    pub fn interact(&self) -> Interact {
        self.actor.interact()
    }

    pub fn set_interact(&mut self, interact: Interact) {
        self.actor.set_interact(interact);
    }

    pub fn stuck(&self) -> bool {
        self.state() == State::Stuck
    }

    pub fn found_exit(&self) -> bool {
        self.state() == State::Freedom
    }

    pub fn toggle_backtrack(&mut self, toggle: bool) {
        self.search.set_backtracking(toggle);
    }

    /// The point the player wants to look around next, if any is left.
    pub fn target_point(&self) -> Option<Point> {
        self.search.target()
    }

    pub fn is_discovered(&self, point: Point) -> bool {
        self.search.is_discovered(point)
    }

    pub fn discovered(&self) -> &LinkedList<Point> {
        self.search.discovered()
    }

    /// Takes one step through `grid`: either looks around the next frontier
    /// cell or backs up one cell. Once the player is free or stuck further
    /// calls change nothing.
    pub fn update<G: Grid + ?Sized>(&mut self, grid: &G) -> State {
        if self.state().is_terminal() {
            return self.state();
        }

        let step = self.search.step(grid);
        if let Some(position) = step.position {
            self.actor.set_position(position);
        }
        self.actor.set_state(step.state);

        match step.state {
            State::Freedom => info!("{} found the exit at {}", self.name(), self.position()),
            State::Stuck => info!(
                "{} is stuck at {}: there is no solution",
                self.name(),
                self.position()
            ),
            State::Backtrack | State::Looking => {
                debug!("{} is {} at {}", self.name(), step.state, self.position())
            }
        }

        step.state
    }

    /// What the player has to say for itself. Freedom beats being attacked,
    /// being attacked beats being lost.
    pub fn say(&self) -> Option<String> {
        let name = self.name();

        if self.state() == State::Freedom {
            return Some(format!("{name}: WEEEEEEEEEEEEEEE!"));
        }

        match self.interact() {
            Interact::Attack => Some(format!("{name}: OUCH!")),
            Interact::Greet => None,
            Interact::Alone => match self.state() {
                State::Looking => Some(format!("{name}: Where's the exit?")),
                State::Stuck => Some(format!("{name}: Oh no! I'm Trapped!")),
                State::Backtrack => Some(format!("{name}: Gotta backtrack...")),
                State::Freedom => None,
            },
        }
    }
}
