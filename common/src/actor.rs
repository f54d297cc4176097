use strum::{Display, EnumString};

use crate::point::Point;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum State {
    #[default]
    Looking,
    Backtrack,
    Stuck,
    Freedom,
}

impl State {
    pub fn is_terminal(self) -> bool {
        matches!(self, State::Stuck | State::Freedom)
    }
}

/// How an actor is currently dealing with the other actors around it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Interact {
    #[default]
    Alone,
    Greet,
    Attack,
}

/// Everything on the board has a name, a glyph, a cell and a state.
#[derive(Clone, Debug)]
pub struct Actor {
    name: String,
    sprite: char,
    position: Point,
    state: State,
    interact: Interact,
}

impl Actor {
    pub fn new(name: impl Into<String>, sprite: char, position: Point) -> Self {
        Self {
            name: name.into(),
            sprite,
            position,
            state: State::default(),
            interact: Interact::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sprite(&self) -> char {
        self.sprite
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn set_state(&mut self, state: State) {
        self.state = state;
    }

    pub fn interact(&self) -> Interact {
        self.interact
    }

    pub fn set_interact(&mut self, interact: Interact) {
        self.interact = interact;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_actor_is_looking_and_alone() {
        let actor = Actor::new("Dory", 'D', Point::new(1, 2));

        assert_eq!(actor.name(), "Dory");
        assert_eq!(actor.sprite(), 'D');
        assert_eq!(actor.position(), Point::new(1, 2));
        assert_eq!(actor.state(), State::Looking);
        assert_eq!(actor.interact(), Interact::Alone);
    }

    #[test]
    fn state_names_are_uppercase() {
        assert_eq!(State::Backtrack.to_string(), "BACKTRACK");
        assert_eq!("FREEDOM".parse::<State>(), Ok(State::Freedom));
        assert!(State::Stuck.is_terminal());
        assert!(!State::Looking.is_terminal());
    }
}
