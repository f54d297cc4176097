pub mod actor;
pub mod list;
pub mod maze;
pub mod player;
pub mod point;
pub mod search;
pub mod stack;
