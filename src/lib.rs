//! Classic single-player snake on a 20x20 grid.
//!
//! [`game::GameState`] is the whole simulation. The bevy plugins wire it to a
//! fixed-interval timer, the keyboard, the screen and the speakers.

pub mod food;
pub mod game;
pub mod rendering;
pub mod snake;
pub mod sound;
pub mod ui;

#[cfg(test)]
mod testing;

pub use game::{Direction, GameError, GameState, Position, RunState, Snapshot, TickEvents};
