//! Core game module: grid primitives, constants and the simulation state.
//!
//! Nothing in here draws or plays audio. The plugins in the sibling modules
//! poll [`GameState`] and react to its [`TickEvents`].

mod components;
mod constants;
mod error;
mod state;

pub use components::*;
pub use constants::*;
pub use error::*;
pub use state::*;
