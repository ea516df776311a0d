//! Platform abstraction layer
//!
//! Input arrives from whatever event source the host has. The simulation
//! only asks for the most recent desired paddle position.

pub mod input;

pub use input::{InputProvider, PointerInput, pointer_to_paddle_x};
