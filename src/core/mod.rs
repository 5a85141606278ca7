//! Core configuration, timing and the frame driver.

pub mod clock;
pub mod config;
pub mod constants;
pub mod game_loop;

pub use clock::FrameClock;
pub use config::{GameConfig, Physics, Rules};
pub use constants::*;
pub use game_loop::GameLoop;
