//! Seagull - terminal arcade game library.
//!
//! This module exposes the simulation core, frame driver and adapters for
//! the binaries and for testing.

pub mod audio;
pub mod core;
pub mod input;
pub mod sim;
pub mod ui;
pub mod utils;

pub use crate::core::{GameConfig, GameLoop, Rules};
pub use crate::sim::{Bounds, Cue, InputEvent, Phase, Session, TickResult};
