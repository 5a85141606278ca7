//! Seagull simulation core.
//!
//! A real-time arcade game where a seagull flaps through scrolling
//! obstacles. Gravity pulls the bird down each frame, a flap adds an upward
//! impulse, and touching an obstacle ends the run. Everything here is pure
//! state: rendering, audio and storage live behind the types in `types`.

pub mod background;
pub mod obstacle;
pub mod player;
pub mod power_up;
pub mod session;
pub mod types;

pub use background::{Cloud, ParallaxLayer, Scenery};
pub use obstacle::{GapObstacle, GroundObstacle, Obstacle};
pub use player::Player;
pub use power_up::PowerUp;
pub use session::{Session, TickResult};
pub use types::*;
