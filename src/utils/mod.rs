//! Utility modules: build info, JSON persistence, high-score storage, logging.

pub mod build_info;
pub mod high_score;
pub mod logging;
pub mod persistence;

pub use build_info::*;
pub use high_score::*;
