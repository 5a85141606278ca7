//! Seagull data structures shared by the simulation and its adapters.

use serde::{Deserialize, Serialize};

/// Session phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Idle title screen, waiting for the first flap.
    Start,
    /// Simulation running.
    Playing,
    /// Run ended; waiting for a flap to restart.
    GameOver,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Playing => "playing",
            Self::GameOver => "gameOver",
        }
    }
}

/// Logical input events delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Space, tap or click.
    Flap,
    /// Viewport changed size. Affects later spawns and clamping only.
    Resize { width: f64, height: f64 },
}

/// One-shot audio/visual cues for the presentation adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cue {
    Flap,
    Collision,
    ScoreBonus,
    MusicStart,
    MusicStop,
}

/// Logical screen dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned box, `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// True if the horizontal extents overlap. Touching edges do not count.
    pub fn overlaps_horizontally(&self, other: &BoundingBox) -> bool {
        self.right() > other.left() && self.left() < other.right()
    }

    /// True if any interior point is shared. Touching edges do not count.
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        self.overlaps_horizontally(other)
            && self.bottom() > other.top()
            && self.top() < other.bottom()
    }
}

/// Uniform sample from `[lo, hi)`, collapsing to `lo` when the range is empty.
///
/// Spawn ranges shrink with the viewport, so a very small terminal can
/// produce an inverted range.
pub(crate) fn sample_range<R: rand::Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}
