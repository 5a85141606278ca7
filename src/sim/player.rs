//! The seagull: vertical physics under gravity with an additive flap.

use super::types::{BoundingBox, Bounds};
use crate::core::config::Physics;

#[derive(Debug, Clone)]
pub struct Player {
    /// Left edge of the box. Fixed while a run is in progress.
    pub x: f64,
    /// Vertical centre of the box (row 0 = ceiling).
    pub y: f64,
    /// Pixels per frame, positive = downward.
    pub velocity: f64,
    pub gravity: f64,
    pub flap_impulse: f64,
    pub size: f64,
}

impl Player {
    pub fn new(bounds: Bounds, physics: &Physics) -> Self {
        Self {
            x: bounds.width / 4.0,
            y: bounds.height / 2.0,
            velocity: 0.0,
            gravity: physics.gravity,
            flap_impulse: physics.flap_impulse,
            size: physics.player_size,
        }
    }

    /// Back to the vertical centre, at rest.
    pub fn reset(&mut self, bounds: Bounds) {
        self.x = bounds.width / 4.0;
        self.y = bounds.height / 2.0;
        self.velocity = 0.0;
    }

    /// Add the flap impulse. Repeated flaps stack; there is no cooldown.
    pub fn flap(&mut self) {
        self.velocity += self.flap_impulse;
    }

    /// One frame of integration, then clamp into the screen.
    ///
    /// Velocity is not capped and is left untouched by the clamp.
    pub fn update(&mut self, screen_height: f64) {
        self.velocity += self.gravity;
        self.y += self.velocity;
        self.y = self.y.clamp(0.0, screen_height.max(0.0));
    }

    /// `[x, y - size/2, size, size]`.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.x, self.y - self.size / 2.0, self.size, self.size)
    }
}
