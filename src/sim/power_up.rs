//! Bonus pickups: scroll like obstacles, collected on contact.

use super::types::{sample_range, BoundingBox, Bounds};
use crate::core::constants::{GAP_EDGE_MARGIN, POWER_UP_SIZE};
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub struct PowerUp {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed: f64,
}

impl PowerUp {
    /// Top edge uniform in `[50, height - 50 - size]`, keeping the whole
    /// pickup 50px clear of the ceiling and the floor.
    pub fn spawn<R: Rng>(bounds: Bounds, speed: f64, rng: &mut R) -> Self {
        let y = sample_range(
            rng,
            GAP_EDGE_MARGIN,
            bounds.height - GAP_EDGE_MARGIN - POWER_UP_SIZE,
        );
        Self {
            x: bounds.width,
            y,
            size: POWER_UP_SIZE,
            speed,
        }
    }

    pub fn advance(&mut self) {
        self.x -= self.speed;
    }

    pub fn rect(&self) -> BoundingBox {
        BoundingBox::new(self.x, self.y, self.size, self.size)
    }

    pub fn collides_with(&self, player: &BoundingBox) -> bool {
        self.rect().overlaps(player)
    }

    pub fn is_offscreen(&self) -> bool {
        self.x < -self.size
    }
}
