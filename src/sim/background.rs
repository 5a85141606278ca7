//! Parallax cloud layers behind the play field.
//!
//! Clouds drift left at `base_speed * difficulty_speed`, so the sky speeds
//! up with the ramp. They keep drifting on the title and game-over screens.

use super::types::Bounds;
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub struct Cloud {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

#[derive(Debug, Clone)]
pub struct ParallaxLayer {
    /// Fraction of the difficulty speed this layer scrolls at.
    pub base_speed: f64,
    pub clouds: Vec<Cloud>,
}

impl ParallaxLayer {
    /// Scatter `count` clouds over two screen widths around height `y`.
    pub fn new<R: Rng>(
        bounds: Bounds,
        base_speed: f64,
        y: f64,
        size: f64,
        count: usize,
        rng: &mut R,
    ) -> Self {
        let span = (bounds.width * 2.0).max(1.0);
        let clouds = (0..count)
            .map(|_| Cloud {
                x: rng.gen_range(0.0..span),
                y: y + rng.gen_range(-40.0..40.0),
                size: rng.gen_range(size * 0.8..size * 1.2),
            })
            .collect();
        Self { base_speed, clouds }
    }

    pub fn update<R: Rng>(&mut self, difficulty_speed: f64, bounds: Bounds, rng: &mut R) {
        for cloud in &mut self.clouds {
            cloud.x -= self.base_speed * difficulty_speed;
            if cloud.x < -cloud.size {
                cloud.x = bounds.width + rng.gen_range(0.0..cloud.size);
            }
        }
    }
}

/// The two sky layers: a slow far layer and a faster near one.
#[derive(Debug, Clone)]
pub struct Scenery {
    pub layers: Vec<ParallaxLayer>,
}

impl Scenery {
    pub fn new<R: Rng>(bounds: Bounds, rng: &mut R) -> Self {
        let mid = bounds.height / 2.0;
        Self {
            layers: vec![
                ParallaxLayer::new(bounds, 0.2, mid, 5.0, 7, rng),
                ParallaxLayer::new(bounds, 0.5, mid - 50.0, 10.0, 5, rng),
            ],
        }
    }

    pub fn update<R: Rng>(&mut self, difficulty_speed: f64, bounds: Bounds, rng: &mut R) {
        for layer in &mut self.layers {
            layer.update(difficulty_speed, bounds, rng);
        }
    }

    pub fn clouds(&self) -> impl Iterator<Item = &Cloud> {
        self.layers.iter().flat_map(|layer| layer.clouds.iter())
    }
}
