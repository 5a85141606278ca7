//! Scrolling obstacles and their collision rules.

use super::types::{sample_range, BoundingBox, Bounds};
use crate::core::constants::{
    GAP_EDGE_MARGIN, GAP_FRACTION, GROUND_MAX_FRACTION, GROUND_MIN_FRACTION, OBSTACLE_WIDTH,
};
use rand::Rng;

/// A top/bottom pair with a passable gap between them.
#[derive(Debug, Clone, PartialEq)]
pub struct GapObstacle {
    pub x: f64,
    pub width: f64,
    /// Lower edge of the top region.
    pub top: f64,
    /// Upper edge of the bottom region.
    pub gap_bottom: f64,
    /// Screen height when spawned; the bottom region extends down to here.
    pub floor: f64,
    /// Pixels per frame, frozen at spawn.
    pub speed: f64,
}

impl GapObstacle {
    /// Random gap position: the gap is a third of the screen and its top
    /// edge stays at least 50px from the ceiling and the floor.
    pub fn spawn<R: Rng>(bounds: Bounds, speed: f64, rng: &mut R) -> Self {
        let gap = bounds.height * GAP_FRACTION;
        let top = sample_range(
            rng,
            GAP_EDGE_MARGIN,
            bounds.height - GAP_EDGE_MARGIN - gap,
        );
        Self {
            x: bounds.width,
            width: OBSTACLE_WIDTH,
            top,
            gap_bottom: top + gap,
            floor: bounds.height,
            speed,
        }
    }

    pub fn collides_with(&self, player: &BoundingBox) -> bool {
        let horizontal = player.right() > self.x && player.left() < self.x + self.width;
        horizontal && (player.top() < self.top || player.bottom() > self.gap_bottom)
    }

    pub fn regions(&self) -> [BoundingBox; 2] {
        [
            BoundingBox::new(self.x, 0.0, self.width, self.top),
            BoundingBox::new(
                self.x,
                self.gap_bottom,
                self.width,
                (self.floor - self.gap_bottom).max(0.0),
            ),
        ]
    }
}

/// A single block standing on the floor.
#[derive(Debug, Clone, PartialEq)]
pub struct GroundObstacle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub speed: f64,
}

impl GroundObstacle {
    pub fn spawn<R: Rng>(bounds: Bounds, speed: f64, rng: &mut R) -> Self {
        let height = sample_range(
            rng,
            bounds.height * GROUND_MIN_FRACTION,
            bounds.height * GROUND_MAX_FRACTION,
        );
        Self {
            x: bounds.width,
            y: bounds.height - height,
            width: OBSTACLE_WIDTH,
            height,
            speed,
        }
    }

    pub fn rect(&self) -> BoundingBox {
        BoundingBox::new(self.x, self.y, self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Obstacle {
    Gap(GapObstacle),
    Ground(GroundObstacle),
}

impl Obstacle {
    /// Spawn at the right edge. `ground_chance` picks a ground block over a gap pair.
    pub fn spawn<R: Rng>(bounds: Bounds, speed: f64, ground_chance: f64, rng: &mut R) -> Self {
        if ground_chance > 0.0 && rng.gen_bool(ground_chance.min(1.0)) {
            Obstacle::Ground(GroundObstacle::spawn(bounds, speed, rng))
        } else {
            Obstacle::Gap(GapObstacle::spawn(bounds, speed, rng))
        }
    }

    pub fn x(&self) -> f64 {
        match self {
            Obstacle::Gap(o) => o.x,
            Obstacle::Ground(o) => o.x,
        }
    }

    pub fn width(&self) -> f64 {
        match self {
            Obstacle::Gap(o) => o.width,
            Obstacle::Ground(o) => o.width,
        }
    }

    pub fn speed(&self) -> f64 {
        match self {
            Obstacle::Gap(o) => o.speed,
            Obstacle::Ground(o) => o.speed,
        }
    }

    /// Move left by the speed captured at spawn.
    pub fn advance(&mut self) {
        match self {
            Obstacle::Gap(o) => o.x -= o.speed,
            Obstacle::Ground(o) => o.x -= o.speed,
        }
    }

    pub fn collides_with(&self, player: &BoundingBox) -> bool {
        match self {
            Obstacle::Gap(o) => o.collides_with(player),
            Obstacle::Ground(o) => o.rect().overlaps(player),
        }
    }

    /// Trailing edge has fully left the screen.
    pub fn is_offscreen(&self) -> bool {
        self.x() < -self.width()
    }

    /// Blocking rectangles, for drawing.
    pub fn regions(&self) -> Vec<BoundingBox> {
        match self {
            Obstacle::Gap(o) => o.regions().to_vec(),
            Obstacle::Ground(o) => vec![o.rect()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn gap(x: f64, top: f64, gap_bottom: f64) -> GapObstacle {
        GapObstacle {
            x,
            width: 80.0,
            top,
            gap_bottom,
            floor: 600.0,
            speed: 3.5,
        }
    }

    #[test]
    fn test_gap_spawn_within_margins() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let bounds = Bounds::new(800.0, 600.0);
        for _ in 0..200 {
            let o = GapObstacle::spawn(bounds, 3.5, &mut rng);
            assert_eq!(o.x, 800.0);
            assert!(o.top >= 50.0);
            assert!(o.top <= 600.0 - 50.0 - 200.0);
            assert!((o.gap_bottom - o.top - 200.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_gap_spawn_tiny_screen() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let o = GapObstacle::spawn(Bounds::new(100.0, 60.0), 3.5, &mut rng);
        assert_eq!(o.top, 50.0);
    }

    #[test]
    fn test_player_inside_gap_no_hit() {
        let o = gap(100.0, 200.0, 400.0);
        let player = BoundingBox::new(110.0, 250.0, 30.0, 30.0);
        assert!(!o.collides_with(&player));
    }

    #[test]
    fn test_player_into_top_region_hits() {
        let o = gap(100.0, 200.0, 400.0);
        let player = BoundingBox::new(110.0, 190.0, 30.0, 30.0);
        assert!(o.collides_with(&player));
    }

    #[test]
    fn test_player_into_bottom_region_hits() {
        let o = gap(100.0, 200.0, 400.0);
        let player = BoundingBox::new(110.0, 380.0, 30.0, 30.0);
        assert!(o.collides_with(&player));
    }

    #[test]
    fn test_gap_edges_touching_do_not_hit() {
        let o = gap(100.0, 200.0, 400.0);
        // Top edge exactly on the top region's lower bound
        assert!(!o.collides_with(&BoundingBox::new(110.0, 200.0, 30.0, 30.0)));
        // Bottom edge exactly on the bottom region's upper bound
        assert!(!o.collides_with(&BoundingBox::new(110.0, 370.0, 30.0, 30.0)));
        // Right edge exactly on the obstacle's left edge, outside the gap
        assert!(!o.collides_with(&BoundingBox::new(70.0, 0.0, 30.0, 30.0)));
        // Left edge exactly on the obstacle's right edge
        assert!(!o.collides_with(&BoundingBox::new(180.0, 0.0, 30.0, 30.0)));
    }

    #[test]
    fn test_no_hit_without_horizontal_overlap() {
        let o = gap(300.0, 200.0, 400.0);
        let player = BoundingBox::new(110.0, 0.0, 30.0, 30.0);
        assert!(!o.collides_with(&player));
    }

    #[test]
    fn test_ground_collision() {
        let o = Obstacle::Ground(GroundObstacle {
            x: 100.0,
            y: 450.0,
            width: 80.0,
            height: 150.0,
            speed: 3.5,
        });
        assert!(o.collides_with(&BoundingBox::new(110.0, 440.0, 30.0, 30.0)));
        assert!(!o.collides_with(&BoundingBox::new(110.0, 420.0, 30.0, 30.0)));
        assert!(!o.collides_with(&BoundingBox::new(110.0, 100.0, 30.0, 30.0)));
    }

    #[test]
    fn test_ground_spawn_sits_on_floor() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let o = GroundObstacle::spawn(Bounds::new(800.0, 600.0), 4.0, &mut rng);
        assert!((o.y + o.height - 600.0).abs() < 1e-9);
        assert!(o.height >= 120.0 && o.height <= 270.0);
        assert_eq!(o.speed, 4.0);
    }

    #[test]
    fn test_advance_and_offscreen() {
        let mut o = Obstacle::Gap(gap(0.0, 200.0, 400.0));
        assert!(!o.is_offscreen());
        for _ in 0..22 {
            o.advance();
        }
        // -77.0, still within one width of the edge
        assert!(!o.is_offscreen());
        o.advance();
        assert!(o.is_offscreen());
    }

    #[test]
    fn test_spawn_mix() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let bounds = Bounds::new(800.0, 600.0);
        for _ in 0..20 {
            assert!(matches!(
                Obstacle::spawn(bounds, 3.5, 0.0, &mut rng),
                Obstacle::Gap(_)
            ));
            assert!(matches!(
                Obstacle::spawn(bounds, 3.5, 1.0, &mut rng),
                Obstacle::Ground(_)
            ));
        }
    }

    #[test]
    fn test_regions() {
        let o = Obstacle::Gap(gap(10.0, 200.0, 400.0));
        let regions = o.regions();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].h, 200.0);
        assert_eq!(regions[1].y, 400.0);
        assert_eq!(regions[1].h, 200.0);
    }
}
