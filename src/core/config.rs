//! Game configuration: rule presets plus front-end settings.
//!
//! Loaded from `~/.seagull/config.json` with every field optional, then
//! overridden by command-line flags.

use super::constants::*;
use crate::utils::persistence::load_json_or_default;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Player physics tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Physics {
    /// Velocity change per frame (positive = downward).
    pub gravity: f64,
    /// Added to velocity on each flap (negative = upward).
    pub flap_impulse: f64,
    /// Side of the square player box.
    pub player_size: f64,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            flap_impulse: FLAP_IMPULSE,
            player_size: PLAYER_SIZE,
        }
    }
}

/// Gameplay rules. The two builds of the game differ only here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub physics: Physics,
    /// Speed assigned to new obstacles at the start of every run.
    pub base_speed: f64,
    /// Ramp the speed by `speed_increment` every playing frame.
    pub speed_ramp: bool,
    pub speed_increment: f64,
    pub obstacle_interval: u64,
    /// Probability that a spawned obstacle is a ground block instead of a gap pair.
    pub ground_obstacle_chance: f64,
    pub power_ups: bool,
    pub power_up_interval: u64,
    pub power_up_bonus: u32,
}

impl Rules {
    /// Pipes only, speed ramps without bound.
    pub fn classic() -> Self {
        Self {
            physics: Physics::default(),
            base_speed: BASE_SPEED,
            speed_ramp: true,
            speed_increment: SPEED_INCREMENT,
            obstacle_interval: OBSTACLE_SPAWN_INTERVAL,
            ground_obstacle_chance: 0.0,
            power_ups: false,
            power_up_interval: POWER_UP_SPAWN_INTERVAL,
            power_up_bonus: POWER_UP_BONUS,
        }
    }

    /// Fixed speed, mixed obstacles and bonus pickups.
    pub fn arcade() -> Self {
        Self {
            speed_ramp: false,
            ground_obstacle_chance: ARCADE_GROUND_CHANCE,
            power_ups: true,
            ..Self::classic()
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::classic()
    }
}

/// Everything the binary reads from `config.json`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rules: Rules,
    /// Ring the terminal bell for cues.
    pub sound: bool,
    pub frame_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rules: Rules::classic(),
            sound: true,
            frame_interval_ms: FRAME_INTERVAL_MS,
        }
    }
}

impl GameConfig {
    /// Load `~/.seagull/config.json`, falling back to defaults.
    pub fn load() -> Self {
        let config: GameConfig = load_json_or_default(CONFIG_FILE);
        config.sanitized()
    }

    /// Replace values that would stall the frame driver or the spawners,
    /// freeze obstacles in place or make the speed fall during a run.
    pub fn sanitized(mut self) -> Self {
        let rules = &mut self.rules;
        if !(rules.base_speed.is_finite() && rules.base_speed > 0.0) {
            warn!(value = rules.base_speed, "invalid base_speed, using default");
            rules.base_speed = BASE_SPEED;
        }
        if !(rules.speed_increment.is_finite() && rules.speed_increment >= 0.0) {
            warn!(value = rules.speed_increment, "invalid speed_increment, using default");
            rules.speed_increment = SPEED_INCREMENT;
        }
        let physics = &mut rules.physics;
        if !(physics.gravity.is_finite() && physics.gravity >= 0.0) {
            warn!(value = physics.gravity, "invalid gravity, using default");
            physics.gravity = GRAVITY;
        }
        if !(physics.flap_impulse.is_finite() && physics.flap_impulse <= 0.0) {
            warn!(value = physics.flap_impulse, "invalid flap_impulse, using default");
            physics.flap_impulse = FLAP_IMPULSE;
        }
        if !(physics.player_size.is_finite() && physics.player_size > 0.0) {
            warn!(value = physics.player_size, "invalid player_size, using default");
            physics.player_size = PLAYER_SIZE;
        }
        if !rules.ground_obstacle_chance.is_finite() {
            rules.ground_obstacle_chance = 0.0;
        }

        if self.frame_interval_ms == 0 {
            self.frame_interval_ms = FRAME_INTERVAL_MS;
        }
        if self.rules.obstacle_interval == 0 {
            self.rules.obstacle_interval = OBSTACLE_SPAWN_INTERVAL;
        }
        if self.rules.power_up_interval == 0 {
            self.rules.power_up_interval = POWER_UP_SPAWN_INTERVAL;
        }
        self.rules.ground_obstacle_chance = self.rules.ground_obstacle_chance.clamp(0.0, 1.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_rules() {
        let rules = Rules::classic();
        assert!(rules.speed_ramp);
        assert!(!rules.power_ups);
        assert!((rules.base_speed - 3.5).abs() < f64::EPSILON);
        assert!((rules.speed_increment - 0.0015).abs() < f64::EPSILON);
        assert_eq!(rules.obstacle_interval, 100);
        assert_eq!(rules.ground_obstacle_chance, 0.0);
    }

    #[test]
    fn test_arcade_rules() {
        let rules = Rules::arcade();
        assert!(!rules.speed_ramp);
        assert!(rules.power_ups);
        assert_eq!(rules.power_up_interval, 180);
        assert_eq!(rules.power_up_bonus, 5);
        assert!(rules.ground_obstacle_chance > 0.0);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{"sound": false, "rules": {"power_ups": true}}"#).unwrap();
        assert!(!config.sound);
        assert!(config.rules.power_ups);
        assert!(config.rules.speed_ramp);
        assert_eq!(config.frame_interval_ms, FRAME_INTERVAL_MS);
        assert!((config.rules.physics.gravity - GRAVITY).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sanitized_repairs_zero_intervals() {
        let mut config = GameConfig::default();
        config.frame_interval_ms = 0;
        config.rules.obstacle_interval = 0;
        config.rules.power_up_interval = 0;
        config.rules.ground_obstacle_chance = 4.0;
        let config = config.sanitized();
        assert_eq!(config.frame_interval_ms, FRAME_INTERVAL_MS);
        assert_eq!(config.rules.obstacle_interval, OBSTACLE_SPAWN_INTERVAL);
        assert_eq!(config.rules.power_up_interval, POWER_UP_SPAWN_INTERVAL);
        assert_eq!(config.rules.ground_obstacle_chance, 1.0);
    }

    #[test]
    fn test_sanitized_repairs_speeds() {
        for bad in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            let mut config = GameConfig::default();
            config.rules.base_speed = bad;
            assert_eq!(config.sanitized().rules.base_speed, BASE_SPEED);
        }
        for bad in [-0.01, f64::NAN] {
            let mut config = GameConfig::default();
            config.rules.speed_increment = bad;
            assert_eq!(config.sanitized().rules.speed_increment, SPEED_INCREMENT);
        }

        let mut config = GameConfig::default();
        config.rules.base_speed = 5.0;
        config.rules.speed_increment = 0.0;
        let config = config.sanitized();
        assert_eq!(config.rules.base_speed, 5.0);
        assert_eq!(config.rules.speed_increment, 0.0);
    }

    #[test]
    fn test_sanitized_repairs_physics() {
        let mut config = GameConfig::default();
        config.rules.physics.gravity = -1.0;
        config.rules.physics.flap_impulse = 3.0;
        config.rules.physics.player_size = 0.0;
        config.rules.ground_obstacle_chance = f64::NAN;
        let config = config.sanitized();
        assert_eq!(config.rules.physics, Physics::default());
        assert_eq!(config.rules.ground_obstacle_chance, 0.0);
    }

    #[test]
    fn test_sanitized_from_json() {
        let config: GameConfig = serde_json::from_str(
            r#"{"rules": {"base_speed": 0.0, "speed_ramp": false, "speed_increment": -0.01}}"#,
        )
        .unwrap();
        let config = config.sanitized();
        assert_eq!(config.rules.base_speed, BASE_SPEED);
        assert_eq!(config.rules.speed_increment, SPEED_INCREMENT);
        assert!(!config.rules.speed_ramp);
    }
}
