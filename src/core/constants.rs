// Frame timing
pub const FRAME_INTERVAL_MS: u64 = 16;
pub const MAX_FRAME_DELTA_MS: u64 = 100;

// Player physics (pixels, per frame)
pub const GRAVITY: f64 = 0.55;
pub const FLAP_IMPULSE: f64 = -14.0;
pub const PLAYER_SIZE: f64 = 30.0;

// Difficulty ramp
pub const BASE_SPEED: f64 = 3.5;
pub const SPEED_INCREMENT: f64 = 0.0015;

// Obstacles
pub const OBSTACLE_WIDTH: f64 = 80.0;
pub const OBSTACLE_SPAWN_INTERVAL: u64 = 100;
pub const GAP_EDGE_MARGIN: f64 = 50.0;
pub const GAP_FRACTION: f64 = 1.0 / 3.0;
pub const GROUND_MIN_FRACTION: f64 = 0.2;
pub const GROUND_MAX_FRACTION: f64 = 0.45;
pub const ARCADE_GROUND_CHANCE: f64 = 0.3;

// Power-ups
pub const POWER_UP_SIZE: f64 = 24.0;
pub const POWER_UP_SPAWN_INTERVAL: u64 = 180;
pub const POWER_UP_BONUS: u32 = 5;

// Terminal cell size in logical pixels
pub const CELL_WIDTH_PX: f64 = 10.0;
pub const CELL_HEIGHT_PX: f64 = 20.0;

// Storage
pub const SAVE_DIR_NAME: &str = ".seagull";
pub const HIGH_SCORE_FILE: &str = "highscore.json";
pub const CONFIG_FILE: &str = "config.json";
pub const LOG_FILE: &str = "seagull.log";
pub const LOG_ENV_VAR: &str = "SEAGULL_LOG";
