//! Integration test: high-score persistence through the frame driver
//!
//! Covers the max rule, the single write per game over and the JSON file
//! format shared with earlier releases.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use seagull::sim::{GroundObstacle, Obstacle};
use seagull::utils::high_score::{HighScoreStore, JsonHighScoreStore, MemoryHighScoreStore};
use seagull::{Bounds, GameConfig, GameLoop, InputEvent, Phase};
use tempfile::TempDir;

const SCREEN: Bounds = Bounds {
    width: 800.0,
    height: 600.0,
};

fn game<S: HighScoreStore>(store: S) -> GameLoop<S, ChaCha8Rng> {
    GameLoop::new(
        &GameConfig::default(),
        SCREEN,
        store,
        ChaCha8Rng::seed_from_u64(11),
    )
}

/// Start a run, set the score and crash into a wall on the next frame.
fn crash_with_score<S: HighScoreStore>(game: &mut GameLoop<S, ChaCha8Rng>, score: u32) {
    game.queue_input(InputEvent::Flap);
    game.step_frame();
    assert_eq!(game.session.phase, Phase::Playing);
    game.session.score = score;
    game.session.obstacles.push(Obstacle::Ground(GroundObstacle {
        x: game.session.player.x,
        y: 0.0,
        width: 80.0,
        height: SCREEN.height,
        speed: 0.0,
    }));
    let result = game.step_frame();
    assert!(result.game_over);
}

#[test]
fn test_new_high_score_written_once() {
    let mut g = game(MemoryHighScoreStore::with_value(7));
    assert_eq!(g.session.high_score, 7);

    crash_with_score(&mut g, 10);
    assert_eq!(g.session.high_score, 10);
    assert_eq!(g.store().writes, 1);
    assert_eq!(g.store().value, Some(10));

    // Sitting on the game-over screen writes nothing more
    for _ in 0..120 {
        g.step_frame();
    }
    assert_eq!(g.store().writes, 1);
}

#[test]
fn test_lower_score_not_written() {
    let mut g = game(MemoryHighScoreStore::with_value(7));
    crash_with_score(&mut g, 3);
    assert_eq!(g.session.high_score, 7);
    assert_eq!(g.store().writes, 0);
    assert_eq!(g.store().value, Some(7));
}

#[test]
fn test_equal_score_not_written() {
    let mut g = game(MemoryHighScoreStore::with_value(7));
    crash_with_score(&mut g, 7);
    assert_eq!(g.session.high_score, 7);
    assert_eq!(g.store().writes, 0);
}

#[test]
fn test_high_score_is_running_max() {
    let mut g = game(MemoryHighScoreStore::default());
    let mut expected = 0;
    for score in [4, 2, 9, 9, 1, 15, 3] {
        crash_with_score(&mut g, score);
        expected = expected.max(score);
        assert_eq!(g.session.high_score, expected);
    }
    // 4, 9, 15
    assert_eq!(g.store().writes, 3);
}

#[test]
fn test_failing_store_does_not_stop_play() {
    let store = MemoryHighScoreStore {
        fail_writes: true,
        ..MemoryHighScoreStore::default()
    };
    let mut g = game(store);
    crash_with_score(&mut g, 5);
    assert_eq!(g.session.high_score, 5);

    g.queue_input(InputEvent::Flap);
    let result = g.step_frame();
    assert!(result.started);
    assert_eq!(g.session.phase, Phase::Playing);
}

#[test]
fn test_json_store_round_trip_through_game() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("highscore.json");

    let mut g = game(JsonHighScoreStore::at(path.clone()));
    assert_eq!(g.session.high_score, 0);
    crash_with_score(&mut g, 21);

    let raw = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["seagullHighScore"], 21);
    assert!(value["recorded_at"].is_string());

    let reopened = game(JsonHighScoreStore::at(path));
    assert_eq!(reopened.session.high_score, 21);
}

#[test]
fn test_missing_or_corrupt_file_means_no_high_score() {
    let dir = TempDir::new().unwrap();

    let missing = JsonHighScoreStore::at(dir.path().join("absent.json"));
    assert_eq!(missing.load().unwrap(), None);

    let corrupt_path = dir.path().join("corrupt.json");
    std::fs::write(&corrupt_path, "{ not json").unwrap();
    let g = game(JsonHighScoreStore::at(corrupt_path));
    assert_eq!(g.session.high_score, 0);
}

#[test]
fn test_legacy_file_without_timestamp_loads() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("highscore.json");
    std::fs::write(&path, r#"{"seagullHighScore": 42}"#).unwrap();

    let store = JsonHighScoreStore::at(path);
    assert_eq!(store.load().unwrap(), Some(42));
}

#[test]
fn test_clear_forgets_score() {
    let dir = TempDir::new().unwrap();
    let mut store = JsonHighScoreStore::at(dir.path().join("highscore.json"));
    store.save(8).unwrap();
    assert_eq!(store.load().unwrap(), Some(8));

    store.clear().unwrap();
    assert_eq!(store.load().unwrap(), None);
    // Clearing twice is fine
    store.clear().unwrap();
}

#[test]
fn test_unwritable_location_is_not_fatal() {
    let dir = TempDir::new().unwrap();
    // A regular file where the save directory should be
    let blocker = dir.path().join("not_a_dir");
    std::fs::write(&blocker, "").unwrap();
    let path = blocker.join("highscore.json");

    let mut g = game(JsonHighScoreStore::at(path.clone()));
    assert_eq!(g.session.high_score, 0);
    crash_with_score(&mut g, 6);
    assert_eq!(g.session.high_score, 6);
    assert!(!path.exists());

    g.queue_input(InputEvent::Flap);
    assert!(g.step_frame().started);
}

#[test]
fn test_no_storage_plays_without_high_score() {
    let mut g = game(None::<JsonHighScoreStore>);
    assert_eq!(g.session.high_score, 0);
    crash_with_score(&mut g, 4);
    assert_eq!(g.session.high_score, 4);
    crash_with_score(&mut g, 2);
    assert_eq!(g.session.high_score, 4);
}
