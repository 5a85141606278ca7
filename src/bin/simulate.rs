//! Headless autopilot runs for tuning the difficulty curve.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                     # 100 classic runs
//!   cargo run --bin simulate -- -n 20 --arcade   # 20 arcade runs
//!   cargo run --bin simulate -- --seed 42        # Reproducible runs

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use seagull::audio::{AudioSink, CueRecorder};
use seagull::core::{GameConfig, GameLoop, Rules};
use seagull::sim::{Bounds, Cue, InputEvent, Obstacle, Phase, Session};
use seagull::utils::high_score::{HighScoreStore, MemoryHighScoreStore};
use seagull::utils::logging::init_stderr_logging;
use std::env;
use tracing::debug;

const SCREEN: Bounds = Bounds {
    width: 800.0,
    height: 600.0,
};

struct SimOptions {
    runs: u32,
    seed: u64,
    max_frames: u64,
    arcade: bool,
    quiet: bool,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            runs: 100,
            seed: 1,
            max_frames: 100_000,
            arcade: false,
            quiet: false,
        }
    }
}

#[derive(Debug, Default)]
struct RunStats {
    score: u32,
    frames: u64,
    obstacles_cleared: u32,
    bonuses: u32,
    top_speed: f64,
    crashed: bool,
}

fn main() {
    init_stderr_logging();
    let args: Vec<String> = env::args().collect();
    let options = parse_args(&args);

    let mut config = GameConfig::default();
    if options.arcade {
        config.rules = Rules::arcade();
    }

    println!("Seagull autopilot");
    println!("  Runs:        {}", options.runs);
    println!("  Seed:        {}", options.seed);
    println!("  Max frames:  {}", options.max_frames);
    println!(
        "  Rules:       {}",
        if options.arcade { "arcade" } else { "classic" }
    );
    println!();

    let mut store = MemoryHighScoreStore::default();
    let mut cues = CueRecorder::default();
    let mut results = Vec::with_capacity(options.runs as usize);
    for run in 0..options.runs {
        let rng = ChaCha8Rng::seed_from_u64(options.seed.wrapping_add(run as u64));
        let (stats, returned) = play_once(&config, store, rng, options.max_frames, &mut cues);
        store = returned;
        if !options.quiet {
            println!(
                "run {:>4}: score {:>4}  frames {:>6}  cleared {:>4}  bonuses {:>3}{}",
                run + 1,
                stats.score,
                stats.frames,
                stats.obstacles_cleared,
                stats.bonuses,
                if stats.crashed { "" } else { "  (frame cap)" }
            );
        }
        results.push(stats);
    }

    print_summary(&results, &store, &cues);
}

/// Play one run with the autopilot and hand the store back for the next one.
fn play_once(
    config: &GameConfig,
    store: MemoryHighScoreStore,
    rng: ChaCha8Rng,
    max_frames: u64,
    cues: &mut CueRecorder,
) -> (RunStats, MemoryHighScoreStore) {
    let mut game = GameLoop::new(config, SCREEN, store, rng);
    let mut stats = RunStats::default();

    game.queue_input(InputEvent::Flap);
    for _ in 0..max_frames {
        if game.session.phase == Phase::Playing && should_flap(&game.session) {
            game.queue_input(InputEvent::Flap);
        }
        let result = game.step_frame();
        for &cue in &result.cues {
            cues.play(cue);
        }
        stats.obstacles_cleared += result.obstacles_cleared;
        stats.bonuses += result.bonuses_collected;
        stats.top_speed = stats.top_speed.max(game.session.difficulty_speed);
        if result.game_over {
            stats.crashed = true;
            break;
        }
    }
    stats.score = game.session.score;
    stats.frames = game.session.run_frames;
    debug!(score = stats.score, frames = stats.frames, "autopilot run done");

    let store = game.into_store();
    (stats, store)
}

/// Flap when the gull's centre sinks below where it wants to be and it is
/// not already climbing hard.
fn should_flap(session: &Session) -> bool {
    let player = &session.player;
    let centre = player.y + player.size / 2.0;
    let target = target_height(session);
    centre > target && player.velocity > player.flap_impulse / 2.0
}

/// Preferred centre line: middle of the next gap, or well above the next
/// chimney. Mid-screen when nothing is ahead.
fn target_height(session: &Session) -> f64 {
    let player_left = session.player.x;
    let next = session
        .obstacles
        .iter()
        .filter(|o| o.x() + o.width() >= player_left)
        .min_by(|a, b| a.x().total_cmp(&b.x()));

    match next {
        Some(Obstacle::Gap(gap)) => gap.top + (gap.gap_bottom - gap.top) * 0.6,
        Some(Obstacle::Ground(ground)) => ground.y - session.player.size * 2.5,
        None => session.bounds.height / 2.0,
    }
}

fn print_summary(results: &[RunStats], store: &MemoryHighScoreStore, cues: &CueRecorder) {
    if results.is_empty() {
        println!("No runs.");
        return;
    }
    let n = results.len() as f64;
    let scores: Vec<u32> = results.iter().map(|r| r.score).collect();
    let min = scores.iter().copied().min().unwrap_or(0);
    let max = scores.iter().copied().max().unwrap_or(0);
    let mean = scores.iter().map(|&s| s as f64).sum::<f64>() / n;
    let mean_frames = results.iter().map(|r| r.frames as f64).sum::<f64>() / n;
    let capped = results.iter().filter(|r| !r.crashed).count();
    let top_speed = results.iter().map(|r| r.top_speed).fold(0.0, f64::max);
    let bonuses: u32 = results.iter().map(|r| r.bonuses).sum();

    println!();
    println!("Summary");
    println!("  Score:        min {}  mean {:.1}  max {}", min, mean, max);
    println!(
        "  Survival:     mean {:.0} frames ({:.1}s)",
        mean_frames,
        mean_frames * 16.0 / 1000.0
    );
    println!("  Top speed:    {:.2} px/frame", top_speed);
    println!("  Bonuses:      {}", bonuses);
    println!(
        "  Cues:         {} flaps, {} crashes, {} chimes",
        cues.count(Cue::Flap),
        cues.count(Cue::Collision),
        cues.count(Cue::ScoreBonus)
    );
    println!("  Hit frame cap: {}", capped);
    println!(
        "  High score:   {} ({} writes)",
        store.load().ok().flatten().unwrap_or(0),
        store.writes
    );
}

fn parse_args(args: &[String]) -> SimOptions {
    let mut options = SimOptions::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    options.runs = args[i + 1].parse().unwrap_or(100);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    options.seed = args[i + 1].parse().unwrap_or(1);
                    i += 1;
                }
            }
            "-f" | "--frames" => {
                if i + 1 < args.len() {
                    options.max_frames = args[i + 1].parse().unwrap_or(100_000);
                    i += 1;
                }
            }
            "--arcade" => options.arcade = true,
            "-q" | "--quiet" => options.quiet = true,
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    options
}

fn print_help() {
    println!("Seagull autopilot simulator\n");
    println!("Usage: simulate [OPTIONS]\n");
    println!("Options:");
    println!("  -n, --runs <N>     Number of runs (default: 100)");
    println!("  -s, --seed <N>     Seed for the first run; run k uses seed + k (default: 1)");
    println!("  -f, --frames <N>   Frame cap per run (default: 100000)");
    println!("      --arcade       Fixed speed, chimneys and bonus pickups");
    println!("  -q, --quiet        Only print the summary");
    println!("  -h, --help         Show this help message");
}
