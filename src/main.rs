use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use seagull::audio::{AudioSink, Silent, TerminalBell};
use seagull::core::{GameConfig, GameLoop, Rules};
use seagull::input::{bounds_for_terminal, map_event, InputAction};
use seagull::ui;
use seagull::utils::build_info::version_string;
use seagull::utils::high_score::{HighScoreStore, JsonHighScoreStore};
use seagull::utils::logging::init_file_logging;
use seagull::utils::persistence::seagull_dir;
use std::io;
use std::time::{Duration, Instant};
use tracing::{info, warn};

struct CliOptions {
    arcade: bool,
    mute: bool,
    reset_high_score: bool,
}

fn parse_args() -> CliOptions {
    let mut options = CliOptions {
        arcade: false,
        mute: false,
        reset_high_score: false,
    };

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--arcade" => options.arcade = true,
            "--mute" => options.mute = true,
            "--reset-high-score" => options.reset_high_score = true,
            "--version" | "-v" => {
                println!("{}", version_string());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Stuey's Seagull Son - terminal arcade game\n");
                println!("Usage: seagull [options]\n");
                println!("Options:");
                println!("  --arcade            Fixed speed, chimneys and bonus pickups");
                println!("  --mute              No terminal bell");
                println!("  --reset-high-score  Forget the stored high score");
                println!("  --version           Show version information");
                println!("  --help              Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'seagull --help' for usage.");
                std::process::exit(1);
            }
        }
    }
    options
}

fn main() -> io::Result<()> {
    let options = parse_args();

    if let Ok(dir) = seagull_dir() {
        // Logging is optional; the game runs without it
        let _ = init_file_logging(&dir);
    }

    let mut config = GameConfig::load();
    if options.arcade {
        config.rules = Rules::arcade();
    }
    if options.mute {
        config.sound = false;
    }

    let store = JsonHighScoreStore::open();
    if options.reset_high_score {
        match &store {
            Some(store) => match store.clear() {
                Ok(()) => println!("High score cleared."),
                Err(e) => {
                    warn!(error = %e, "could not clear high score");
                    eprintln!("Could not clear high score: {}", e);
                }
            },
            None => eprintln!("No high score storage available."),
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &config, store);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run<S: HighScoreStore>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &GameConfig,
    store: S,
) -> io::Result<()> {
    let size = terminal.size()?;
    let bounds = bounds_for_terminal(size.width, size.height);

    let mut game = GameLoop::new(config, bounds, store, rand::thread_rng());
    let mut audio: Box<dyn AudioSink> = if config.sound {
        Box::new(TerminalBell::new(io::stdout()))
    } else {
        Box::new(Silent)
    };
    info!(
        width = bounds.width,
        height = bounds.height,
        ramp = config.rules.speed_ramp,
        "game started"
    );

    let frame_interval = Duration::from_millis(config.frame_interval_ms);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &game.session, &game.scenery))?;

        // Drain everything that arrived, waiting at most until the next frame
        let timeout = frame_interval.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            loop {
                match map_event(event::read()?) {
                    InputAction::Game(input) => game.queue_input(input),
                    InputAction::Quit => {
                        info!(high_score = game.session.high_score, "quit");
                        return Ok(());
                    }
                    InputAction::Ignore => {}
                }
                if !event::poll(Duration::from_millis(0))? {
                    break;
                }
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= frame_interval {
            last_tick = Instant::now();
            for cue in game.advance(elapsed.as_millis() as u64) {
                audio.play(cue);
            }
        }
    }
}
