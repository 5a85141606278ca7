//! Session state machine: phase transitions, per-frame update, scoring.

use super::obstacle::Obstacle;
use super::player::Player;
use super::power_up::PowerUp;
use super::types::{Bounds, Cue, InputEvent, Phase};
use crate::core::config::Rules;
use rand::Rng;
use std::collections::VecDeque;
use tracing::{debug, info};

/// Everything that happened during one tick, for the host adapters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickResult {
    /// One-shot cues in emission order.
    pub cues: Vec<Cue>,
    /// A run started (from `Start` or `GameOver`).
    pub started: bool,
    /// The run ended this tick.
    pub game_over: bool,
    /// New best score to persist. Set at most once per run.
    pub new_high_score: Option<u32>,
    /// Obstacles that scrolled off this tick.
    pub obstacles_cleared: u32,
    /// Power-ups collected this tick.
    pub bonuses_collected: u32,
}

/// One game session. Owns the player and every scrolling entity.
#[derive(Debug, Clone)]
pub struct Session {
    pub phase: Phase,
    pub score: u32,
    pub high_score: u32,
    /// Speed given to newly spawned entities. Only grows while playing.
    pub difficulty_speed: f64,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub power_ups: Vec<PowerUp>,
    pub bounds: Bounds,
    pub rules: Rules,
    /// Frames spent in the current run.
    pub run_frames: u64,
    pending: VecDeque<InputEvent>,
}

impl Session {
    /// New session on the title screen.
    pub fn new(bounds: Bounds, rules: Rules, high_score: u32) -> Self {
        Self {
            phase: Phase::Start,
            score: 0,
            high_score,
            difficulty_speed: rules.base_speed,
            player: Player::new(bounds, &rules.physics),
            obstacles: Vec::new(),
            power_ups: Vec::new(),
            bounds,
            rules,
            run_frames: 0,
            pending: VecDeque::new(),
        }
    }

    /// Queue an input for the next tick.
    pub fn queue_input(&mut self, input: InputEvent) {
        self.pending.push_back(input);
    }

    pub fn pending_inputs(&self) -> usize {
        self.pending.len()
    }

    /// Apply one input immediately.
    pub fn apply_input(&mut self, input: InputEvent, result: &mut TickResult) {
        match input {
            InputEvent::Flap => match self.phase {
                Phase::Playing => {
                    self.player.flap();
                    result.cues.push(Cue::Flap);
                }
                Phase::Start | Phase::GameOver => self.reset(result),
            },
            InputEvent::Resize { width, height } => {
                if width > 0.0 && height > 0.0 {
                    self.bounds = Bounds::new(width, height);
                }
            }
        }
    }

    /// Entry action for `Playing`.
    pub fn reset(&mut self, result: &mut TickResult) {
        debug!(from = self.phase.name(), "run started");
        self.difficulty_speed = self.rules.base_speed;
        self.obstacles.clear();
        self.power_ups.clear();
        self.score = 0;
        self.run_frames = 0;
        self.player.reset(self.bounds);
        self.phase = Phase::Playing;
        result.started = true;
        result.cues.push(Cue::MusicStart);
    }

    /// Entry action for `GameOver`. Runs once per transition, so the
    /// collision cue and the high-score write happen exactly once per run.
    fn end_game(&mut self, result: &mut TickResult) {
        self.phase = Phase::GameOver;
        self.obstacles.clear();
        self.power_ups.clear();
        if self.score > self.high_score {
            self.high_score = self.score;
            result.new_high_score = Some(self.score);
            info!(score = self.score, "new high score");
        }
        debug!(score = self.score, frames = self.run_frames, "run ended");
        result.game_over = true;
        result.cues.push(Cue::Collision);
        result.cues.push(Cue::MusicStop);
    }

    /// Advance one frame. `frame` is the driver's frame counter, starting at 1.
    pub fn tick<R: Rng>(&mut self, frame: u64, rng: &mut R) -> TickResult {
        let mut result = TickResult::default();

        while let Some(input) = self.pending.pop_front() {
            self.apply_input(input, &mut result);
        }

        if self.phase == Phase::Playing {
            self.step_playing(frame, rng, &mut result);
        }

        result
    }

    fn step_playing<R: Rng>(&mut self, frame: u64, rng: &mut R, result: &mut TickResult) {
        self.run_frames += 1;

        if self.rules.speed_ramp {
            self.difficulty_speed += self.rules.speed_increment;
        }

        self.player.update(self.bounds.height);

        if self.rules.obstacle_interval > 0 && frame % self.rules.obstacle_interval == 0 {
            self.obstacles.push(Obstacle::spawn(
                self.bounds,
                self.difficulty_speed,
                self.rules.ground_obstacle_chance,
                rng,
            ));
        }
        if self.rules.power_ups
            && self.rules.power_up_interval > 0
            && frame % self.rules.power_up_interval == 0
        {
            self.power_ups
                .push(PowerUp::spawn(self.bounds, self.difficulty_speed, rng));
        }

        let player_box = self.player.bounding_box();

        for obstacle in &mut self.obstacles {
            obstacle.advance();
        }
        if self
            .obstacles
            .iter()
            .any(|obstacle| obstacle.collides_with(&player_box))
        {
            self.end_game(result);
            return;
        }

        let before = self.obstacles.len();
        self.obstacles.retain(|obstacle| !obstacle.is_offscreen());
        let cleared = (before - self.obstacles.len()) as u32;
        self.score += cleared;
        result.obstacles_cleared += cleared;

        let bonus = self.rules.power_up_bonus;
        let mut collected = 0;
        self.power_ups.retain_mut(|power_up| {
            power_up.advance();
            if power_up.collides_with(&player_box) {
                collected += 1;
                false
            } else {
                !power_up.is_offscreen()
            }
        });
        for _ in 0..collected {
            self.score += bonus;
            result.cues.push(Cue::ScoreBonus);
        }
        result.bonuses_collected += collected;
    }
}
