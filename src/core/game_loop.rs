//! Frame driver shared by the terminal game and the headless simulator.
//!
//! Owns the session plus everything it must not know about: wall-clock
//! time, the random source, scenery and the high-score store.

use super::clock::FrameClock;
use super::config::GameConfig;
use crate::sim::{Bounds, Cue, InputEvent, Scenery, Session, TickResult};
use crate::utils::high_score::HighScoreStore;
use rand::Rng;
use tracing::{debug, warn};

pub struct GameLoop<S: HighScoreStore, R: Rng> {
    pub session: Session,
    pub scenery: Scenery,
    pub clock: FrameClock,
    store: S,
    rng: R,
}

impl<S: HighScoreStore, R: Rng> GameLoop<S, R> {
    /// Read the stored high score once; an unreadable store counts as zero.
    pub fn new(config: &GameConfig, bounds: Bounds, store: S, mut rng: R) -> Self {
        let high_score = match store.load() {
            Ok(Some(score)) => score,
            Ok(None) => 0,
            Err(e) => {
                warn!(error = %e, "could not read high score, starting from 0");
                0
            }
        };
        debug!(high_score, "session created");

        let scenery = Scenery::new(bounds, &mut rng);
        Self {
            session: Session::new(bounds, config.rules, high_score),
            scenery,
            clock: FrameClock::new(config.frame_interval_ms),
            store,
            rng,
        }
    }

    pub fn queue_input(&mut self, input: InputEvent) {
        self.session.queue_input(input);
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Run every frame that `dt_ms` pays for and return their cues in order.
    pub fn advance(&mut self, dt_ms: u64) -> Vec<Cue> {
        let mut cues = Vec::new();
        for _ in 0..self.clock.accumulate(dt_ms) {
            cues.extend(self.step_frame().cues);
        }
        cues
    }

    /// Run exactly one frame.
    pub fn step_frame(&mut self) -> TickResult {
        let frame = self.clock.next_frame();
        let result = self.session.tick(frame, &mut self.rng);
        self.scenery.update(
            self.session.difficulty_speed,
            self.session.bounds,
            &mut self.rng,
        );
        if let Some(score) = result.new_high_score {
            if let Err(e) = self.store.save(score) {
                warn!(error = %e, score, "could not save high score");
            }
        }
        result
    }
}
