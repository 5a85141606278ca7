//! Audio adapter: turns one-shot cues into sound.
//!
//! The terminal has no mixer, so the bell stands in for the squawk and the
//! bonus chime. A sink that cannot play simply drops the cue.

use crate::sim::Cue;
use std::io::Write;
use tracing::debug;

pub trait AudioSink {
    fn play(&mut self, cue: Cue);
}

/// Plays nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl AudioSink for Silent {
    fn play(&mut self, _cue: Cue) {}
}

/// Rings the terminal bell for collisions and bonuses.
///
/// Flaps and music cues are skipped: a bell per flap is unbearable.
pub struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play(&mut self, cue: Cue) {
        if !matches!(cue, Cue::Collision | Cue::ScoreBonus) {
            return;
        }
        if let Err(e) = self.out.write_all(b"\x07").and_then(|_| self.out.flush()) {
            debug!(error = %e, ?cue, "bell unavailable, cue skipped");
        }
    }
}

/// Records every cue. Lets tests and the simulator count effects.
#[derive(Debug, Default, Clone)]
pub struct CueRecorder {
    pub cues: Vec<Cue>,
}

impl CueRecorder {
    pub fn count(&self, cue: Cue) -> usize {
        self.cues.iter().filter(|c| **c == cue).count()
    }
}

impl AudioSink for CueRecorder {
    fn play(&mut self, cue: Cue) {
        self.cues.push(cue);
    }
}
