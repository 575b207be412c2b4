//! Cue kinds and the remaining-time schedules that trigger them.
//!
//! A schedule matches the value a tick lands on exactly. Jumping over a
//! threshold (for example with a negative `add_time`) skips its cue.

use std::fmt;

/// Closed set of alert sounds the tone sinks know how to play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    /// One medium tone, one minute left.
    SingleChime,
    /// Two ascending tones, thirty seconds left.
    DoubleChime,
    /// Three short high beeps, ten seconds left.
    TripleBeep,
    /// Single tone of the reduced schedule (twenty seconds).
    SoftChime,
    /// Double high beep of the reduced schedule (ten seconds).
    DoubleBeep,
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cue::SingleChime => "single-chime",
            Cue::DoubleChime => "double-chime",
            Cue::TripleBeep => "triple-beep",
            Cue::SoftChime => "soft-chime",
            Cue::DoubleBeep => "double-beep",
        };
        f.write_str(name)
    }
}

const STANDARD: &[(u32, Cue)] = &[
    (60, Cue::SingleChime),
    (30, Cue::DoubleChime),
    (10, Cue::TripleBeep),
];

const MINIMAL: &[(u32, Cue)] = &[(20, Cue::SoftChime), (10, Cue::DoubleBeep)];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CueSchedule {
    /// 60 s, 30 s and 10 s cues.
    #[default]
    Standard,
    /// 20 s and 10 s cues.
    Minimal,
}

impl CueSchedule {
    /// `(remaining_seconds, cue)` pairs, highest threshold first.
    pub fn entries(self) -> &'static [(u32, Cue)] {
        match self {
            CueSchedule::Standard => STANDARD,
            CueSchedule::Minimal => MINIMAL,
        }
    }

    pub fn cue_at(self, remaining_seconds: u32) -> Option<Cue> {
        self.entries()
            .iter()
            .find(|(at, _)| *at == remaining_seconds)
            .map(|(_, cue)| *cue)
    }

    pub fn thresholds(self) -> impl Iterator<Item = u32> {
        self.entries().iter().map(|(at, _)| *at)
    }
}
