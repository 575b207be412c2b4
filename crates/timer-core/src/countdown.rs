use crate::constants::{QUICK_START_SECS, URGENT_SECS, WARNING_SECS};
use crate::cue::{Cue, CueSchedule};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Paused,
}

/// Highlight band for a card, derived from remaining time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Urgency {
    Calm,
    Warning,
    Urgent,
}

/// One team's countdown.
///
/// `running` is only ever true while `remaining_seconds > 0`; every mutator
/// that can leave the value at zero also stops the countdown.
#[derive(Clone, Debug, Default)]
pub struct Countdown {
    remaining_seconds: u32,
    running: bool,
    muted: bool,
    schedule: CueSchedule,
}

impl Countdown {
    pub fn new(schedule: CueSchedule) -> Self {
        Self {
            schedule,
            ..Self::default()
        }
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn schedule(&self) -> CueSchedule {
        self.schedule
    }

    pub fn set_schedule(&mut self, schedule: CueSchedule) {
        self.schedule = schedule;
    }

    pub fn quick_start(&mut self) {
        self.remaining_seconds = QUICK_START_SECS;
        self.running = true;
    }

    /// Load a typed duration and start counting. Zero is ignored.
    pub fn set_duration(&mut self, seconds: u32) {
        if seconds > 0 {
            self.remaining_seconds = seconds;
            self.running = true;
        }
    }

    pub fn toggle(&mut self) {
        self.running = !self.running && self.remaining_seconds > 0;
    }

    /// Works while running or idle. Negative deltas saturate at zero.
    pub fn add_time(&mut self, delta_seconds: i64) {
        let next = (self.remaining_seconds as i64).saturating_add(delta_seconds);
        self.remaining_seconds = next.clamp(0, u32::MAX as i64) as u32;
        if self.remaining_seconds == 0 {
            self.running = false;
        }
    }

    pub fn reset(&mut self) {
        self.running = false;
        self.remaining_seconds = 0;
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Advance one second. Returns the cue scheduled for the value just
    /// reached, unless muted.
    pub fn tick(&mut self) -> Option<Cue> {
        if !self.running {
            return None;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        let cue = if self.muted {
            None
        } else {
            self.schedule.cue_at(self.remaining_seconds)
        };
        if self.remaining_seconds == 0 {
            self.running = false;
        }
        cue
    }

    pub fn phase(&self) -> Phase {
        match (self.running, self.remaining_seconds) {
            (true, _) => Phase::Running,
            (false, 0) => Phase::Idle,
            (false, _) => Phase::Paused,
        }
    }

    pub fn urgency(&self) -> Urgency {
        match self.remaining_seconds {
            0 => Urgency::Calm,
            s if s <= URGENT_SECS => Urgency::Urgent,
            s if s <= WARNING_SECS => Urgency::Warning,
            _ => Urgency::Calm,
        }
    }

    pub fn display(&self) -> String {
        format_hms(self.remaining_seconds)
    }
}

/// `HH:MM:SS`, zero padded. Hours grow past two digits rather than wrapping.
pub fn format_hms(total_seconds: u32) -> String {
    let h = total_seconds / 3600;
    let m = (total_seconds % 3600) / 60;
    let s = total_seconds % 60;
    format!("{h:02}:{m:02}:{s:02}")
}

/// Parse one of the hour/minute/second fields from its leading digits, so
/// `"1.5"` and `"1e2"` read as 1. No leading digits (including a minus
/// sign) counts as zero; values too large for `u32` saturate.
pub fn parse_time_field(text: &str) -> u32 {
    let text = text.trim_start();
    let text = text.strip_prefix('+').unwrap_or(text);
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    match &text[..end] {
        "" => 0,
        digits => digits.parse().unwrap_or(u32::MAX),
    }
}

pub fn hms_to_seconds(hours: u32, minutes: u32, seconds: u32) -> u32 {
    hours
        .saturating_mul(3600)
        .saturating_add(minutes.saturating_mul(60))
        .saturating_add(seconds)
}
