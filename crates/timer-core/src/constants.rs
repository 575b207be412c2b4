use std::time::Duration;

// Shared timing and tone tuning constants used by both web and native frontends.

// Countdown affordances
pub const QUICK_START_SECS: u32 = 300; // "start" button loads five minutes
pub const ADD_TIME_SECS: i64 = 300; // "+5m" button
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

// Highlight bands (remaining seconds, inclusive)
pub const WARNING_SECS: u32 = 20;
pub const URGENT_SECS: u32 = 10;

// Board layout
pub const DEFAULT_TEAM_COUNT: usize = 4;
pub const TEAM_LABEL_PREFIX: &str = "Team";

// Tone envelope: triangle voice decaying exponentially from peak to floor
pub const TONE_PEAK_GAIN: f32 = 0.4;
pub const TONE_FLOOR_GAIN: f32 = 0.0001;
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

#[inline]
pub fn default_team_label(id: u32) -> String {
    format!("{TEAM_LABEL_PREFIX} {id}")
}
