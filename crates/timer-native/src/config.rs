//! Command-line configuration for the native runner

use clap::Parser;
use timer_core::CueSchedule;

#[derive(Parser, Debug)]
#[command(name = "timer-native")]
#[command(about = "Run boss-fight countdowns in the terminal with audible cues")]
#[command(version)]
pub struct Config {
    /// Countdown length in seconds for one team (repeat for more teams)
    #[arg(short, long = "timer", value_name = "SECONDS")]
    pub timers: Vec<u32>,

    /// Start every team muted
    #[arg(short, long)]
    pub muted: bool,

    /// Use the reduced 20 s / 10 s cue schedule
    #[arg(long)]
    pub minimal: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    pub fn schedule(&self) -> CueSchedule {
        if self.minimal {
            CueSchedule::Minimal
        } else {
            CueSchedule::Standard
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}
