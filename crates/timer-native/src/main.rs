//! Terminal runner: one board, a one-second loop, cues through cpal.

use clap::Parser;
use std::thread;
use std::time::{Duration, Instant};
use timer_core::{Board, ManualScheduler, SilentTones, ToneSink, TICK_INTERVAL};

mod audio;
mod config;

use config::Config;

fn open_tones() -> Box<dyn ToneSink> {
    match audio::CpalTones::open() {
        Ok(tones) => Box::new(tones),
        Err(e) => {
            log::warn!("[audio] {}; cues will be silent", e);
            Box::new(SilentTones)
        }
    }
}

fn status_line(board: &Board<ManualScheduler, Box<dyn ToneSink>>) -> String {
    board
        .views()
        .iter()
        .map(|v| format!("{} {}", v.label, v.display()))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    env_logger::builder()
        .filter_level(config.log_level())
        .init();

    let scheduler = ManualScheduler::new();
    let mut board = Board::new(scheduler.clone(), open_tones());
    board.set_schedule(config.schedule());

    if config.timers.is_empty() {
        let id = board.add_team();
        board.set_muted(id, config.muted);
        board.quick_start(id);
    }
    for &seconds in &config.timers {
        let id = board.add_team();
        board.set_muted(id, config.muted);
        if seconds == 0 {
            log::warn!("[board] team {} has no time set, leaving it idle", id);
        }
        board.set_duration(id, seconds);
    }
    log::info!(
        "[board] {} team(s), schedule {:?}",
        board.len(),
        board.schedule()
    );

    let mut next = Instant::now();
    while !scheduler.active().is_empty() {
        next += TICK_INTERVAL;
        thread::sleep(next.saturating_duration_since(Instant::now()));
        for id in scheduler.active() {
            board.tick(id);
        }
        log::info!("{}", status_line(&board));
    }

    // let the last cue ring out before the stream is dropped
    thread::sleep(Duration::from_secs(1));
    log::info!("[board] all countdowns finished");
    Ok(())
}
