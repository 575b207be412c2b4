//! Tone descriptions for each cue, a small PCM renderer, and the sink boundary
//! the board plays cues through.

use crate::constants::{TONE_FLOOR_GAIN, TONE_PEAK_GAIN};
use crate::cue::Cue;
use smallvec::{smallvec, SmallVec};
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
}

/// One oscillator burst inside a cue.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Note {
    pub frequency_hz: f32,
    pub onset_sec: f32,
    pub duration_sec: f32,
}

impl Note {
    const fn new(frequency_hz: f32, onset_sec: f32, duration_sec: f32) -> Self {
        Self {
            frequency_hz,
            onset_sec,
            duration_sec,
        }
    }

    #[inline]
    pub fn end_sec(&self) -> f32 {
        self.onset_sec + self.duration_sec
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToneSpec {
    pub waveform: Waveform,
    pub peak_gain: f32,
    pub floor_gain: f32,
    pub notes: SmallVec<[Note; 3]>,
}

impl ToneSpec {
    pub fn for_cue(cue: Cue) -> Self {
        let notes: SmallVec<[Note; 3]> = match cue {
            Cue::SingleChime => smallvec![Note::new(440.0, 0.0, 0.8)],
            Cue::DoubleChime => smallvec![Note::new(523.25, 0.0, 0.4), Note::new(659.25, 0.4, 0.4)],
            Cue::TripleBeep => smallvec![
                Note::new(880.0, 0.0, 0.1),
                Note::new(880.0, 0.25, 0.1),
                Note::new(880.0, 0.5, 0.1),
            ],
            Cue::SoftChime => smallvec![Note::new(523.25, 0.0, 0.6)],
            Cue::DoubleBeep => smallvec![Note::new(987.77, 0.0, 0.15), Note::new(987.77, 0.25, 0.15)],
        };
        Self {
            waveform: Waveform::Triangle,
            peak_gain: TONE_PEAK_GAIN,
            floor_gain: TONE_FLOOR_GAIN,
            notes,
        }
    }

    pub fn total_duration(&self) -> f32 {
        self.notes.iter().map(Note::end_sec).fold(0.0, f32::max)
    }

    /// Gain of a note `t` seconds after its onset.
    pub fn envelope(&self, note: &Note, t: f32) -> f32 {
        if t < 0.0 || t >= note.duration_sec {
            return 0.0;
        }
        let ratio = self.floor_gain / self.peak_gain;
        self.peak_gain * ratio.powf(t / note.duration_sec)
    }

    /// Mono PCM for the whole cue. Overlapping notes are summed.
    pub fn render(&self, sample_rate: u32) -> Vec<f32> {
        let sr = sample_rate as f32;
        let total = (self.total_duration() * sr).ceil() as usize;
        let mut out = vec![0.0_f32; total];
        for note in &self.notes {
            let start = (note.onset_sec * sr) as usize;
            let len = (note.duration_sec * sr) as usize;
            for n in 0..len {
                let Some(slot) = out.get_mut(start + n) else {
                    break;
                };
                let t = n as f32 / sr;
                let cycle = (note.frequency_hz * t).fract();
                *slot += wave_sample(self.waveform, cycle) * self.envelope(note, t);
            }
        }
        out
    }
}

// `cycle` is the position within one period, 0..1
fn wave_sample(waveform: Waveform, cycle: f32) -> f32 {
    match waveform {
        Waveform::Sine => (cycle * TAU).sin(),
        // starts at zero and rises, like the sine
        Waveform::Triangle => 1.0 - 4.0 * ((cycle + 0.25).fract() - 0.5).abs(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ToneError {
    #[error("audio output unavailable: {0}")]
    Unavailable(String),
    #[error("tone synthesis failed: {0}")]
    Synthesis(String),
}

/// Fire-and-forget audio backend. `play` issues the cue and returns without
/// waiting for it to finish.
pub trait ToneSink {
    fn play(&self, cue: Cue) -> Result<(), ToneError>;
}

impl<T: ToneSink + ?Sized> ToneSink for Box<T> {
    fn play(&self, cue: Cue) -> Result<(), ToneError> {
        (**self).play(cue)
    }
}

/// Sink used when no audio device exists.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentTones;

impl ToneSink for SilentTones {
    fn play(&self, cue: Cue) -> Result<(), ToneError> {
        Err(ToneError::Unavailable(format!("no output for {cue}")))
    }
}

/// Play a cue, logging and discarding any failure.
pub fn sound_cue<T: ToneSink + ?Sized>(sink: &T, cue: Cue) {
    match sink.play(cue) {
        Ok(()) => log::debug!("[audio] played {}", cue),
        Err(e) => log::warn!("[audio] {} dropped: {}", cue, e),
    }
}
