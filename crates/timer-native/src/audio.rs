// ---------------- Native audio (cpal) ----------------

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SizedSample};
use std::sync::{Arc, Mutex};
use timer_core::{Cue, ToneError, ToneSink, ToneSpec};

struct Voice {
    samples: Vec<f32>,
    cursor: usize,
}

#[derive(Default)]
struct Mixer {
    voices: Vec<Voice>,
}

impl Mixer {
    fn next_sample(&mut self) -> f32 {
        let mut acc = 0.0_f32;
        let mut i = 0usize;
        while i < self.voices.len() {
            let voice = &mut self.voices[i];
            acc += voice.samples[voice.cursor];
            voice.cursor += 1;
            if voice.cursor >= voice.samples.len() {
                self.voices.swap_remove(i);
                continue;
            }
            i += 1;
        }
        acc.tanh()
    }
}

/// Plays cues on the default output device. Each cue is rendered to PCM up
/// front and mixed into the stream until it runs out.
pub struct CpalTones {
    mixer: Arc<Mutex<Mixer>>,
    sample_rate: u32,
    _stream: cpal::Stream,
}

impl CpalTones {
    pub fn open() -> Result<Self, ToneError> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| ToneError::Unavailable("no default output device".into()))?;
        let config = device
            .default_output_config()
            .map_err(|e| ToneError::Unavailable(e.to_string()))?;
        let sample_rate = config.sample_rate().0;
        let channels = config.channels() as usize;
        let mixer = Arc::new(Mutex::new(Mixer::default()));

        let stream = match config.sample_format() {
            cpal::SampleFormat::F32 => {
                build_stream::<f32>(&device, &config.into(), channels, Arc::clone(&mixer))
            }
            cpal::SampleFormat::I16 => {
                build_stream::<i16>(&device, &config.into(), channels, Arc::clone(&mixer))
            }
            cpal::SampleFormat::U16 => {
                build_stream::<u16>(&device, &config.into(), channels, Arc::clone(&mixer))
            }
            other => {
                return Err(ToneError::Unavailable(format!(
                    "unsupported sample format {other:?}"
                )))
            }
        }
        .map_err(|e| ToneError::Unavailable(e.to_string()))?;
        stream
            .play()
            .map_err(|e| ToneError::Unavailable(e.to_string()))?;

        log::info!("[audio] output at {} Hz, {} channels", sample_rate, channels);
        Ok(Self {
            mixer,
            sample_rate,
            _stream: stream,
        })
    }
}

impl ToneSink for CpalTones {
    fn play(&self, cue: Cue) -> Result<(), ToneError> {
        let samples = ToneSpec::for_cue(cue).render(self.sample_rate);
        if samples.is_empty() {
            return Ok(());
        }
        let mut mixer = self
            .mixer
            .lock()
            .map_err(|_| ToneError::Synthesis("mixer lock poisoned".into()))?;
        mixer.voices.push(Voice { samples, cursor: 0 });
        Ok(())
    }
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    channels: usize,
    mixer: Arc<Mutex<Mixer>>,
) -> Result<cpal::Stream, cpal::BuildStreamError>
where
    T: SizedSample + FromSample<f32>,
{
    device.build_output_stream(
        config,
        move |data: &mut [T], _| {
            let Ok(mut guard) = mixer.lock() else {
                return;
            };
            // same mono sample on every channel of a frame
            for frame in data.chunks_mut(channels.max(1)) {
                let value = T::from_sample(guard.next_sample());
                for slot in frame.iter_mut() {
                    *slot = value;
                }
            }
        },
        |err| log::error!("[audio] stream error: {err}"),
        None,
    )
}
