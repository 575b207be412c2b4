use std::cell::RefCell;
use timer_core::{Cue, Note, ToneError, ToneSink, ToneSpec, Waveform};
use wasm_bindgen::JsValue;
use web_sys as web;

fn js_err(e: JsValue) -> ToneError {
    ToneError::Synthesis(format!("{:?}", e))
}

/// WebAudio cue player. The context is created on first use and resumed
/// whenever the browser has suspended it.
#[derive(Default)]
pub struct WebTones {
    ctx: RefCell<Option<web::AudioContext>>,
}

impl WebTones {
    fn context(&self) -> Result<web::AudioContext, ToneError> {
        let mut slot = self.ctx.borrow_mut();
        let ctx = match slot.as_ref() {
            Some(ctx) => ctx.clone(),
            None => {
                let ctx = web::AudioContext::new()
                    .map_err(|e| ToneError::Unavailable(format!("{:?}", e)))?;
                log::info!("[audio] context created at {} Hz", ctx.sample_rate());
                *slot = Some(ctx.clone());
                ctx
            }
        };
        if ctx.state() == web::AudioContextState::Suspended {
            _ = ctx.resume();
        }
        Ok(ctx)
    }

    /// Browsers only allow audio after a user gesture; call from a click.
    pub fn unlock(&self) {
        if let Err(e) = self.context() {
            log::warn!("[audio] unlock failed: {}", e);
        }
    }
}

impl ToneSink for WebTones {
    fn play(&self, cue: Cue) -> Result<(), ToneError> {
        let ctx = self.context()?;
        let spec = ToneSpec::for_cue(cue);
        for note in &spec.notes {
            trigger_note(&ctx, &spec, note)?;
        }
        Ok(())
    }
}

// One oscillator -> gain -> destination, decaying exponentially
fn trigger_note(ctx: &web::AudioContext, spec: &ToneSpec, note: &Note) -> Result<(), ToneError> {
    let src = web::OscillatorNode::new(ctx).map_err(js_err)?;
    match spec.waveform {
        Waveform::Sine => src.set_type(web::OscillatorType::Sine),
        Waveform::Triangle => src.set_type(web::OscillatorType::Triangle),
    }
    let t0 = ctx.current_time() + note.onset_sec as f64;
    let t1 = t0 + note.duration_sec as f64;
    src.frequency()
        .set_value_at_time(note.frequency_hz, t0)
        .map_err(js_err)?;

    let g = web::GainNode::new(ctx).map_err(js_err)?;
    g.gain().set_value_at_time(spec.peak_gain, t0).map_err(js_err)?;
    g.gain()
        .exponential_ramp_to_value_at_time(spec.floor_gain, t1)
        .map_err(js_err)?;

    src.connect_with_audio_node(&g).map_err(js_err)?;
    g.connect_with_audio_node(&ctx.destination()).map_err(js_err)?;
    src.start_with_when(t0).map_err(js_err)?;
    src.stop_with_when(t1).map_err(js_err)?;
    Ok(())
}
