// Host-side tests for cue tone descriptions and PCM rendering.

use timer_core::*;

const ALL_CUES: [Cue; 5] = [
    Cue::SingleChime,
    Cue::DoubleChime,
    Cue::TripleBeep,
    Cue::SoftChime,
    Cue::DoubleBeep,
];

#[test]
fn tone_specs_match_cue_shapes() {
    let single = ToneSpec::for_cue(Cue::SingleChime);
    assert_eq!(single.notes.len(), 1);
    assert!((single.notes[0].frequency_hz - 440.0).abs() < 1e-3);
    assert!((single.total_duration() - 0.8).abs() < 1e-6);

    let double = ToneSpec::for_cue(Cue::DoubleChime);
    assert_eq!(double.notes.len(), 2);
    assert!(double.notes[1].frequency_hz > double.notes[0].frequency_hz);
    assert!((double.notes[1].onset_sec - double.notes[0].end_sec()).abs() < 1e-6);

    let triple = ToneSpec::for_cue(Cue::TripleBeep);
    assert_eq!(triple.notes.len(), 3);
    for pair in triple.notes.windows(2) {
        let gap = pair[1].onset_sec - pair[0].end_sec();
        assert!((gap - 0.15).abs() < 1e-6);
    }
}

#[test]
fn every_cue_uses_the_decaying_triangle() {
    for cue in ALL_CUES {
        let spec = ToneSpec::for_cue(cue);
        assert_eq!(spec.waveform, Waveform::Triangle);
        assert!((spec.peak_gain - TONE_PEAK_GAIN).abs() < 1e-6);
        assert!(spec.notes.iter().all(|n| n.frequency_hz > 0.0 && n.duration_sec > 0.0));
    }
}

#[test]
fn envelope_decays_from_peak() {
    let spec = ToneSpec::for_cue(Cue::SingleChime);
    let note = spec.notes[0];
    assert!((spec.envelope(&note, 0.0) - TONE_PEAK_GAIN).abs() < 1e-6);
    let mid = spec.envelope(&note, note.duration_sec / 2.0);
    assert!(mid < TONE_PEAK_GAIN && mid > TONE_FLOOR_GAIN);
    assert_eq!(spec.envelope(&note, note.duration_sec), 0.0);
    assert_eq!(spec.envelope(&note, -0.1), 0.0);
}

#[test]
fn render_length_and_bounds() {
    let sr = DEFAULT_SAMPLE_RATE;
    for cue in ALL_CUES {
        let spec = ToneSpec::for_cue(cue);
        let pcm = spec.render(sr);
        let expected = (spec.total_duration() * sr as f32).ceil() as usize;
        assert_eq!(pcm.len(), expected, "{cue}");
        assert!(pcm.iter().all(|s| s.abs() <= TONE_PEAK_GAIN + 1e-4), "{cue}");
        assert!(pcm.iter().any(|s| s.abs() > 0.1), "{cue} is silent");
    }
}

#[test]
fn triple_beep_has_silent_gaps() {
    let sr = 8_000;
    let pcm = ToneSpec::for_cue(Cue::TripleBeep).render(sr);
    // middle of the first gap: 0.1 s .. 0.25 s
    let gap = &pcm[(0.15 * sr as f32) as usize..(0.2 * sr as f32) as usize];
    assert!(gap.iter().all(|s| *s == 0.0));
}

#[test]
fn silent_sink_reports_unavailable_and_sound_cue_swallows() {
    let err = SilentTones.play(Cue::SingleChime).unwrap_err();
    assert!(matches!(err, ToneError::Unavailable(_)));
    sound_cue(&SilentTones, Cue::SingleChime);
}
