// Host-side tests for the countdown engine and its cue schedule.

use timer_core::*;

fn run_to_completion(c: &mut Countdown) -> Vec<(u32, Cue)> {
    let mut fired = Vec::new();
    while c.is_running() {
        if let Some(cue) = c.tick() {
            fired.push((c.remaining_seconds(), cue));
        }
    }
    fired
}

#[test]
fn d_ticks_reach_zero_and_stop() {
    for d in [1_u32, 2, 10, 61, 300, 3601] {
        let mut c = Countdown::default();
        c.set_duration(d);
        assert!(c.is_running());
        for _ in 0..d {
            c.tick();
        }
        assert_eq!(c.remaining_seconds(), 0, "duration {d}");
        assert!(!c.is_running(), "duration {d}");
        assert_eq!(c.phase(), Phase::Idle);
    }
}

#[test]
fn add_time_then_ticks_reach_zero() {
    let mut c = Countdown::default();
    c.add_time(ADD_TIME_SECS);
    c.toggle();
    assert!(c.is_running());
    for _ in 0..ADD_TIME_SECS {
        c.tick();
    }
    assert_eq!(c.remaining_seconds(), 0);
    assert!(!c.is_running());
}

#[test]
fn standard_schedule_fires_each_cue_once_in_order() {
    let mut c = Countdown::new(CueSchedule::Standard);
    c.set_duration(61);
    let fired = run_to_completion(&mut c);
    assert_eq!(
        fired,
        vec![
            (60, Cue::SingleChime),
            (30, Cue::DoubleChime),
            (10, Cue::TripleBeep),
        ]
    );
}

#[test]
fn minimal_schedule_fires_twenty_and_ten() {
    let mut c = Countdown::new(CueSchedule::Minimal);
    c.set_duration(25);
    let fired = run_to_completion(&mut c);
    assert_eq!(fired, vec![(20, Cue::SoftChime), (10, Cue::DoubleBeep)]);
}

#[test]
fn muted_countdown_fires_nothing() {
    let mut c = Countdown::default();
    c.set_muted(true);
    c.set_duration(90);
    assert!(run_to_completion(&mut c).is_empty());
    assert_eq!(c.remaining_seconds(), 0);
}

#[test]
fn mute_only_silences_ticks_while_set() {
    let mut c = Countdown::default();
    c.set_duration(62);
    c.toggle_mute();
    assert_eq!(c.tick(), None); // 61
    assert_eq!(c.tick(), None); // 60, muted
    c.toggle_mute();
    let fired = run_to_completion(&mut c);
    assert_eq!(fired, vec![(30, Cue::DoubleChime), (10, Cue::TripleBeep)]);
}

#[test]
fn natural_tick_onto_threshold_fires() {
    let mut c = Countdown::default();
    c.set_duration(12);
    assert_eq!(c.tick(), None);
    assert_eq!(c.tick(), Some(Cue::TripleBeep));
}

#[test]
fn jumping_over_threshold_skips_its_cue() {
    let mut c = Countdown::default();
    c.set_duration(15);
    c.add_time(-6);
    assert_eq!(c.remaining_seconds(), 9);
    assert!(run_to_completion(&mut c).is_empty());
}

#[test]
fn toggle_pauses_and_resumes() {
    let mut c = Countdown::default();
    c.quick_start();
    assert_eq!(c.remaining_seconds(), QUICK_START_SECS);
    c.tick();
    c.toggle();
    assert_eq!(c.phase(), Phase::Paused);
    assert_eq!(c.tick(), None);
    assert_eq!(c.remaining_seconds(), QUICK_START_SECS - 1);
    c.toggle();
    assert_eq!(c.phase(), Phase::Running);
}

#[test]
fn toggle_on_idle_stays_stopped() {
    let mut c = Countdown::default();
    c.toggle();
    assert!(!c.is_running());
    assert_eq!(c.phase(), Phase::Idle);
}

#[test]
fn quick_start_overwrites_running_value() {
    let mut c = Countdown::default();
    c.set_duration(20);
    c.tick();
    c.quick_start();
    assert_eq!(c.remaining_seconds(), QUICK_START_SECS);
    assert!(c.is_running());
}

#[test]
fn zero_duration_is_ignored() {
    let mut c = Countdown::default();
    c.set_duration(0);
    assert_eq!(c.phase(), Phase::Idle);
}

#[test]
fn reset_goes_idle_from_any_phase() {
    let mut c = Countdown::default();
    c.quick_start();
    c.reset();
    assert_eq!(c.phase(), Phase::Idle);
    c.add_time(40);
    c.reset();
    assert_eq!(c.phase(), Phase::Idle);
    assert_eq!(c.remaining_seconds(), 0);
}

#[test]
fn negative_add_time_saturates_and_stops() {
    let mut c = Countdown::default();
    c.quick_start();
    c.add_time(-1_000);
    assert_eq!(c.remaining_seconds(), 0);
    assert!(!c.is_running());
}

#[test]
fn urgency_bands() {
    let mut c = Countdown::default();
    c.add_time(21);
    assert_eq!(c.urgency(), Urgency::Calm);
    c.add_time(-1);
    assert_eq!(c.urgency(), Urgency::Warning);
    c.add_time(-10);
    assert_eq!(c.urgency(), Urgency::Urgent);
    c.reset();
    assert_eq!(c.urgency(), Urgency::Calm);
}

#[test]
fn time_fields_treat_garbage_as_zero() {
    assert_eq!(parse_time_field(""), 0);
    assert_eq!(parse_time_field("abc"), 0);
    assert_eq!(parse_time_field("-4"), 0);
    assert_eq!(parse_time_field(" 7 "), 7);
    assert_eq!(hms_to_seconds(1, 2, 3), 3723);
    assert_eq!(hms_to_seconds(u32::MAX, 0, 0), u32::MAX);
}

#[test]
fn time_fields_keep_leading_integer() {
    assert_eq!(parse_time_field("1.5"), 1);
    assert_eq!(parse_time_field("1e2"), 1);
    assert_eq!(parse_time_field("12abc"), 12);
    assert_eq!(parse_time_field("+3"), 3);
    assert_eq!(parse_time_field("007"), 7);
    assert_eq!(parse_time_field(".5"), 0);
    assert_eq!(parse_time_field("99999999999"), u32::MAX);
}

#[test]
fn format_pads_and_keeps_large_hours() {
    assert_eq!(format_hms(0), "00:00:00");
    assert_eq!(format_hms(60), "00:01:00");
    assert_eq!(format_hms(360), "00:06:00");
    assert_eq!(format_hms(3723), "01:02:03");
    assert_eq!(format_hms(100 * 3600), "100:00:00");
}

#[test]
fn schedule_lookup_is_exact() {
    let s = CueSchedule::Standard;
    assert_eq!(s.cue_at(60), Some(Cue::SingleChime));
    assert_eq!(s.cue_at(59), None);
    assert_eq!(s.cue_at(61), None);
    assert_eq!(s.thresholds().collect::<Vec<_>>(), vec![60, 30, 10]);
    assert_eq!(CueSchedule::Minimal.thresholds().collect::<Vec<_>>(), vec![20, 10]);
}
