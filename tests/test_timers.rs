use std::time::Duration;

use space_game::timers::{FrameClock, Timer, TimerKind, Timers};

fn timers() -> Timers {
    Timers::new(20, 1_000, 15_000, 5_000)
}

#[test]
fn new_timers_are_stopped() {
    let t = timers();
    assert!(!t.any_running());
    assert_eq!(t.next_due(u64::MAX), None);
}

#[test]
fn stop_is_idempotent() {
    let mut t = Timer::new(100, true);
    t.stop();
    t.stop();
    assert!(!t.is_running());
    t.start();
    t.stop();
    t.stop();
    assert!(!t.is_running());
    assert_eq!(t.remaining_ms(), 0);
}

#[test]
fn start_arms_full_period() {
    let mut t = timers();
    t.get_mut(TimerKind::Countdown).start();
    assert_eq!(t.get(TimerKind::Countdown).remaining_ms(), 1_000);
    assert_eq!(t.next_due(999), None);
    assert_eq!(t.next_due(1_000), Some((TimerKind::Countdown, 1_000)));
}

#[test]
fn earliest_deadline_wins() {
    let mut t = timers();
    t.get_mut(TimerKind::Simulation).start();
    t.get_mut(TimerKind::Countdown).start();
    assert_eq!(t.next_due(5_000), Some((TimerKind::Simulation, 20)));
}

#[test]
fn ties_break_in_kind_order() {
    let mut t = Timers::new(1_000, 1_000, 1_000, 1_000);
    t.get_mut(TimerKind::Shield).start();
    t.get_mut(TimerKind::PowerUp).start();
    t.get_mut(TimerKind::Countdown).start();
    assert_eq!(t.next_due(1_000), Some((TimerKind::Countdown, 1_000)));
}

#[test]
fn repeating_timer_rearms_one_shot_stops() {
    let mut t = timers();
    t.get_mut(TimerKind::Simulation).start();
    t.get_mut(TimerKind::Shield).start();

    t.elapse(20);
    t.fire(TimerKind::Simulation);
    assert!(t.is_running(TimerKind::Simulation));
    assert_eq!(t.get(TimerKind::Simulation).remaining_ms(), 20);

    t.elapse(4_980);
    t.fire(TimerKind::Shield);
    assert!(!t.is_running(TimerKind::Shield));
}

#[test]
fn elapse_skips_stopped_timers() {
    let mut t = timers();
    t.elapse(10_000);
    assert_eq!(t.get(TimerKind::PowerUp).remaining_ms(), 0);
    assert!(!t.is_running(TimerKind::PowerUp));
}

#[test]
fn stop_all_stops_everything() {
    let mut t = timers();
    for kind in TimerKind::ALL {
        t.get_mut(kind).start();
    }
    assert!(t.any_running());
    t.stop_all();
    t.stop_all();
    assert!(!t.any_running());
}

#[test]
fn zero_period_is_bumped_to_one() {
    let t = Timer::new(0, true);
    assert_eq!(t.period_ms(), 1);
}

// ── FrameClock ────────────────────────────────────────────────────────────────

#[test]
fn frame_clock_carries_sub_millisecond_rest() {
    let mut clock = FrameClock::new();
    let frame = Duration::from_micros(1_500);
    let total: u64 = (0..1_000).map(|_| clock.take_ms(frame)).sum();
    assert_eq!(total, 1_500);
    assert_eq!(clock.carry(), Duration::ZERO);
}

#[test]
fn frame_clock_hands_out_whole_milliseconds() {
    let mut clock = FrameClock::new();
    assert_eq!(clock.take_ms(Duration::from_micros(700)), 0);
    assert_eq!(clock.carry(), Duration::from_micros(700));
    assert_eq!(clock.take_ms(Duration::from_micros(700)), 1);
    assert_eq!(clock.carry(), Duration::from_micros(400));
    assert_eq!(clock.take_ms(Duration::from_millis(16)), 16);
    assert_eq!(clock.carry(), Duration::from_micros(400));
}
