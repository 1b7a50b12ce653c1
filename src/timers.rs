use std::time::Duration;

/// Game timers.
///
/// All timers are driven by the same caller-supplied elapsed time and fire
/// one at a time on the caller's thread, so a timer callback can never race
/// the simulation tick.

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimerKind {
    /// Fixed-rate simulation step.
    Simulation,
    /// One-second countdown.
    Countdown,
    /// One-shot power-up spawn.
    PowerUp,
    /// One-shot shield expiry.
    Shield,
}

impl TimerKind {
    /// Tie-break order when several timers are due at the same instant.
    pub const ALL: [TimerKind; 4] = [
        TimerKind::Simulation,
        TimerKind::Countdown,
        TimerKind::PowerUp,
        TimerKind::Shield,
    ];
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timer {
    period_ms: u64,
    remaining_ms: u64,
    repeats: bool,
    running: bool,
}

impl Timer {
    pub fn new(period_ms: u64, repeats: bool) -> Self {
        Self {
            period_ms: period_ms.max(1),
            remaining_ms: 0,
            repeats,
            running: false,
        }
    }

    /// (Re)arm with a full period.
    pub fn start(&mut self) {
        self.remaining_ms = self.period_ms;
        self.running = true;
    }

    /// Stopping a stopped timer does nothing.
    pub fn stop(&mut self) {
        self.running = false;
        self.remaining_ms = 0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    /// Milliseconds until the next fire.  Zero when stopped.
    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    fn elapse(&mut self, ms: u64) {
        if self.running {
            self.remaining_ms = self.remaining_ms.saturating_sub(ms);
        }
    }

    /// Called when the timer goes off: repeating timers re-arm, one-shots stop.
    fn fire(&mut self) {
        if self.repeats {
            self.remaining_ms = self.period_ms;
        } else {
            self.stop();
        }
    }
}

/// The fixed set of timers a game uses, one of each kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timers {
    simulation: Timer,
    countdown: Timer,
    power_up: Timer,
    shield: Timer,
}

impl Timers {
    pub fn new(tick_ms: u64, countdown_ms: u64, power_up_ms: u64, shield_ms: u64) -> Self {
        Self {
            simulation: Timer::new(tick_ms, true),
            countdown: Timer::new(countdown_ms, true),
            power_up: Timer::new(power_up_ms, false),
            shield: Timer::new(shield_ms, false),
        }
    }

    pub fn get(&self, kind: TimerKind) -> &Timer {
        match kind {
            TimerKind::Simulation => &self.simulation,
            TimerKind::Countdown => &self.countdown,
            TimerKind::PowerUp => &self.power_up,
            TimerKind::Shield => &self.shield,
        }
    }

    pub fn get_mut(&mut self, kind: TimerKind) -> &mut Timer {
        match kind {
            TimerKind::Simulation => &mut self.simulation,
            TimerKind::Countdown => &mut self.countdown,
            TimerKind::PowerUp => &mut self.power_up,
            TimerKind::Shield => &mut self.shield,
        }
    }

    pub fn is_running(&self, kind: TimerKind) -> bool {
        self.get(kind).is_running()
    }

    pub fn any_running(&self) -> bool {
        TimerKind::ALL.iter().any(|&k| self.is_running(k))
    }

    pub fn stop_all(&mut self) {
        for kind in TimerKind::ALL {
            self.get_mut(kind).stop();
        }
    }

    /// The earliest timer that goes off within `budget_ms`, with how long
    /// until it does.
    pub fn next_due(&self, budget_ms: u64) -> Option<(TimerKind, u64)> {
        TimerKind::ALL
            .iter()
            .map(|&k| (k, self.get(k)))
            .filter(|(_, t)| t.is_running() && t.remaining_ms() <= budget_ms)
            .min_by_key(|&(k, t)| (t.remaining_ms(), k))
            .map(|(k, t)| (k, t.remaining_ms()))
    }

    /// Let `ms` pass on every running timer without firing any.
    pub fn elapse(&mut self, ms: u64) {
        for kind in TimerKind::ALL {
            self.get_mut(kind).elapse(ms);
        }
    }

    /// Mark `kind` as having gone off.
    pub fn fire(&mut self, kind: TimerKind) {
        self.get_mut(kind).fire();
    }
}

/// Turns wall-clock frame durations into whole milliseconds for
/// `GameStateMachine::advance`, keeping the sub-millisecond rest for the
/// next frame so game time does not drift behind real time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameClock {
    carry: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whole milliseconds in `elapsed` plus whatever was carried over.
    pub fn take_ms(&mut self, elapsed: Duration) -> u64 {
        let total = self.carry + elapsed;
        let ms = u64::try_from(total.as_millis()).unwrap_or(u64::MAX);
        self.carry = total.saturating_sub(Duration::from_millis(ms));
        ms
    }

    /// Time seen but not yet handed out.
    pub fn carry(&self) -> Duration {
        self.carry
    }
}
