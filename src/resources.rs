//! Score, health and countdown bookkeeping.
//!
//! The state machine never inspects raw values to decide whether a life is
//! over; it asks `is_exhausted()`, which every mutator keeps current.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceTracker {
    score: u32,
    health: i32,
    remaining_time: Option<i32>,
    initial_health: i32,
    initial_time: Option<i32>,
}

impl ResourceTracker {
    /// `initial_time` of `None` disables the countdown entirely.
    pub fn new(initial_health: i32, initial_time: Option<u32>) -> Self {
        let initial_time = initial_time.map(|t| i32::try_from(t).unwrap_or(i32::MAX));
        Self {
            score: 0,
            health: initial_health,
            remaining_time: initial_time,
            initial_health,
            initial_time,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    /// Seconds left, or `None` when playing without a countdown.
    pub fn remaining_time(&self) -> Option<i32> {
        self.remaining_time
    }

    pub fn has_countdown(&self) -> bool {
        self.remaining_time.is_some()
    }

    pub fn apply_damage(&mut self, amount: i32) {
        self.health = self.health.saturating_sub(amount);
    }

    pub fn add_score(&mut self, amount: u32) {
        self.score = self.score.saturating_add(amount);
    }

    pub fn apply_health_buff(&mut self) {
        self.health = self.health.saturating_mul(2);
    }

    /// Doubles the remaining time.  Returns `false` (and does nothing) when
    /// there is no countdown to extend.
    pub fn apply_time_buff(&mut self) -> bool {
        match self.remaining_time.as_mut() {
            Some(t) => {
                *t = t.saturating_mul(2);
                true
            }
            None => false,
        }
    }

    /// One countdown period elapsed.
    pub fn tick_time(&mut self) {
        if let Some(t) = self.remaining_time.as_mut() {
            *t = t.saturating_sub(1);
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.health <= 0 || self.remaining_time.is_some_and(|t| t <= 0)
    }

    /// Clamp health and time at zero.  Called when a life ends so the final
    /// figures shown to the player are never negative.
    pub fn settle(&mut self) {
        self.health = self.health.max(0);
        if let Some(t) = self.remaining_time.as_mut() {
            *t = (*t).max(0);
        }
    }

    pub fn reset(&mut self) {
        self.score = 0;
        self.health = self.initial_health;
        self.remaining_time = self.initial_time;
    }
}
