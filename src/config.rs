//! Game configuration
//!
//! Every size, speed and timer period the engine uses.  Defaults reproduce the
//! classic 500×500 playfield; a JSON file may override any subset of keys.

use std::path::Path;

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

use crate::entities::Level;

/// Where `Restart` sends the player from the game-over screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RestartTarget {
    /// Back to the menu; difficulty must be chosen again
    #[default]
    LevelSelect,
    /// Straight into a new round at the previously chosen difficulty
    Playing,
}

/// Whether the shield can be raised more than once per life
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShieldPolicy {
    #[default]
    SingleUse,
    /// Can be raised again once the previous shield has expired
    Reusable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Playfield & entity sizes (pixels) ===
    pub width: i32,
    pub height: i32,
    pub player_width: i32,
    pub player_height: i32,
    /// Gap between the player's bottom edge and the playfield floor
    pub player_bottom_margin: i32,
    pub obstacle_width: i32,
    pub obstacle_height: i32,
    pub projectile_width: i32,
    pub projectile_height: i32,
    pub power_up_width: i32,
    pub power_up_height: i32,

    // === Speeds ===
    /// Pixels per movement input
    pub player_speed: i32,
    /// Pixels per tick
    pub easy_obstacle_speed: i32,
    pub hard_obstacle_speed: i32,
    pub projectile_speed: i32,

    // === Timer periods (milliseconds) ===
    pub tick_period_ms: u64,
    pub countdown_period_ms: u64,
    pub shield_duration_ms: u64,
    pub power_up_interval_ms: u64,
    pub fire_cooldown_ms: u64,

    // === Spawning ===
    pub obstacle_spawn_chance: f64,
    pub star_spawn_chance: f64,
    /// Star lifetime in ticks
    pub star_lifetime: u32,
    pub obstacle_variants: u8,

    // === Resources ===
    pub initial_health: i32,
    /// Countdown start in seconds; `None` plays without a clock
    pub initial_time: Option<u32>,
    pub score_per_hit: u32,

    // === Variant choices ===
    pub restart_target: RestartTarget,
    pub shield_policy: ShieldPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            player_width: 50,
            player_height: 50,
            player_bottom_margin: 20,
            obstacle_width: 40,
            obstacle_height: 40,
            projectile_width: 5,
            projectile_height: 15,
            power_up_width: 50,
            power_up_height: 50,

            player_speed: 10,
            easy_obstacle_speed: 3,
            hard_obstacle_speed: 6,
            projectile_speed: 10,

            tick_period_ms: 20,
            countdown_period_ms: 1000,
            shield_duration_ms: 5000,
            power_up_interval_ms: 15_000,
            fire_cooldown_ms: 500,

            obstacle_spawn_chance: 0.02,
            star_spawn_chance: 0.1,
            star_lifetime: 100,
            obstacle_variants: 4,

            initial_health: 5,
            initial_time: Some(30),
            score_per_hit: 10,

            restart_target: RestartTarget::LevelSelect,
            shield_policy: ShieldPolicy::SingleUse,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config.  Missing keys keep their defaults.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: GameConfig = serde_json::from_str(json).context("invalid config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("loading config {}", path.display()))
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let sizes = [
            ("width", self.width),
            ("height", self.height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_height", self.obstacle_height),
            ("projectile_width", self.projectile_width),
            ("projectile_height", self.projectile_height),
            ("power_up_width", self.power_up_width),
            ("power_up_height", self.power_up_height),
        ];
        for (name, value) in sizes {
            if value <= 0 {
                bail!("{name} must be positive, got {value}");
            }
        }
        if self.player_width > self.width || self.obstacle_width >= self.width {
            bail!("entities must fit inside a {}px wide playfield", self.width);
        }
        if self.player_height + self.player_bottom_margin > self.height {
            bail!("player does not fit inside a {}px tall playfield", self.height);
        }

        let periods = [
            ("tick_period_ms", self.tick_period_ms),
            ("countdown_period_ms", self.countdown_period_ms),
            ("shield_duration_ms", self.shield_duration_ms),
            ("power_up_interval_ms", self.power_up_interval_ms),
        ];
        for (name, value) in periods {
            if value == 0 {
                bail!("{name} must be non-zero");
            }
        }

        for (name, p) in [
            ("obstacle_spawn_chance", self.obstacle_spawn_chance),
            ("star_spawn_chance", self.star_spawn_chance),
        ] {
            if !(0.0..=1.0).contains(&p) {
                bail!("{name} must be within [0, 1], got {p}");
            }
        }

        if self.obstacle_variants == 0 {
            bail!("obstacle_variants must be at least 1");
        }
        if self.initial_health <= 0 {
            bail!("initial_health must be positive");
        }
        Ok(())
    }

    /// Obstacle fall speed for a difficulty level
    pub fn obstacle_speed(&self, level: Level) -> i32 {
        match level {
            Level::Easy => self.easy_obstacle_speed,
            Level::Hard => self.hard_obstacle_speed,
        }
    }

    /// Fire cooldown expressed in simulation ticks (rounded up)
    pub fn fire_cooldown_ticks(&self) -> u32 {
        let ticks = self.fire_cooldown_ms.div_ceil(self.tick_period_ms.max(1));
        u32::try_from(ticks).unwrap_or(u32::MAX)
    }

    /// Where the player starts each life
    pub fn player_start(&self) -> (i32, i32) {
        (
            self.width / 2 - self.player_width / 2,
            self.height - self.player_height - self.player_bottom_margin,
        )
    }

    /// Fixed spot where power-ups appear
    pub fn power_up_position(&self) -> (i32, i32) {
        (
            self.width / 2 - self.player_width / 2,
            self.height - self.player_height - self.player_bottom_margin,
        )
    }

    /// Rightmost legal x for the player's left edge
    pub fn player_max_x(&self) -> i32 {
        self.width - self.player_width
    }
}
