/// Spawn decisions.
///
/// Obstacles and stars roll independently every tick; power-ups are chosen
/// when the power-up timer fires.  All randomness comes through the injected
/// `Rng` so tests can seed it.

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{Obstacle, PowerUp, PowerUpKind, Rgb, Star};

#[derive(Clone, Debug, PartialEq)]
pub struct SpawnPolicy {
    width: i32,
    height: i32,
    obstacle_width: i32,
    obstacle_height: i32,
    obstacle_chance: f64,
    obstacle_variants: u8,
    star_chance: f64,
    star_lifetime: u32,
    power_up_pos: (i32, i32),
}

impl SpawnPolicy {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            obstacle_width: config.obstacle_width,
            obstacle_height: config.obstacle_height,
            obstacle_chance: config.obstacle_spawn_chance,
            obstacle_variants: config.obstacle_variants.max(1),
            star_chance: config.star_spawn_chance,
            star_lifetime: config.star_lifetime,
            power_up_pos: config.power_up_position(),
        }
    }

    /// Maybe a new obstacle, entering from just above the top edge.
    pub fn roll_obstacle(&self, rng: &mut impl Rng) -> Option<Obstacle> {
        if !rng.gen_bool(self.obstacle_chance) {
            return None;
        }
        Some(Obstacle {
            x: rng.gen_range(0..(self.width - self.obstacle_width).max(1)),
            y: -self.obstacle_height,
            sprite: rng.gen_range(0..self.obstacle_variants),
        })
    }

    /// Maybe a new background star anywhere on the playfield.
    pub fn roll_star(&self, rng: &mut impl Rng) -> Option<Star> {
        if !rng.gen_bool(self.star_chance) {
            return None;
        }
        Some(Star {
            x: rng.gen_range(0..self.width),
            y: rng.gen_range(0..self.height),
            color: Rgb {
                r: rng.gen(),
                g: rng.gen(),
                b: rng.gen(),
            },
            lifetime: self.star_lifetime,
        })
    }

    /// Health or Time with equal odds, always at the fixed power-up spot.
    pub fn pick_power_up(&self, rng: &mut impl Rng) -> PowerUp {
        let kind = if rng.gen_bool(0.5) {
            PowerUpKind::Health
        } else {
            PowerUpKind::Time
        };
        PowerUp {
            kind,
            x: self.power_up_pos.0,
            y: self.power_up_pos.1,
        }
    }
}
