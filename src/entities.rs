/// All game entity types plus the store that owns the transient ones.
///
/// The types here are plain data; the only behaviour is bookkeeping on
/// `EntityStore` (add, move, prune).  Rules about *when* to do those things
/// live in `compute`, `spawn` and `collision`.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Easy,
    Hard,
}

/// Top-level mode of the game.  Exactly one is active at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    LevelSelect,
    Playing,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Doubles current health.
    Health,
    /// Doubles the remaining countdown time.
    Time,
}

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned box in playfield pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Strict overlap: boxes that only share an edge do not intersect,
    /// and empty boxes never intersect anything.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.w <= 0 || self.h <= 0 || other.w <= 0 || other.h <= 0 {
            return false;
        }
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

// ── Player & projectile ───────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub shield_active: bool,
    /// Set the first time the shield is raised in the current life.
    pub shield_used: bool,
}

impl Player {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projectile {
    pub x: i32,
    pub y: i32,
}

// ── Obstacles, stars, power-ups ───────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: i32,
    pub y: i32,
    /// Which sprite the renderer should use; no gameplay meaning.
    pub sprite: u8,
}

/// Background decoration.  Never collides, never scores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Star {
    pub x: i32,
    pub y: i32,
    pub color: Rgb,
    /// Ticks left before the star disappears.
    pub lifetime: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    pub x: i32,
    pub y: i32,
}

// ── Entity store ──────────────────────────────────────────────────────────────

/// Owns every transient entity.  The player lives outside the store since
/// it is never created or destroyed, only repositioned.
#[derive(Clone, Debug, Default)]
pub struct EntityStore {
    obstacles: Vec<Obstacle>,
    stars: Vec<Star>,
    projectile: Option<Projectile>,
    power_up: Option<PowerUp>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn projectile(&self) -> Option<&Projectile> {
        self.projectile.as_ref()
    }

    pub fn power_up(&self) -> Option<&PowerUp> {
        self.power_up.as_ref()
    }

    /// Obstacles are kept in spawn order.
    pub fn add_obstacle(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    pub fn add_star(&mut self, star: Star) {
        self.stars.push(star);
    }

    /// Removes the obstacle at `index`, preserving the order of the rest.
    pub fn remove_obstacle(&mut self, index: usize) -> Option<Obstacle> {
        if index < self.obstacles.len() {
            Some(self.obstacles.remove(index))
        } else {
            None
        }
    }

    /// Move every obstacle down by `speed` and drop those whose top edge is
    /// past `floor`.  Returns how many were dropped.
    pub fn advance_obstacles(&mut self, speed: i32, floor: i32) -> usize {
        let before = self.obstacles.len();
        self.obstacles.retain_mut(|o| {
            o.y += speed;
            o.y <= floor
        });
        before - self.obstacles.len()
    }

    /// Age every star by one tick, dropping expired ones.
    pub fn age_stars(&mut self) {
        self.stars.retain_mut(|s| {
            s.lifetime = s.lifetime.saturating_sub(1);
            s.lifetime > 0
        });
    }

    /// Puts a projectile in flight.  Refused (returns `false`) while another
    /// one is still live.
    pub fn fire_projectile(&mut self, projectile: Projectile) -> bool {
        if self.projectile.is_some() {
            return false;
        }
        self.projectile = Some(projectile);
        true
    }

    /// Move the projectile up by `speed`; it is gone once above the top edge.
    pub fn advance_projectile(&mut self, speed: i32) {
        if let Some(p) = self.projectile.as_mut() {
            p.y -= speed;
            if p.y < 0 {
                self.projectile = None;
            }
        }
    }

    pub fn clear_projectile(&mut self) {
        self.projectile = None;
    }

    /// Installs a power-up, superseding any existing one.
    pub fn set_power_up(&mut self, power_up: PowerUp) -> Option<PowerUp> {
        self.power_up.replace(power_up)
    }

    pub fn take_power_up(&mut self) -> Option<PowerUp> {
        self.power_up.take()
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
        self.stars.clear();
        self.projectile = None;
        self.power_up = None;
    }
}
