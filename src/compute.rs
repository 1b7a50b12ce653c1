/// The game-state machine.
///
/// `GameStateMachine` owns every piece of mutable game state and is the only
/// thing that changes it.  Input arrives through `handle_input`, time through
/// `advance` (or directly through `tick` / `countdown_tick`), and the outside
/// world reads back a `GameSnapshot` and the queued `GameEvent`s.

use rand::Rng;

use crate::collision::{self, CollisionReport};
use crate::config::{GameConfig, RestartTarget, ShieldPolicy};
use crate::entities::{EntityStore, Level, Obstacle, Phase, Player, PowerUp, Projectile, Star};
use crate::events::{GameEvent, InputEvent};
use crate::resources::ResourceTracker;
use crate::spawn::SpawnPolicy;
use crate::timers::{TimerKind, Timers};

/// Read-only copy of everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub level: Option<Level>,
    pub player: Player,
    pub projectile: Option<Projectile>,
    pub obstacles: Vec<Obstacle>,
    pub stars: Vec<Star>,
    pub power_up: Option<PowerUp>,
    pub score: u32,
    pub health: i32,
    pub remaining_time: Option<i32>,
    pub ticks: u64,
    pub width: i32,
    pub height: i32,
}

#[derive(Clone, Debug)]
pub struct GameStateMachine {
    config: GameConfig,
    spawn: SpawnPolicy,
    phase: Phase,
    level: Option<Level>,
    obstacle_speed: i32,
    player: Player,
    store: EntityStore,
    resources: ResourceTracker,
    timers: Timers,
    /// Ticks until the player may fire again.
    fire_cooldown: u32,
    ticks: u64,
    events: Vec<GameEvent>,
}

impl GameStateMachine {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// A fresh game sitting on the level-select screen.
    pub fn new(config: GameConfig) -> Self {
        let (x, y) = config.player_start();
        let player = Player {
            x,
            y,
            width: config.player_width,
            height: config.player_height,
            shield_active: false,
            shield_used: false,
        };
        Self {
            spawn: SpawnPolicy::from_config(&config),
            phase: Phase::LevelSelect,
            level: None,
            obstacle_speed: config.easy_obstacle_speed,
            player,
            store: EntityStore::new(),
            resources: ResourceTracker::new(config.initial_health, config.initial_time),
            timers: Timers::new(
                config.tick_period_ms,
                config.countdown_period_ms,
                config.power_up_interval_ms,
                config.shield_duration_ms,
            ),
            fire_cooldown: 0,
            ticks: 0,
            events: Vec::new(),
            config,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn level(&self) -> Option<Level> {
        self.level
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn resources(&self) -> &ResourceTracker {
        &self.resources
    }

    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    pub fn obstacle_speed(&self) -> i32 {
        self.obstacle_speed
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Ticks left before `Fire` is accepted again.
    pub fn fire_cooldown(&self) -> u32 {
        self.fire_cooldown
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase,
            level: self.level,
            player: self.player.clone(),
            projectile: self.store.projectile().copied(),
            obstacles: self.store.obstacles().to_vec(),
            stars: self.store.stars().to_vec(),
            power_up: self.store.power_up().copied(),
            score: self.resources.score(),
            health: self.resources.health().max(0),
            remaining_time: self.resources.remaining_time().map(|t| t.max(0)),
            ticks: self.ticks,
            width: self.config.width,
            height: self.config.height,
        }
    }

    /// Hand over everything that happened since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // ── Test/setup hooks ─────────────────────────────────────────────────────
    // Only compiled with the `testing` feature; shipped builds expose no way
    // to mutate game state besides input and time.

    /// Direct access to the entity store, for scripted setups.
    #[cfg(feature = "testing")]
    #[doc(hidden)]
    pub fn store_mut(&mut self) -> &mut EntityStore {
        &mut self.store
    }

    #[cfg(feature = "testing")]
    #[doc(hidden)]
    pub fn resources_mut(&mut self) -> &mut ResourceTracker {
        &mut self.resources
    }

    /// Teleport the player; the position is clamped to the playfield.
    #[cfg(feature = "testing")]
    #[doc(hidden)]
    pub fn place_player(&mut self, x: i32, y: i32) {
        self.player.x = x.clamp(0, self.config.player_max_x());
        self.player.y = y.clamp(0, self.config.height - self.player.height);
    }

    // ── Input ────────────────────────────────────────────────────────────────

    pub fn handle_input(&mut self, input: InputEvent) {
        match (self.phase, input) {
            (Phase::LevelSelect, InputEvent::SelectEasy | InputEvent::SelectHard) => {
                if let Some(level) = input.level() {
                    self.select_level(level);
                }
            }
            (Phase::Playing, InputEvent::MoveLeft) => {
                self.player.x = (self.player.x - self.config.player_speed).max(0);
            }
            (Phase::Playing, InputEvent::MoveRight) => {
                self.player.x =
                    (self.player.x + self.config.player_speed).min(self.config.player_max_x());
            }
            (Phase::Playing, InputEvent::Fire) => self.fire(),
            (Phase::Playing, InputEvent::ActivateShield) => self.raise_shield(),
            (Phase::GameOver, InputEvent::Restart) => self.restart(),
            (phase, input) => log::trace!("ignoring {:?} during {:?}", input, phase),
        }
    }

    fn select_level(&mut self, level: Level) {
        self.level = Some(level);
        self.obstacle_speed = self.config.obstacle_speed(level);
        log::info!("level {:?} selected (obstacle speed {})", level, self.obstacle_speed);
        self.events.push(GameEvent::LevelChosen(level));
        self.enter_playing();
    }

    fn fire(&mut self) {
        if self.fire_cooldown > 0 || self.store.projectile().is_some() {
            return;
        }
        let projectile = Projectile {
            x: self.player.x + self.player.width / 2 - self.config.projectile_width / 2,
            y: self.player.y,
        };
        if self.store.fire_projectile(projectile) {
            self.fire_cooldown = self.config.fire_cooldown_ticks();
            self.events.push(GameEvent::Shoot);
        }
    }

    fn raise_shield(&mut self) {
        if self.player.shield_active {
            return;
        }
        if self.player.shield_used && self.config.shield_policy == ShieldPolicy::SingleUse {
            return;
        }
        self.player.shield_active = true;
        self.player.shield_used = true;
        self.timers.get_mut(TimerKind::Shield).start();
        log::debug!("shield raised");
        self.events.push(GameEvent::ShieldRaised);
    }

    // ── Time ─────────────────────────────────────────────────────────────────

    /// Let `elapsed_ms` of wall-clock time pass.  Every timer that comes due
    /// is fired in deadline order; a timer stopped by an earlier one in the
    /// same call does not fire.
    pub fn advance(&mut self, elapsed_ms: u64, rng: &mut impl Rng) {
        let mut budget = elapsed_ms;
        while let Some((kind, due_in)) = self.timers.next_due(budget) {
            self.timers.elapse(due_in);
            budget -= due_in;
            self.timers.fire(kind);
            self.on_timer(kind, rng);
        }
        self.timers.elapse(budget);
    }

    fn on_timer(&mut self, kind: TimerKind, rng: &mut impl Rng) {
        match kind {
            TimerKind::Simulation => self.tick(rng),
            TimerKind::Countdown => self.countdown_tick(),
            TimerKind::PowerUp => self.spawn_power_up(rng),
            TimerKind::Shield => self.expire_shield(),
        }
    }

    /// One simulation step: spawn, move, collide, then check for the end of
    /// the life.  Does nothing outside `Playing`.
    pub fn tick(&mut self, rng: &mut impl Rng) {
        if self.phase != Phase::Playing {
            return;
        }
        self.ticks += 1;

        // ── 1. Spawn ─────────────────────────────────────────────────────────
        if let Some(obstacle) = self.spawn.roll_obstacle(rng) {
            self.store.add_obstacle(obstacle);
        }
        if let Some(star) = self.spawn.roll_star(rng) {
            self.store.add_star(star);
        }

        // ── 2. Move ──────────────────────────────────────────────────────────
        let dropped = self.store.advance_obstacles(self.obstacle_speed, self.config.height);
        if dropped > 0 {
            log::trace!("tick {}: {} obstacle(s) left through the floor", self.ticks, dropped);
        }
        self.store.advance_projectile(self.config.projectile_speed);
        self.store.age_stars();
        self.fire_cooldown = self.fire_cooldown.saturating_sub(1);

        // ── 3. Collide ───────────────────────────────────────────────────────
        let report = collision::resolve(
            &mut self.store,
            &self.player,
            &mut self.resources,
            &self.config,
            &mut self.events,
        );
        if report != CollisionReport::default() {
            log::debug!("tick {}: {:?}", self.ticks, report);
        }

        // ── 4. End of life? ──────────────────────────────────────────────────
        if self.resources.is_exhausted() {
            self.end_game();
        }
    }

    /// One countdown period: lose a second, and end the game at zero.
    pub fn countdown_tick(&mut self) {
        if self.phase != Phase::Playing || !self.resources.has_countdown() {
            return;
        }
        self.resources.tick_time();
        if self.resources.is_exhausted() {
            self.end_game();
        }
    }

    fn spawn_power_up(&mut self, rng: &mut impl Rng) {
        if self.phase != Phase::Playing {
            return;
        }
        let power_up = self.spawn.pick_power_up(rng);
        if let Some(old) = self.store.set_power_up(power_up) {
            log::debug!("{:?} power-up superseded", old.kind);
        }
        log::debug!("{:?} power-up spawned", power_up.kind);
        self.events.push(GameEvent::PowerUpSpawned(power_up.kind));
    }

    fn expire_shield(&mut self) {
        if self.player.shield_active {
            self.player.shield_active = false;
            log::debug!("shield expired");
            self.events.push(GameEvent::ShieldExpired);
        }
    }

    // ── Transitions ──────────────────────────────────────────────────────────

    fn enter_playing(&mut self) {
        self.phase = Phase::Playing;
        self.timers.stop_all();
        self.timers.get_mut(TimerKind::Simulation).start();
        if self.resources.has_countdown() {
            self.timers.get_mut(TimerKind::Countdown).start();
        }
        self.timers.get_mut(TimerKind::PowerUp).start();
    }

    fn end_game(&mut self) {
        self.phase = Phase::GameOver;
        self.timers.stop_all();
        self.player.shield_active = false;
        self.resources.settle();
        log::info!("game over, final score {}", self.resources.score());
        self.events.push(GameEvent::GameOver {
            score: self.resources.score(),
        });
    }

    fn restart(&mut self) {
        self.timers.stop_all();
        self.store.clear();
        self.resources.reset();
        let (x, y) = self.config.player_start();
        self.player.x = x;
        self.player.y = y;
        self.player.shield_active = false;
        self.player.shield_used = false;
        self.fire_cooldown = 0;
        self.ticks = 0;
        self.events.push(GameEvent::Restarted);

        match (self.config.restart_target, self.level) {
            (RestartTarget::Playing, Some(level)) => {
                log::info!("restarting at level {:?}", level);
                self.enter_playing();
            }
            _ => {
                log::info!("restarting at level select");
                self.level = None;
                self.phase = Phase::LevelSelect;
            }
        }
    }
}
