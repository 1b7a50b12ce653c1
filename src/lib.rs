//! Space Game - a small dodge-and-shoot arcade engine.
//!
//! Core modules:
//! - `entities`: pure data for the player, projectile, obstacles, stars and power-ups
//! - `config`: tunable constants, loadable from JSON
//! - `spawn`: probabilistic obstacle/star spawning and power-up selection
//! - `collision`: AABB overlap passes and their effects
//! - `resources`: score, health and countdown bookkeeping
//! - `timers`: single-threaded scheduler for the game's periodic timers
//! - `compute`: the game-state machine that ties everything together
//! - `events`: notifications for the render/audio collaborators
//!
//! Nothing in here touches the terminal; the binary owns all I/O.

pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod events;
pub mod resources;
pub mod spawn;
pub mod timers;

pub use compute::{GameSnapshot, GameStateMachine};
pub use config::{GameConfig, RestartTarget, ShieldPolicy};
pub use entities::{Level, Phase};
pub use events::{Cue, CueSink, GameEvent, InputEvent};
