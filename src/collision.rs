/// Collision passes.
///
/// Three independent passes run in a fixed order each tick:
///
/// 1. player ↔ power-up
/// 2. player ↔ obstacles (damage)
/// 3. projectile ↔ obstacles (score)
///
/// Player damage is resolved before projectile scoring so that a tick in
/// which the player is hit and also shoots something registers both.

use crate::config::GameConfig;
use crate::entities::{EntityStore, Player, PowerUpKind, Rect};
use crate::events::GameEvent;
use crate::resources::ResourceTracker;

/// What happened during one round of collision passes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub power_up_collected: Option<PowerUpKind>,
    /// Obstacles that hit the (unshielded) player.
    pub player_hits: u32,
    pub obstacle_shot: bool,
    /// Health ran out during the player ↔ obstacle pass.
    pub lethal: bool,
}

pub fn resolve(
    store: &mut EntityStore,
    player: &Player,
    resources: &mut ResourceTracker,
    config: &GameConfig,
    events: &mut Vec<GameEvent>,
) -> CollisionReport {
    let mut report = CollisionReport::default();
    let player_rect = player.rect();

    // ── 1. Player ↔ power-up ─────────────────────────────────────────────────
    let touching_power_up = store.power_up().is_some_and(|p| {
        Rect::new(p.x, p.y, config.power_up_width, config.power_up_height)
            .intersects(&player_rect)
    });
    if touching_power_up {
        if let Some(power_up) = store.take_power_up() {
            match power_up.kind {
                PowerUpKind::Health => resources.apply_health_buff(),
                PowerUpKind::Time => {
                    if !resources.apply_time_buff() {
                        log::debug!("time power-up collected without a countdown running");
                    }
                }
            }
            log::debug!("collected {:?} power-up", power_up.kind);
            events.push(GameEvent::PowerUpCollected(power_up.kind));
            report.power_up_collected = Some(power_up.kind);
        }
    }

    // ── 2. Player ↔ obstacles ────────────────────────────────────────────────
    // A shielded player neither takes damage nor clears the obstacle; it
    // keeps falling until it leaves through the floor.
    if !player.shield_active {
        let mut i = 0;
        while i < store.obstacles().len() {
            let o = store.obstacles()[i];
            let rect = Rect::new(o.x, o.y, config.obstacle_width, config.obstacle_height);
            if !rect.intersects(&player_rect) {
                i += 1;
                continue;
            }
            resources.apply_damage(1);
            store.remove_obstacle(i);
            report.player_hits += 1;
            events.push(GameEvent::PlayerHit);
            if resources.health() <= 0 {
                report.lethal = true;
                break;
            }
        }
    }

    // ── 3. Projectile ↔ obstacles ────────────────────────────────────────────
    // One projectile takes out at most one obstacle.
    if let Some(p) = store.projectile().copied() {
        let shot = Rect::new(p.x, p.y, config.projectile_width, config.projectile_height);
        let hit = store.obstacles().iter().position(|o| {
            Rect::new(o.x, o.y, config.obstacle_width, config.obstacle_height).intersects(&shot)
        });
        if let Some(index) = hit {
            store.remove_obstacle(index);
            store.clear_projectile();
            resources.add_score(config.score_per_hit);
            report.obstacle_shot = true;
            events.push(GameEvent::ObstacleDestroyed);
        }
    }

    report
}
