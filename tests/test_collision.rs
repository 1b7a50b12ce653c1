use space_game::collision::{resolve, CollisionReport};
use space_game::config::GameConfig;
use space_game::entities::*;
use space_game::events::GameEvent;
use space_game::resources::ResourceTracker;

fn player(shield: bool) -> Player {
    Player {
        x: 225,
        y: 430,
        width: 50,
        height: 50,
        shield_active: shield,
        shield_used: shield,
    }
}

struct Fixture {
    store: EntityStore,
    resources: ResourceTracker,
    config: GameConfig,
    events: Vec<GameEvent>,
}

impl Fixture {
    fn new(health: i32) -> Self {
        Self {
            store: EntityStore::new(),
            resources: ResourceTracker::new(health, Some(30)),
            config: GameConfig::default(),
            events: Vec::new(),
        }
    }

    fn run(&mut self, player: &Player) -> CollisionReport {
        resolve(
            &mut self.store,
            player,
            &mut self.resources,
            &self.config,
            &mut self.events,
        )
    }
}

#[test]
fn nothing_overlapping_does_nothing() {
    let mut f = Fixture::new(5);
    f.store.add_obstacle(Obstacle { x: 0, y: 0, sprite: 0 });
    let report = f.run(&player(false));
    assert_eq!(report, CollisionReport::default());
    assert_eq!(f.store.obstacles().len(), 1);
    assert!(f.events.is_empty());
}

#[test]
fn lethal_hit_stops_the_damage_pass() {
    let mut f = Fixture::new(1);
    f.store.add_obstacle(Obstacle { x: 225, y: 420, sprite: 0 });
    f.store.add_obstacle(Obstacle { x: 240, y: 430, sprite: 1 });

    let report = f.run(&player(false));

    assert!(report.lethal);
    assert_eq!(report.player_hits, 1);
    assert_eq!(f.resources.health(), 0);
    // The second obstacle is left untouched.
    assert_eq!(f.store.obstacles(), &[Obstacle { x: 240, y: 430, sprite: 1 }]);
}

#[test]
fn several_non_lethal_hits_in_one_pass() {
    let mut f = Fixture::new(5);
    f.store.add_obstacle(Obstacle { x: 225, y: 420, sprite: 0 });
    f.store.add_obstacle(Obstacle { x: 0, y: 0, sprite: 1 });
    f.store.add_obstacle(Obstacle { x: 240, y: 430, sprite: 2 });

    let report = f.run(&player(false));

    assert_eq!(report.player_hits, 2);
    assert!(!report.lethal);
    assert_eq!(f.resources.health(), 3);
    assert_eq!(f.store.obstacles(), &[Obstacle { x: 0, y: 0, sprite: 1 }]);
    assert_eq!(f.events, vec![GameEvent::PlayerHit, GameEvent::PlayerHit]);
}

#[test]
fn shield_skips_damage_and_removal() {
    let mut f = Fixture::new(5);
    f.store.add_obstacle(Obstacle { x: 225, y: 420, sprite: 0 });
    let report = f.run(&player(true));
    assert_eq!(report.player_hits, 0);
    assert_eq!(f.resources.health(), 5);
    assert_eq!(f.store.obstacles().len(), 1);
}

#[test]
fn projectile_destroys_only_first_overlap() {
    let mut f = Fixture::new(5);
    f.store.add_obstacle(Obstacle { x: 100, y: 100, sprite: 0 });
    f.store.add_obstacle(Obstacle { x: 90, y: 95, sprite: 1 });
    f.store.fire_projectile(Projectile { x: 110, y: 110 });

    let report = f.run(&player(false));

    assert!(report.obstacle_shot);
    assert_eq!(f.resources.score(), 10);
    assert!(f.store.projectile().is_none());
    assert_eq!(f.store.obstacles(), &[Obstacle { x: 90, y: 95, sprite: 1 }]);
}

#[test]
fn damage_and_score_register_in_same_pass() {
    let mut f = Fixture::new(1);
    f.store.add_obstacle(Obstacle { x: 225, y: 420, sprite: 0 });
    f.store.add_obstacle(Obstacle { x: 100, y: 100, sprite: 1 });
    f.store.fire_projectile(Projectile { x: 110, y: 110 });

    let report = f.run(&player(false));

    assert!(report.lethal);
    assert!(report.obstacle_shot);
    assert_eq!(f.resources.health(), 0);
    assert_eq!(f.resources.score(), 10);
    assert!(f.store.obstacles().is_empty());
    assert_eq!(f.events, vec![GameEvent::PlayerHit, GameEvent::ObstacleDestroyed]);
}

#[test]
fn health_power_up_doubles_and_disappears() {
    let mut f = Fixture::new(3);
    f.store.set_power_up(PowerUp { kind: PowerUpKind::Health, x: 240, y: 440 });
    let report = f.run(&player(false));
    assert_eq!(report.power_up_collected, Some(PowerUpKind::Health));
    assert_eq!(f.resources.health(), 6);
    assert!(f.store.power_up().is_none());
    assert_eq!(f.events, vec![GameEvent::PowerUpCollected(PowerUpKind::Health)]);
}

#[test]
fn time_power_up_without_countdown_is_consumed_harmlessly() {
    let mut f = Fixture::new(5);
    f.resources = ResourceTracker::new(5, None);
    f.store.set_power_up(PowerUp { kind: PowerUpKind::Time, x: 225, y: 430 });
    let report = f.run(&player(false));
    assert_eq!(report.power_up_collected, Some(PowerUpKind::Time));
    assert_eq!(f.resources.remaining_time(), None);
    assert!(f.store.power_up().is_none());
}

#[test]
fn power_up_collected_before_lethal_damage() {
    // Health 1 doubled to 2 first, so the hit that follows is not lethal.
    let mut f = Fixture::new(1);
    f.store.set_power_up(PowerUp { kind: PowerUpKind::Health, x: 225, y: 430 });
    f.store.add_obstacle(Obstacle { x: 225, y: 420, sprite: 0 });
    let report = f.run(&player(false));
    assert!(!report.lethal);
    assert_eq!(f.resources.health(), 1);
}
