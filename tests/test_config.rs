use space_game::config::*;
use space_game::entities::Level;

#[test]
fn defaults_match_classic_game() {
    let c = GameConfig::default();
    assert_eq!((c.width, c.height), (500, 500));
    assert_eq!((c.player_width, c.player_height), (50, 50));
    assert_eq!((c.obstacle_width, c.obstacle_height), (40, 40));
    assert_eq!((c.projectile_width, c.projectile_height), (5, 15));
    assert_eq!(c.tick_period_ms, 20);
    assert_eq!(c.initial_health, 5);
    assert_eq!(c.initial_time, Some(30));
    assert_eq!(c.restart_target, RestartTarget::LevelSelect);
    assert_eq!(c.shield_policy, ShieldPolicy::SingleUse);
    assert!(c.validate().is_ok());
}

#[test]
fn derived_values() {
    let c = GameConfig::default();
    assert_eq!(c.obstacle_speed(Level::Easy), 3);
    assert_eq!(c.obstacle_speed(Level::Hard), 6);
    assert_eq!(c.fire_cooldown_ticks(), 25);
    assert_eq!(c.player_start(), (225, 430));
    assert_eq!(c.power_up_position(), (225, 430));
    assert_eq!(c.player_max_x(), 450);
}

#[test]
fn cooldown_ticks_round_up() {
    let c = GameConfig {
        fire_cooldown_ms: 510,
        ..GameConfig::default()
    };
    assert_eq!(c.fire_cooldown_ticks(), 26);
}

#[test]
fn partial_json_keeps_defaults() {
    let c = GameConfig::from_json(
        r#"{ "initial_health": 100, "restart_target": "Playing", "initial_time": null }"#,
    )
    .unwrap();
    assert_eq!(c.initial_health, 100);
    assert_eq!(c.restart_target, RestartTarget::Playing);
    assert_eq!(c.initial_time, None);
    assert_eq!(c.width, 500);
}

#[test]
fn json_round_trip() {
    let c = GameConfig {
        shield_policy: ShieldPolicy::Reusable,
        ..GameConfig::default()
    };
    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(GameConfig::from_json(&json).unwrap(), c);
}

#[test]
fn malformed_json_is_an_error() {
    assert!(GameConfig::from_json("{ not json").is_err());
    assert!(GameConfig::from_json(r#"{ "width": "wide" }"#).is_err());
}

#[test]
fn invalid_values_rejected() {
    let bad = [
        GameConfig { width: 0, ..GameConfig::default() },
        GameConfig { tick_period_ms: 0, ..GameConfig::default() },
        GameConfig { obstacle_spawn_chance: 1.5, ..GameConfig::default() },
        GameConfig { obstacle_variants: 0, ..GameConfig::default() },
        GameConfig { initial_health: 0, ..GameConfig::default() },
        GameConfig { obstacle_width: 500, ..GameConfig::default() },
    ];
    for c in bad {
        assert!(c.validate().is_err(), "{c:?} should be invalid");
    }
}

#[test]
fn load_missing_file_is_an_error() {
    let path = std::env::temp_dir().join("space_game_no_such_config.json");
    let err = GameConfig::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("reading config"));
}
