use space_game::resources::ResourceTracker;

#[test]
fn starts_at_initial_values() {
    let r = ResourceTracker::new(5, Some(30));
    assert_eq!(r.score(), 0);
    assert_eq!(r.health(), 5);
    assert_eq!(r.remaining_time(), Some(30));
    assert!(r.has_countdown());
    assert!(!r.is_exhausted());
}

#[test]
fn damage_to_zero_exhausts_immediately() {
    let mut r = ResourceTracker::new(2, None);
    r.apply_damage(1);
    assert!(!r.is_exhausted());
    r.apply_damage(1);
    assert_eq!(r.health(), 0);
    assert!(r.is_exhausted());
}

#[test]
fn overkill_goes_negative_until_settled() {
    let mut r = ResourceTracker::new(1, Some(5));
    r.apply_damage(3);
    assert_eq!(r.health(), -2);
    assert!(r.is_exhausted());
    r.settle();
    assert_eq!(r.health(), 0);
}

#[test]
fn time_running_out_exhausts() {
    let mut r = ResourceTracker::new(5, Some(2));
    r.tick_time();
    assert!(!r.is_exhausted());
    r.tick_time();
    assert_eq!(r.remaining_time(), Some(0));
    assert!(r.is_exhausted());
}

#[test]
fn no_countdown_never_times_out() {
    let mut r = ResourceTracker::new(5, None);
    for _ in 0..100 {
        r.tick_time();
    }
    assert_eq!(r.remaining_time(), None);
    assert!(!r.is_exhausted());
}

#[test]
fn buffs_double() {
    let mut r = ResourceTracker::new(3, Some(7));
    r.apply_health_buff();
    assert_eq!(r.health(), 6);
    assert!(r.apply_time_buff());
    assert_eq!(r.remaining_time(), Some(14));
}

#[test]
fn time_buff_without_countdown_reports_false() {
    let mut r = ResourceTracker::new(3, None);
    assert!(!r.apply_time_buff());
    assert_eq!(r.remaining_time(), None);
}

#[test]
fn score_accumulates_and_saturates() {
    let mut r = ResourceTracker::new(5, None);
    r.add_score(10);
    r.add_score(10);
    assert_eq!(r.score(), 20);
    r.add_score(u32::MAX);
    assert_eq!(r.score(), u32::MAX);
}

#[test]
fn health_buff_saturates() {
    let mut r = ResourceTracker::new(i32::MAX, None);
    r.apply_health_buff();
    assert_eq!(r.health(), i32::MAX);
}

#[test]
fn reset_restores_initial_values() {
    let mut r = ResourceTracker::new(5, Some(30));
    r.add_score(50);
    r.apply_damage(5);
    r.tick_time();
    r.settle();
    r.reset();
    assert_eq!(r.score(), 0);
    assert_eq!(r.health(), 5);
    assert_eq!(r.remaining_time(), Some(30));
    assert!(!r.is_exhausted());
}
