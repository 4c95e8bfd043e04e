use crate::sim::SimTime;

#[test]
fn sim_time_unit_conversions() {
    assert_eq!(SimTime::from_minutes(2.0), SimTime(2.0));
    assert_eq!(SimTime::from_seconds(3.0), SimTime(3.0 / 60.0));
    assert_eq!(SimTime::from_seconds(90.0).as_minutes(), 1.5);
}

#[test]
fn sim_time_orders_and_adds_like_minutes() {
    assert!(SimTime(0.2) < SimTime(0.4));
    assert!(SimTime::ZERO <= SimTime(0.0));
    assert_eq!(SimTime(2.0) + SimTime::from_seconds(3.0), SimTime(2.05));
    assert_eq!((SimTime(5.05) - SimTime(3.0)).as_minutes(), 5.05 - 3.0);
    assert_eq!(SimTime(1.5).max(SimTime(0.5)), SimTime(1.5));
}

#[test]
fn sim_time_display_uses_minutes() {
    assert_eq!(SimTime(2.05).to_string(), "2.0500min");
}

#[test]
fn signed_zero_is_one_instant() {
    assert_eq!(SimTime(-0.0), SimTime::ZERO);
    assert!(SimTime(-0.0) >= SimTime::ZERO);
    assert!(SimTime(-1e-9) < SimTime(-0.0));
}
