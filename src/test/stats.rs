use crate::sim::SimTime;
use crate::theater::{TheaterError, WaitSample, WaitStats, WaitSummary};

fn sample(customer: u64, wait: f64) -> WaitSample {
    WaitSample {
        customer,
        seated_at: SimTime(wait),
        wait,
    }
}

#[test]
fn summarize_without_samples_is_an_error() {
    let stats = WaitStats::default();
    assert!(stats.mean().is_none());
    assert!(matches!(
        stats.summarize(),
        Err(TheaterError::NoCompletedJourneys)
    ));
}

#[test]
fn summarize_splits_mean_into_minutes_and_seconds() {
    let mut stats = WaitStats::default();
    stats.record(sample(0, 2.0));
    stats.record(sample(1, 3.0));

    assert_eq!(stats.mean(), Some(2.5));
    let summary = stats.summarize().expect("summary");
    assert_eq!(summary, WaitSummary { minutes: 2, seconds: 30 });
    assert_eq!(summary.to_string(), "2 minutes and 30 seconds");
}

#[test]
fn summarize_is_idempotent() {
    let mut stats = WaitStats::default();
    stats.record(sample(0, 2.05));
    stats.record(sample(1, 5.05));
    stats.record(sample(2, 7.05));

    let first = stats.summarize().expect("summary");
    let second = stats.summarize().expect("summary");
    assert_eq!(first, second);
    assert_eq!(stats.len(), 3);
}

#[test]
fn seconds_round_half_to_even() {
    // 0.125 * 60 = 7.5, 0.375 * 60 = 22.5
    assert_eq!(WaitSummary::from_mean(3.125), WaitSummary { minutes: 3, seconds: 8 });
    assert_eq!(WaitSummary::from_mean(3.375), WaitSummary { minutes: 3, seconds: 22 });
    assert_eq!(WaitSummary::from_mean(0.0), WaitSummary { minutes: 0, seconds: 0 });
}

#[test]
fn samples_keep_completion_order() {
    let mut stats = WaitStats::default();
    stats.record(sample(4, 1.0));
    stats.record(sample(2, 9.0));

    let ids: Vec<u64> = stats.samples().iter().map(|s| s.customer).collect();
    assert_eq!(ids, vec![4, 2]);
}
