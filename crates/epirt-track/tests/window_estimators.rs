use epirt_track::{EpidemicStateTracker, StateCounts, TrackerOpts};

fn steady(immune: usize) -> StateCounts {
    StateCounts {
        susceptible: 50,
        host: 60,
        immune,
        infectious: 4,
    }
}

/// Feeds `days` tracked days where two people recover each day.
fn tracker_with(opts: TrackerOpts, days: u32) -> EpidemicStateTracker {
    let mut tracker = EpidemicStateTracker::with_population(opts, 100).expect("opts");
    assert!(!tracker.record_day(1, steady(0)));
    for day in 2..=days + 1 {
        let immune = 2 * (day as usize - 1);
        assert!(tracker.record_day(day, steady(immune)));
    }
    tracker
}

#[test]
fn long_window_needs_more_than_ten_earlier_days() {
    let tracker = tracker_with(TrackerOpts::default(), 14);
    let g_long = &tracker.series().g_long;
    assert_eq!(g_long.len(), 14);
    // tracked index 10 is simulation day 12, the last day without a full window
    assert!(g_long[..=10].iter().all(|g| *g == 0.0));
    for g in &g_long[11..] {
        assert!((g - 0.5).abs() < 1e-12, "g_long {g}");
    }
}

#[test]
fn short_window_needs_more_than_five_earlier_days() {
    let tracker = tracker_with(TrackerOpts::default(), 9);
    let g_short = &tracker.series().g_short;
    assert!(g_short[..=5].iter().all(|g| *g == 0.0));
    for g in &g_short[6..] {
        assert!((g - 0.5).abs() < 1e-12, "g_short {g}");
    }
}

#[test]
fn window_widths_follow_options() {
    let opts = TrackerOpts {
        short_window: 2,
        long_window: 3,
    };
    let tracker = tracker_with(opts, 6);
    let series = tracker.series();
    assert_eq!(series.g_short[2], 0.0);
    assert!(series.g_short[3] > 0.0);
    assert_eq!(series.g_long[3], 0.0);
    assert!(series.g_long[4] > 0.0);
}

#[test]
fn first_tracked_day_counts_all_immune_as_new() {
    let mut tracker =
        EpidemicStateTracker::with_population(TrackerOpts::default(), 100).expect("opts");
    tracker.record_day(2, steady(7));
    tracker.record_day(3, steady(5));
    assert_eq!(tracker.series().newly_recovered, vec![7, -2]);
}

#[test]
fn no_susceptibles_keeps_estimates_at_zero() {
    let mut tracker =
        EpidemicStateTracker::with_population(TrackerOpts::default(), 100).expect("opts");
    let exhausted = StateCounts {
        susceptible: 0,
        host: 5,
        immune: 3,
        infectious: 5,
    };
    for day in 2..=4 {
        tracker.record_day(day, exhausted);
    }
    let series = tracker.series();
    assert!(series.r0.iter().all(|r| *r == 0.0));
    assert!(series.tau.iter().all(|t| *t == 0.0));
    assert!(series.r0_fixed.iter().all(|r| *r == 0.0));
    assert!(series
        .g_cumulative
        .iter()
        .chain(&series.g_instant)
        .all(|g| g.is_finite()));
}

#[test]
fn hosts_outnumbering_susceptibles_leave_tau_at_zero() {
    let mut tracker =
        EpidemicStateTracker::with_population(TrackerOpts::default(), 100).expect("opts");
    for day in 2..=5 {
        let crowded = StateCounts {
            susceptible: 1,
            host: 5,
            immune: 2 * (day as usize - 1),
            infectious: 3,
        };
        tracker.record_day(day, crowded);
    }
    let series = tracker.series();
    assert_eq!(series.r0, vec![5.0; 4]);
    assert!(series.g_cumulative[1..].iter().all(|g| *g > 0.0));
    assert_eq!(series.tau, vec![0.0; 4]);
    assert_eq!(series.r0_fixed, vec![0.0; 4]);

    tracker.record_day(
        6,
        StateCounts {
            susceptible: 1,
            host: 5,
            immune: 11,
            infectious: 0,
        },
    );
    let series = tracker.series();
    assert_eq!(series.newly_recovered[4], 3);
    assert_eq!(series.g_instant[4], 0.0);
    assert!(series.g_instant[0] > 0.0);
}

#[test]
fn tau_scales_with_tracker_population() {
    let small = tracker_with_population(100);
    let large = tracker_with_population(200);
    assert_eq!(small.population(), 100);
    let (small_tau, large_tau) = (small.final_tau(), large.final_tau());
    assert!(small_tau > 0.0);
    assert!((large_tau - 2.0 * small_tau).abs() < 1e-12, "{large_tau} vs {small_tau}");
}

fn tracker_with_population(population: usize) -> EpidemicStateTracker {
    let mut tracker =
        EpidemicStateTracker::with_population(TrackerOpts::default(), population).expect("opts");
    for day in 2..=6 {
        tracker.record_day(day, steady(2 * (day as usize - 1)));
    }
    tracker
}
