use epirt_core::HealthStatus;
use epirt_track::{DaySnapshot, EpidemicStateTracker, PopulationTrace, ScriptedModel, TrackerOpts};
use proptest::prelude::*;

const STATUS_CODES: [u8; 13] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 21, 14];

fn trace_strategy() -> impl Strategy<Value = PopulationTrace> {
    (1usize..12, 0usize..20).prop_flat_map(|(population, days)| {
        prop::collection::vec(
            prop::collection::vec(prop::sample::select(STATUS_CODES.to_vec()), population),
            days,
        )
        .prop_map(move |days| PopulationTrace {
            population_size: population,
            days: days
                .into_iter()
                .map(|codes| DaySnapshot {
                    statuses: codes.into_iter().map(HealthStatus::from_code).collect(),
                    networks: Vec::new(),
                })
                .collect(),
            ..PopulationTrace::default()
        })
    })
}

proptest! {
    #[test]
    fn every_series_has_one_entry_per_tracked_day(trace in trace_strategy()) {
        let days = trace.days.len();
        let mut model = ScriptedModel::new(trace).unwrap();
        let mut tracker = EpidemicStateTracker::new(TrackerOpts::default()).unwrap();
        tracker.run(&mut model).unwrap();

        let series = tracker.series();
        let tracked = days.saturating_sub(1);
        prop_assert_eq!(series.len(), tracked);
        for column in [
            &series.r0,
            &series.g_instant,
            &series.g_cumulative,
            &series.g_long,
            &series.g_short,
            &series.tau,
            &series.r0_fixed,
        ] {
            prop_assert_eq!(column.len(), tracked);
            prop_assert!(column.iter().all(|value| value.is_finite()));
        }
        for index in 0..tracked {
            prop_assert!(series.susceptible[index] <= series.host[index]);
            prop_assert!(series.host[index] + series.immune[index] <= model.trace().population_size);
        }
        prop_assert!(tracker.final_tau().is_finite());
    }

    #[test]
    fn tracking_is_deterministic(trace in trace_strategy()) {
        let mut first = EpidemicStateTracker::new(TrackerOpts::default()).unwrap();
        first.run(&mut ScriptedModel::new(trace.clone()).unwrap()).unwrap();
        let mut second = EpidemicStateTracker::new(TrackerOpts::default()).unwrap();
        second.run(&mut ScriptedModel::new(trace).unwrap()).unwrap();
        prop_assert_eq!(first.series(), second.series());
    }
}
