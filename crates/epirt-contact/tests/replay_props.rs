use epirt_contact::{ContactReport, InfectorSummariser};
use epirt_core::ContactEvent;
use proptest::prelude::*;

const DAYS: u32 = 6;

fn event_strategy() -> impl Strategy<Value = ContactEvent> {
    (0u64..8, 0u64..40, 1u32..=DAYS, any::<bool>(), 0u32..4).prop_map(
        |(infector, contact, day, infected, network)| {
            ContactEvent::new(infector, contact, day, infected, network)
        },
    )
}

proptest! {
    #[test]
    fn infected_contacts_are_always_susceptible_contacts(
        events in prop::collection::vec(event_strategy(), 0..120)
    ) {
        let mut summariser = InfectorSummariser::new(DAYS, 1_000);
        summariser.add_records(&events).unwrap();
        for day in 1..=DAYS {
            let list = summariser.day(day).unwrap();
            for (_, summary) in list.iter() {
                for (_, tally) in summary.iter() {
                    prop_assert!(tally.infected().is_subset(tally.susceptibles()));
                    prop_assert!(tally.infected_count() <= tally.susceptible_count());
                }
                prop_assert!(summary.all_infected_count() <= summary.all_susceptible_count());
            }
        }
    }

    #[test]
    fn replaying_twice_changes_nothing(
        events in prop::collection::vec(event_strategy(), 0..120),
        tau in 0.0f64..3.0,
    ) {
        let mut once = InfectorSummariser::new(DAYS, 1_000);
        once.add_records(&events).unwrap();
        let mut twice = once.clone();
        twice.add_records(&events).unwrap();
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once.rates_aggregate(tau), twice.rates_aggregate(tau));
    }

    #[test]
    fn rates_are_finite_and_non_negative(
        events in prop::collection::vec(event_strategy(), 0..120),
        tau in 0.0f64..5.0,
        population in 0usize..5_000,
    ) {
        let report = ContactReport::build(&events, DAYS, population, tau).unwrap();
        prop_assert_eq!(report.rt_aggregate.len(), DAYS as usize);
        prop_assert_eq!(report.rt_by_network.len(), DAYS as usize);
        for rt in &report.rt_aggregate {
            prop_assert!(rt.is_finite() && *rt >= 0.0);
        }
        for rates in &report.rt_by_network {
            for rt in rates.values() {
                prop_assert!(rt.is_finite() && *rt >= 0.0);
            }
        }
    }

    #[test]
    fn silent_days_report_zero_and_no_networks(
        events in prop::collection::vec(event_strategy(), 0..60),
        tau in 0.0f64..3.0,
    ) {
        let mut summariser = InfectorSummariser::new(DAYS, 500);
        summariser.add_records(&events).unwrap();
        let aggregate = summariser.rates_aggregate(tau);
        let by_network = summariser.rates_by_network(tau);
        for day in 1..=DAYS {
            if events.iter().all(|event| event.day != day) {
                let index = (day - 1) as usize;
                prop_assert_eq!(aggregate[index], 0.0);
                prop_assert!(by_network[index].is_empty());
            }
        }
    }

    #[test]
    fn event_order_does_not_matter(
        events in prop::collection::vec(event_strategy(), 0..80),
        tau in 0.0f64..3.0,
    ) {
        let forward = ContactReport::build(&events, DAYS, 2_000, tau).unwrap();
        let mut reversed = events.clone();
        reversed.reverse();
        let backward = ContactReport::build(&reversed, DAYS, 2_000, tau).unwrap();
        prop_assert_eq!(forward.report_hash, backward.report_hash);
    }
}
