use std::collections::BTreeMap;

use epirt_core::errors::EpiError;
use epirt_core::{stable_hash_string, ContactEvent, NetworkId};
use serde::{Deserialize, Serialize};

use crate::summariser::InfectorSummariser;
use crate::transpose::{network_series, DayRate};

/// Output of a contact-log replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactReport {
    /// Content addressed hash over every other field.
    pub report_hash: String,
    /// Simulated horizon the events were replayed into.
    pub total_days: u32,
    /// Population used to normalise transmission probabilities.
    pub total_population: usize,
    /// Transmission rate the estimates were computed with.
    pub tau: f64,
    /// Number of events replayed.
    pub event_count: usize,
    /// Aggregate Rt, one entry per day starting at day 1.
    pub rt_aggregate: Vec<f64>,
    /// Per-network Rt, one map per day starting at day 1.
    pub rt_by_network: Vec<BTreeMap<NetworkId, f64>>,
    /// Per-network Rt reshaped into one series per network.
    pub network_series: BTreeMap<NetworkId, Vec<DayRate>>,
}

impl ContactReport {
    /// Replays `events` into a fresh summariser and evaluates both estimators.
    pub fn build(
        events: &[ContactEvent],
        total_days: u32,
        total_population: usize,
        tau: f64,
    ) -> Result<Self, EpiError> {
        let mut summariser = InfectorSummariser::new(total_days, total_population);
        let event_count = summariser.add_records(events)?;
        Self::from_summariser(&summariser, event_count, tau)
    }

    /// Evaluates both estimators over an already populated summariser.
    pub fn from_summariser(
        summariser: &InfectorSummariser,
        event_count: usize,
        tau: f64,
    ) -> Result<Self, EpiError> {
        let rt_aggregate = summariser.rates_aggregate(tau);
        let rt_by_network = summariser.rates_by_network(tau);
        let network_series = network_series(&rt_by_network);

        let mut report = Self {
            report_hash: String::new(),
            total_days: summariser.total_days(),
            total_population: summariser.total_population(),
            tau,
            event_count,
            rt_aggregate,
            rt_by_network,
            network_series,
        };
        report.report_hash = stable_hash_string(&(
            report.total_days,
            report.total_population,
            report.tau,
            report.event_count,
            &report.rt_aggregate,
            &report.rt_by_network,
        ))?;
        Ok(report)
    }
}
