use epirt_core::errors::EpiError;
use epirt_core::stable_hash_string;
use serde::{Deserialize, Serialize};

use crate::config::TrackerOpts;
use crate::tracker::{DailySeries, EpidemicStateTracker};
use crate::traces::NetworkTraces;

/// Output of a tracked run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerReport {
    /// Content addressed hash over every other field.
    pub report_hash: String,
    /// Population size of the run.
    pub population_size: usize,
    /// Simulated days, day 1 included.
    pub total_days: u32,
    /// Options the tracker ran with.
    pub opts: TrackerOpts,
    /// Last value of the tau series.
    pub final_tau: f64,
    /// Per-day estimator panel.
    pub series: DailySeries,
    /// Network multiplier traces.
    pub traces: NetworkTraces,
}

impl TrackerReport {
    /// Snapshots a tracker's state after a run.
    pub fn from_tracker(tracker: &EpidemicStateTracker) -> Result<Self, EpiError> {
        let mut report = Self {
            report_hash: String::new(),
            population_size: tracker.population(),
            total_days: tracker.total_days(),
            opts: *tracker.opts(),
            final_tau: tracker.final_tau(),
            series: tracker.series().clone(),
            traces: tracker.traces().clone(),
        };
        report.report_hash = stable_hash_string(&(
            report.population_size,
            report.total_days,
            &report.opts,
            report.final_tau,
            &report.series,
            &report.traces,
        ))?;
        Ok(report)
    }
}
