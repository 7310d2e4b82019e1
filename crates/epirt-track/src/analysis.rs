use epirt_contact::ContactReport;
use epirt_core::errors::EpiError;
use epirt_core::{events_since, stable_hash_string, EpidemicModel};
use log::info;
use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::report::TrackerReport;
use crate::tracker::EpidemicStateTracker;

/// Combined output of tracking a run and replaying its contact log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Hash over the configuration and both sub-reports.
    pub report_hash: String,
    /// Configuration the analysis ran with.
    pub config: AnalysisConfig,
    /// Tracker output.
    pub tracker: TrackerReport,
    /// Contact-log replay output.
    pub contact: ContactReport,
}

/// Tracks `model` over its horizon, then replays its contact log.
pub fn analyse<M>(model: &mut M, config: &AnalysisConfig) -> Result<AnalysisReport, EpiError>
where
    M: EpidemicModel + ?Sized,
{
    analyse_with(model, config, |_, _| Ok(()))
}

/// Same as [`analyse`], with a per-day hook forwarded to the tracker.
pub fn analyse_with<M, F>(
    model: &mut M,
    config: &AnalysisConfig,
    hook: F,
) -> Result<AnalysisReport, EpiError>
where
    M: EpidemicModel + ?Sized,
    F: FnMut(&mut M, u32) -> Result<(), EpiError>,
{
    config.validate()?;
    let mut tracker = EpidemicStateTracker::new(config.tracker)?;
    tracker.run_with(model, hook)?;
    let tracker_report = TrackerReport::from_tracker(&tracker)?;

    let events = events_since(model.contact_events(), config.replay.since_day);
    info!(
        "found {} contact events from day {}",
        events.len(),
        config.replay.since_day
    );
    let tau = config
        .replay
        .tau_override
        .unwrap_or(tracker_report.final_tau);
    let contact = ContactReport::build(
        &events,
        model.total_days(),
        model.population_size(),
        tau,
    )?;

    let report_hash = stable_hash_string(&(
        config,
        &tracker_report.report_hash,
        &contact.report_hash,
    ))?;
    Ok(AnalysisReport {
        report_hash,
        config: *config,
        tracker: tracker_report,
        contact,
    })
}
