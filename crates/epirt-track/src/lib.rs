#![deny(missing_docs)]
#![doc = "Day-by-day tracking of an epidemic model and end-to-end reproduction-number analysis."]

/// End-to-end analysis: track, then replay the contact log.
pub mod analysis;
/// Tracker and replay options.
pub mod config;
/// Population status tallies.
pub mod counts;
/// Tracker report with a content addressed hash.
pub mod report;
/// Model implementation over a recorded trace.
pub mod scripted;
/// Network multiplier traces.
pub mod traces;
/// The day-by-day estimator.
pub mod tracker;

pub use analysis::{analyse, analyse_with, AnalysisReport};
pub use config::{AnalysisConfig, ReplayOpts, TrackerOpts};
pub use counts::StateCounts;
pub use report::TrackerReport;
pub use scripted::{DaySnapshot, PopulationTrace, ScriptedModel};
pub use traces::{MultiplierSnapshot, NetworkTraces};
pub use tracker::{DailySeries, EpidemicStateTracker};
