#![deny(missing_docs)]
#![doc = "Individual-based reproduction-number estimation from replayed contact events."]

/// Per-day collection of infectors and the Rt estimators.
pub mod list;
/// Per-network contact tallies for a single infector.
pub mod network;
/// Replay output with a content addressed hash.
pub mod report;
/// Day-indexed replay of a contact log.
pub mod summariser;
/// Per-infector view across networks.
pub mod summary;
/// Reshaping of per-network estimates into series.
pub mod transpose;

pub use list::InfectorList;
pub use network::InfectorSummaryNetwork;
pub use report::ContactReport;
pub use summariser::InfectorSummariser;
pub use summary::InfectorSummary;
pub use transpose::{network_series, DayRate};
