//! Read interface onto a running individual-based simulation.

use serde::{Deserialize, Serialize};

use crate::errors::EpiError;
use crate::status::{HealthStatus, NetworkCategory};
use crate::{ContactEvent, NetworkId, PersonId};

/// Name of the instantaneous R series computed by the simulation itself.
pub const INSTANTANEOUS_R_SERIES: &str = "R_inst";

/// Snapshot of one contact network between simulation steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkState {
    /// Network identifier, as used by contact events.
    pub id: NetworkId,
    /// Category code of the network.
    pub category: NetworkCategory,
    /// Current combined transmission multiplier.
    pub multiplier: f64,
}

/// Contract for the simulation engine consumed by the tracker.
///
/// The estimators only ever read through this trait. The single mutating
/// operation, [`EpidemicModel::step`], belongs to the engine; the tracker calls
/// it once per day and never touches population state directly.
pub trait EpidemicModel {
    /// Total configured population count.
    fn population_size(&self) -> usize;

    /// Total configured number of simulated days.
    fn total_days(&self) -> u32;

    /// Returns the current health status of an individual.
    fn status(&self, person: PersonId) -> Result<HealthStatus, EpiError>;

    /// Returns the contact networks and their current multipliers.
    fn networks(&self) -> Box<dyn Iterator<Item = NetworkState> + '_>;

    /// Advances the simulation by exactly one day.
    fn step(&mut self) -> Result<(), EpiError>;

    /// Returns every realised contact event recorded so far.
    fn contact_events(&self) -> &[ContactEvent];

    /// Returns a named per-day series computed by the simulation.
    fn named_series(&self, name: &str) -> Option<&[f64]>;
}

/// Returns the contact events recorded on or after `since` (inclusive).
pub fn events_since(events: &[ContactEvent], since: u32) -> Vec<ContactEvent> {
    events
        .iter()
        .filter(|event| event.day >= since)
        .copied()
        .collect()
}
