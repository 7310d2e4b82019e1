use std::collections::BTreeMap;

use epirt_core::errors::{EpiError, ErrorInfo};
use epirt_core::{ContactEvent, NetworkId};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::list::InfectorList;

/// Owns one [`InfectorList`] per simulated day and replays contact events
/// into them.
///
/// Built once the run is over and the horizon is known, filled by a single
/// pass over the contact log, then only read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfectorSummariser {
    days: Vec<InfectorList>,
    total_population: usize,
}

impl InfectorSummariser {
    /// Allocates `total_days` empty days for a population of `total_population`.
    pub fn new(total_days: u32, total_population: usize) -> Self {
        Self {
            days: vec![InfectorList::new(); total_days as usize],
            total_population,
        }
    }

    /// Number of simulated days covered.
    pub fn total_days(&self) -> u32 {
        self.days.len() as u32
    }

    /// Population size used to normalise transmission probabilities.
    pub fn total_population(&self) -> usize {
        self.total_population
    }

    /// Returns the infection attempts for a 1-based day.
    pub fn day(&self, day: u32) -> Option<&InfectorList> {
        let index = (day as usize).checked_sub(1)?;
        self.days.get(index)
    }

    /// Routes a contact event to the list for its day.
    ///
    /// A day outside `1..=total_days` means the caller's horizon is wrong and
    /// is rejected without touching any tally.
    pub fn add_record(&mut self, event: &ContactEvent) -> Result<(), EpiError> {
        let total_days = self.days.len();
        let slot = (event.day as usize)
            .checked_sub(1)
            .and_then(|index| self.days.get_mut(index));
        match slot {
            Some(list) => {
                list.record(event);
                Ok(())
            }
            None => Err(EpiError::Replay(
                ErrorInfo::new(
                    "day-out-of-range",
                    "contact event lies outside the simulated horizon",
                )
                .with_context("day", event.day)
                .with_context("total_days", total_days)
                .with_context("infector", event.infector),
            )),
        }
    }

    /// Replays a full contact log, stopping at the first out-of-range event.
    ///
    /// Returns the number of events recorded.
    pub fn add_records<'a, I>(&mut self, events: I) -> Result<usize, EpiError>
    where
        I: IntoIterator<Item = &'a ContactEvent>,
    {
        let mut count = 0usize;
        for event in events {
            self.add_record(event)?;
            count += 1;
        }
        info!(
            "replayed {count} contact events over {} days",
            self.days.len()
        );
        Ok(count)
    }

    /// Aggregate Rt per day, in day order.
    pub fn rates_aggregate(&self, tau: f64) -> Vec<f64> {
        self.days
            .iter()
            .enumerate()
            .map(|(index, list)| {
                let rt = list.estimate_rt_aggregate(tau, self.total_population);
                debug!("day {}: {} infectors, rt {rt:.6}", index + 1, list.infector_count());
                rt
            })
            .collect()
    }

    /// Per-network Rt per day, in day order.
    pub fn rates_by_network(&self, tau: f64) -> Vec<BTreeMap<NetworkId, f64>> {
        self.days
            .iter()
            .map(|list| list.estimate_rt_by_network(tau, self.total_population))
            .collect()
    }
}
