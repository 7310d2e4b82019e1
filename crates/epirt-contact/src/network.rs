use std::collections::BTreeSet;

use epirt_core::{ContactEvent, PersonId};
use serde::{Deserialize, Serialize};

/// Contacts made by one infector within one network on one day.
///
/// Both sets only grow. Every infected contact is also recorded as a
/// susceptible contact, so `infected ⊆ susceptibles` holds after any sequence
/// of [`InfectorSummaryNetwork::record`] calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfectorSummaryNetwork {
    susceptibles: BTreeSet<PersonId>,
    infected: BTreeSet<PersonId>,
}

impl InfectorSummaryNetwork {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a contact event. Replaying the same contact is a no-op.
    pub fn record(&mut self, event: &ContactEvent) {
        self.susceptibles.insert(event.contact);
        if event.infection_caused {
            self.infected.insert(event.contact);
        }
    }

    /// Number of distinct contacts encountered.
    pub fn susceptible_count(&self) -> usize {
        self.susceptibles.len()
    }

    /// Number of distinct contacts infected.
    pub fn infected_count(&self) -> usize {
        self.infected.len()
    }

    /// Whether at least one contact was infected.
    pub fn has_infection(&self) -> bool {
        !self.infected.is_empty()
    }

    /// Distinct contacts encountered.
    pub fn susceptibles(&self) -> &BTreeSet<PersonId> {
        &self.susceptibles
    }

    /// Distinct contacts infected.
    pub fn infected(&self) -> &BTreeSet<PersonId> {
        &self.infected
    }
}
