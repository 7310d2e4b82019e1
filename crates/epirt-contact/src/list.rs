use std::collections::BTreeMap;

use epirt_core::{safe_div, ContactEvent, NetworkId, PersonId};
use serde::{Deserialize, Serialize};

use crate::summary::InfectorSummary;

/// Probability that a contact with `susceptibles` people produces an infection
/// under a population-level transmission rate `tau`.
fn transmission_probability(susceptibles: usize, tau: f64, total_population: usize) -> f64 {
    safe_div(
        susceptibles as f64 * (1.0 - (-tau).exp()),
        total_population as f64,
    )
}

/// Per-network tallies collected while estimating Rt by network.
#[derive(Debug, Default, Clone, Copy)]
struct NetworkTally {
    infectors: usize,
    successful: usize,
    susceptibles: usize,
}

/// All infection attempts recorded on one simulated day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfectorList {
    infectors: BTreeMap<PersonId, InfectorSummary>,
}

impl InfectorList {
    /// Creates an empty day.
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes a contact event to the summary of its infector.
    pub fn record(&mut self, event: &ContactEvent) {
        self.infectors.entry(event.infector).or_default().record(event);
    }

    /// Returns the summary for an infector, if they made contacts this day.
    pub fn infector(&self, infector: PersonId) -> Option<&InfectorSummary> {
        self.infectors.get(&infector)
    }

    /// Iterates over `(infector, summary)` pairs in ascending infector order.
    pub fn iter(&self) -> impl Iterator<Item = (PersonId, &InfectorSummary)> + '_ {
        self.infectors.iter().map(|(id, summary)| (*id, summary))
    }

    /// Number of infectors with at least one contact this day.
    pub fn infector_count(&self) -> usize {
        self.infectors.len()
    }

    /// Number of infectors who infected at least one contact this day.
    pub fn active_infector_count(&self) -> usize {
        self.infectors
            .values()
            .filter(|summary| summary.is_active())
            .count()
    }

    /// Whether no contact events were recorded this day.
    pub fn is_empty(&self) -> bool {
        self.infectors.is_empty()
    }

    /// Infectors bucketed by their total susceptible-contact count.
    ///
    /// Keys are contact counts `m`, values the number of infectors with exactly
    /// `m` contacts summed over their networks.
    pub fn contact_buckets(&self) -> BTreeMap<usize, usize> {
        let mut buckets = BTreeMap::new();
        for summary in self.infectors.values() {
            *buckets.entry(summary.all_susceptible_count()).or_insert(0) += 1;
        }
        buckets
    }

    /// Individual-based Rt for the day across all networks.
    ///
    /// Each bucket of infectors sharing a contact count `m` contributes its
    /// share of the active infectors times the chance that `m` contacts under
    /// rate `tau` yield an infection. Empty days and days without a single
    /// successful infection yield `0.0`.
    pub fn estimate_rt_aggregate(&self, tau: f64, total_population: usize) -> f64 {
        let active = self.active_infector_count() as f64;
        self.contact_buckets()
            .into_iter()
            .map(|(contacts, infectors)| {
                let proportion = safe_div(infectors as f64, active);
                proportion * transmission_probability(contacts, tau, total_population)
            })
            .sum()
    }

    /// Individual-based Rt for the day, computed independently per network.
    ///
    /// Only networks with at least one recorded contact appear in the result.
    pub fn estimate_rt_by_network(
        &self,
        tau: f64,
        total_population: usize,
    ) -> BTreeMap<NetworkId, f64> {
        let mut tallies: BTreeMap<NetworkId, NetworkTally> = BTreeMap::new();
        for summary in self.infectors.values() {
            for (network, tally) in summary.iter() {
                let entry = tallies.entry(network).or_default();
                entry.infectors += 1;
                entry.susceptibles += tally.susceptible_count();
                if tally.has_infection() {
                    entry.successful += 1;
                }
            }
        }
        tallies
            .into_iter()
            .map(|(network, tally)| {
                let proportion = safe_div(tally.successful as f64, tally.infectors as f64);
                let rt = proportion
                    * transmission_probability(tally.susceptibles, tau, total_population);
                (network, rt)
            })
            .collect()
    }
}
