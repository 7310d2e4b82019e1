use std::collections::BTreeMap;

use epirt_core::{ContactEvent, NetworkId};
use serde::{Deserialize, Serialize};

use crate::network::InfectorSummaryNetwork;

/// Contacts made by one infector on one day, split by network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfectorSummary {
    networks: BTreeMap<NetworkId, InfectorSummaryNetwork>,
}

impl InfectorSummary {
    /// Creates an empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes a contact event to the tally of its network.
    pub fn record(&mut self, event: &ContactEvent) {
        self.networks.entry(event.network).or_default().record(event);
    }

    /// Networks this infector made contacts in, in ascending order.
    pub fn network_ids(&self) -> impl Iterator<Item = NetworkId> + '_ {
        self.networks.keys().copied()
    }

    /// Returns the tally for a network, if the infector was active there.
    pub fn network(&self, network: NetworkId) -> Option<&InfectorSummaryNetwork> {
        self.networks.get(&network)
    }

    /// Iterates over `(network, tally)` pairs in ascending network order.
    pub fn iter(&self) -> impl Iterator<Item = (NetworkId, &InfectorSummaryNetwork)> + '_ {
        self.networks.iter().map(|(id, tally)| (*id, tally))
    }

    /// Distinct contacts in one network (0 if the network is absent).
    pub fn susceptible_count(&self, network: NetworkId) -> usize {
        self.network(network)
            .map_or(0, InfectorSummaryNetwork::susceptible_count)
    }

    /// Distinct infections in one network (0 if the network is absent).
    pub fn infected_count(&self, network: NetworkId) -> usize {
        self.network(network)
            .map_or(0, InfectorSummaryNetwork::infected_count)
    }

    /// Susceptible contacts summed across all networks.
    pub fn all_susceptible_count(&self) -> usize {
        self.networks
            .values()
            .map(InfectorSummaryNetwork::susceptible_count)
            .sum()
    }

    /// Infections summed across all networks.
    pub fn all_infected_count(&self) -> usize {
        self.networks
            .values()
            .map(InfectorSummaryNetwork::infected_count)
            .sum()
    }

    /// Whether this infector infected anybody in any network.
    pub fn is_active(&self) -> bool {
        self.networks.values().any(InfectorSummaryNetwork::has_infection)
    }
}
