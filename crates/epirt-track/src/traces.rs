use epirt_core::{NetworkCategory, NetworkState};
use serde::{Deserialize, Serialize};

/// Combined transmission multipliers of every network on one day, grouped by
/// network category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiplierSnapshot {
    /// Simulation day, starting at 1.
    pub day: u32,
    /// Household networks.
    pub household: Vec<f64>,
    /// Workplace and school networks.
    pub occupation: Vec<f64>,
    /// Random community networks.
    pub random: Vec<f64>,
    /// Hospital and other networks.
    pub other: Vec<f64>,
}

impl MultiplierSnapshot {
    /// Groups network multipliers by category, keeping the model's order inside
    /// each group.
    pub fn capture<I>(day: u32, networks: I) -> Self
    where
        I: IntoIterator<Item = NetworkState>,
    {
        let mut snapshot = Self {
            day,
            ..Self::default()
        };
        for network in networks {
            let bucket = match network.category {
                NetworkCategory::Household => &mut snapshot.household,
                NetworkCategory::Occupation => &mut snapshot.occupation,
                NetworkCategory::Random => &mut snapshot.random,
                NetworkCategory::Other(_) => &mut snapshot.other,
            };
            bucket.push(network.multiplier);
        }
        snapshot
    }

    /// Total number of networks captured.
    pub fn network_count(&self) -> usize {
        self.household.len() + self.occupation.len() + self.random.len() + self.other.len()
    }
}

/// Per-day multiplier snapshots for a whole run, one per simulated day
/// including day 1.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkTraces {
    /// Snapshots in day order.
    pub days: Vec<MultiplierSnapshot>,
}

impl NetworkTraces {
    /// Appends a snapshot.
    pub fn push(&mut self, snapshot: MultiplierSnapshot) {
        self.days.push(snapshot);
    }

    /// Household multipliers flattened across days.
    pub fn household(&self) -> impl Iterator<Item = f64> + '_ {
        self.days.iter().flat_map(|day| day.household.iter().copied())
    }

    /// Occupation multipliers flattened across days.
    pub fn occupation(&self) -> impl Iterator<Item = f64> + '_ {
        self.days.iter().flat_map(|day| day.occupation.iter().copied())
    }

    /// Random-network multipliers flattened across days.
    pub fn random(&self) -> impl Iterator<Item = f64> + '_ {
        self.days.iter().flat_map(|day| day.random.iter().copied())
    }
}
