use std::collections::BTreeMap;

use epirt_core::NetworkId;
use serde::{Deserialize, Serialize};

/// Rt estimate for one network on one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayRate {
    /// Simulation day, starting at 1.
    pub day: u32,
    /// Estimated Rt.
    pub rt: f64,
}

/// Reshapes a by-day table into one ordered series per network.
///
/// Days where a network had no activity are skipped rather than zero-filled,
/// so each series holds at most `by_day.len()` points.
pub fn network_series(by_day: &[BTreeMap<NetworkId, f64>]) -> BTreeMap<NetworkId, Vec<DayRate>> {
    let mut series: BTreeMap<NetworkId, Vec<DayRate>> = BTreeMap::new();
    for (index, rates) in by_day.iter().enumerate() {
        for (network, rt) in rates {
            series.entry(*network).or_default().push(DayRate {
                day: index as u32 + 1,
                rt: *rt,
            });
        }
    }
    series
}
