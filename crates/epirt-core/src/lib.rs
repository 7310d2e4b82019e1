#![deny(missing_docs)]
#![doc = "Core types, the simulation read interface and the shared error surface for epidemic reproduction-number estimation."]

pub mod errors;
mod event;
/// Canonical hashing helpers.
pub mod hash;
mod ids;
pub mod model;
/// Canonical JSON and YAML serde helpers.
pub mod serde;
pub mod status;

pub use errors::{EpiError, ErrorInfo};
pub use event::ContactEvent;
pub use hash::stable_hash_string;
pub use ids::{NetworkId, PersonId};
pub use model::{events_since, EpidemicModel, NetworkState, INSTANTANEOUS_R_SERIES};
pub use status::{HealthStatus, NetworkCategory};

/// Divides two quantities, resolving an empty or non-positive denominator to zero.
///
/// Degenerate ratios (no susceptibles left, nobody infectious, no active
/// infectors) are ordinary epidemic states and report as `0.0`.
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}
