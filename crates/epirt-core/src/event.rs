use serde::{Deserialize, Serialize};

use crate::ids::{NetworkId, PersonId};

/// One realised contact between an infectious individual and another person.
///
/// Produced once per contact opportunity while the infector was infectious,
/// whether or not transmission happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContactEvent {
    /// The infectious individual.
    #[serde(rename = "infector_id")]
    pub infector: PersonId,
    /// The person contacted.
    #[serde(rename = "contact_id")]
    pub contact: PersonId,
    /// Simulation day of the contact, starting at 1.
    pub day: u32,
    /// Whether the contact resulted in an infection.
    pub infection_caused: bool,
    /// Network the contact happened in.
    #[serde(rename = "network_id")]
    pub network: NetworkId,
}

impl ContactEvent {
    /// Creates a contact event from raw identifiers.
    pub fn new(infector: u64, contact: u64, day: u32, infection_caused: bool, network: u32) -> Self {
        Self {
            infector: PersonId::from_raw(infector),
            contact: PersonId::from_raw(contact),
            day,
            infection_caused,
            network: NetworkId::from_raw(network),
        }
    }
}
