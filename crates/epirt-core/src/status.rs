//! Health status and network category enumerations reported by the simulation.

use serde::{Deserialize, Serialize};

/// Current health status of an individual.
///
/// Serialized as the simulation's numeric status code so recorded traces stay
/// compact. Codes the tracker does not classify are preserved in
/// [`HealthStatus::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum HealthStatus {
    /// Never infected.
    Susceptible,
    /// Infected, symptoms not yet shown.
    Presymptomatic,
    /// Infected, mild symptoms expected.
    PresymptomaticMild,
    /// Infectious without symptoms.
    Asymptomatic,
    /// Infectious with symptoms.
    Symptomatic,
    /// Infectious with mild symptoms.
    SymptomaticMild,
    /// Admitted to hospital.
    Hospitalised,
    /// In critical care.
    Critical,
    /// Recovering in hospital.
    HospitalisedRecovering,
    /// Recovered and immune.
    Recovered,
    /// Died.
    Death,
    /// Held in the mortuary.
    Mortuary,
    /// Any other status code.
    Other(u8),
}

impl HealthStatus {
    /// Returns the simulation status code.
    pub fn code(self) -> u8 {
        match self {
            HealthStatus::Susceptible => 0,
            HealthStatus::Presymptomatic => 1,
            HealthStatus::PresymptomaticMild => 2,
            HealthStatus::Asymptomatic => 3,
            HealthStatus::Symptomatic => 4,
            HealthStatus::SymptomaticMild => 5,
            HealthStatus::Hospitalised => 6,
            HealthStatus::Critical => 7,
            HealthStatus::HospitalisedRecovering => 8,
            HealthStatus::Recovered => 9,
            HealthStatus::Death => 10,
            HealthStatus::Mortuary => 21,
            HealthStatus::Other(code) => code,
        }
    }

    /// Builds a status from the simulation status code.
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => HealthStatus::Susceptible,
            1 => HealthStatus::Presymptomatic,
            2 => HealthStatus::PresymptomaticMild,
            3 => HealthStatus::Asymptomatic,
            4 => HealthStatus::Symptomatic,
            5 => HealthStatus::SymptomaticMild,
            6 => HealthStatus::Hospitalised,
            7 => HealthStatus::Critical,
            8 => HealthStatus::HospitalisedRecovering,
            9 => HealthStatus::Recovered,
            10 => HealthStatus::Death,
            21 => HealthStatus::Mortuary,
            other => HealthStatus::Other(other),
        }
    }

    /// Whether the individual can still be infected.
    pub fn is_susceptible(self) -> bool {
        self == HealthStatus::Susceptible
    }

    /// Whether the individual has recovered and is immune.
    pub fn is_immune(self) -> bool {
        self == HealthStatus::Recovered
    }

    /// Whether the individual has left the living population.
    pub fn is_removed(self) -> bool {
        matches!(self, HealthStatus::Death | HealthStatus::Mortuary)
    }

    /// Whether the individual counts towards the host population.
    ///
    /// Recovered individuals are tracked as immune only and do not count as
    /// hosts.
    pub fn is_host(self) -> bool {
        self.is_susceptible() || !(self.is_immune() || self.is_removed())
    }

    /// Whether the individual is currently infectious.
    pub fn is_infectious(self) -> bool {
        matches!(
            self,
            HealthStatus::Asymptomatic | HealthStatus::Symptomatic | HealthStatus::SymptomaticMild
        )
    }
}

impl From<u8> for HealthStatus {
    fn from(code: u8) -> Self {
        HealthStatus::from_code(code)
    }
}

impl From<HealthStatus> for u8 {
    fn from(status: HealthStatus) -> Self {
        status.code()
    }
}

/// Category of a contact network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum NetworkCategory {
    /// Household contacts.
    Household,
    /// Workplace and school contacts.
    Occupation,
    /// Random community contacts.
    Random,
    /// Hospital and any other network types.
    Other(u8),
}

impl NetworkCategory {
    /// Returns the simulation category code.
    pub fn code(self) -> u8 {
        match self {
            NetworkCategory::Household => 0,
            NetworkCategory::Occupation => 1,
            NetworkCategory::Random => 2,
            NetworkCategory::Other(code) => code,
        }
    }
}

impl From<u8> for NetworkCategory {
    fn from(code: u8) -> Self {
        match code {
            0 => NetworkCategory::Household,
            1 => NetworkCategory::Occupation,
            2 => NetworkCategory::Random,
            other => NetworkCategory::Other(other),
        }
    }
}

impl From<NetworkCategory> for u8 {
    fn from(category: NetworkCategory) -> Self {
        category.code()
    }
}
