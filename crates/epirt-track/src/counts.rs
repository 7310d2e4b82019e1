use epirt_core::errors::EpiError;
use epirt_core::{EpidemicModel, PersonId};
use serde::{Deserialize, Serialize};

/// Population tallies from one scan of every individual's status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateCounts {
    /// Susceptible individuals.
    pub susceptible: usize,
    /// Living, non-recovered individuals (susceptibles included).
    pub host: usize,
    /// Recovered individuals.
    pub immune: usize,
    /// Asymptomatic, symptomatic and mildly symptomatic individuals.
    pub infectious: usize,
}

impl StateCounts {
    /// Scans the model's whole population once.
    pub fn tabulate<M: EpidemicModel + ?Sized>(model: &M) -> Result<Self, EpiError> {
        let mut counts = Self::default();
        for index in 0..model.population_size() {
            let status = model.status(PersonId::from_raw(index as u64))?;
            if status.is_susceptible() {
                counts.susceptible += 1;
            }
            if status.is_immune() {
                counts.immune += 1;
            }
            if status.is_host() {
                counts.host += 1;
            }
            if status.is_infectious() {
                counts.infectious += 1;
            }
        }
        Ok(counts)
    }
}
