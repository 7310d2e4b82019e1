use std::collections::BTreeMap;

use epirt_core::errors::{EpiError, ErrorInfo};
use epirt_core::serde::from_json_slice;
use epirt_core::{ContactEvent, EpidemicModel, HealthStatus, NetworkState, PersonId};
use serde::{Deserialize, Serialize};

/// Population state recorded at the start of one simulated day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DaySnapshot {
    /// Status of every individual, indexed by person id.
    pub statuses: Vec<HealthStatus>,
    /// Contact networks and their multipliers on that day.
    #[serde(default)]
    pub networks: Vec<NetworkState>,
}

/// A recorded simulation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PopulationTrace {
    /// Declared population size.
    pub population_size: usize,
    /// One snapshot per simulated day, day 1 first.
    pub days: Vec<DaySnapshot>,
    /// Realised contact events over the whole run.
    #[serde(default)]
    pub contact_events: Vec<ContactEvent>,
    /// Named per-day series computed by the simulation.
    #[serde(default)]
    pub series: BTreeMap<String, Vec<f64>>,
}

/// [`EpidemicModel`] that replays a [`PopulationTrace`] one day per step.
#[derive(Debug, Clone)]
pub struct ScriptedModel {
    trace: PopulationTrace,
    current: usize,
}

impl ScriptedModel {
    /// Checks the trace for internal consistency and positions it on day 1.
    ///
    /// Every snapshot must list exactly `population_size` statuses and every
    /// contact event must fall inside the recorded days.
    pub fn new(mut trace: PopulationTrace) -> Result<Self, EpiError> {
        for (index, day) in trace.days.iter().enumerate() {
            if day.statuses.len() != trace.population_size {
                return Err(EpiError::Model(
                    ErrorInfo::new(
                        "population-mismatch",
                        "snapshot status count disagrees with the declared population",
                    )
                    .with_context("day", index + 1)
                    .with_context("expected", trace.population_size)
                    .with_context("found", day.statuses.len()),
                ));
            }
        }
        let total_days = trace.days.len();
        if let Some(event) = trace
            .contact_events
            .iter()
            .find(|event| event.day == 0 || event.day as usize > total_days)
        {
            return Err(EpiError::Model(
                ErrorInfo::new(
                    "event-outside-horizon",
                    "contact event recorded outside the simulated days",
                )
                .with_context("day", event.day)
                .with_context("total_days", total_days)
                .with_hint("check that the trace includes every simulated day"),
            ));
        }
        trace.contact_events.sort_by_key(|event| event.day);
        Ok(Self { trace, current: 0 })
    }

    /// Decodes a JSON trace and validates it.
    pub fn from_json_slice(data: &[u8]) -> Result<Self, EpiError> {
        Self::new(from_json_slice(data)?)
    }

    /// Underlying trace.
    pub fn trace(&self) -> &PopulationTrace {
        &self.trace
    }

    /// Number of steps taken so far.
    pub fn days_elapsed(&self) -> u32 {
        self.current as u32
    }

    fn snapshot(&self) -> Result<&DaySnapshot, EpiError> {
        self.trace.days.get(self.current).ok_or_else(|| {
            EpiError::Model(
                ErrorInfo::new("horizon-exhausted", "no snapshot left to observe")
                    .with_context("day", self.current + 1)
                    .with_context("total_days", self.trace.days.len()),
            )
        })
    }
}

impl EpidemicModel for ScriptedModel {
    fn population_size(&self) -> usize {
        self.trace.population_size
    }

    fn total_days(&self) -> u32 {
        self.trace.days.len() as u32
    }

    fn status(&self, person: PersonId) -> Result<HealthStatus, EpiError> {
        let snapshot = self.snapshot()?;
        snapshot.statuses.get(person.index()).copied().ok_or_else(|| {
            EpiError::Model(
                ErrorInfo::new("person-out-of-range", "no such individual in the population")
                    .with_context("person", person)
                    .with_context("population", self.trace.population_size),
            )
        })
    }

    fn networks(&self) -> Box<dyn Iterator<Item = NetworkState> + '_> {
        match self.trace.days.get(self.current) {
            Some(snapshot) => Box::new(snapshot.networks.iter().cloned()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn step(&mut self) -> Result<(), EpiError> {
        if self.current >= self.trace.days.len() {
            return Err(EpiError::Model(
                ErrorInfo::new("step-past-horizon", "stepped beyond the recorded days")
                    .with_context("total_days", self.trace.days.len()),
            ));
        }
        self.current += 1;
        Ok(())
    }

    /// Events of every day completed so far.
    fn contact_events(&self) -> &[ContactEvent] {
        let completed = self.current as u32;
        let end = self
            .trace
            .contact_events
            .partition_point(|event| event.day <= completed);
        &self.trace.contact_events[..end]
    }

    fn named_series(&self, name: &str) -> Option<&[f64]> {
        self.trace.series.get(name).map(Vec::as_slice)
    }
}
