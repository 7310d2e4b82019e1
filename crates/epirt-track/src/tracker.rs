use epirt_core::errors::EpiError;
use epirt_core::{safe_div, EpidemicModel, INSTANTANEOUS_R_SERIES};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::config::TrackerOpts;
use crate::counts::StateCounts;
use crate::traces::{MultiplierSnapshot, NetworkTraces};

/// Per-day estimator panel, indexed from simulation day 2.
///
/// Every vector except `r_inst` has one entry per tracked day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailySeries {
    /// Susceptible individuals.
    pub susceptible: Vec<usize>,
    /// Living, non-recovered individuals.
    pub host: Vec<usize>,
    /// Recovered individuals.
    pub immune: Vec<usize>,
    /// Currently infectious individuals.
    pub infectious: Vec<usize>,
    /// Naive R0, hosts over susceptibles.
    pub r0: Vec<f64>,
    /// Change in the immune count since the previous tracked day.
    pub newly_recovered: Vec<i64>,
    /// Today's recoveries over today's infectious count.
    pub g_instant: Vec<f64>,
    /// All earlier recoveries over all earlier infectious counts.
    pub g_cumulative: Vec<f64>,
    /// Recovery ratio over the long window.
    pub g_long: Vec<f64>,
    /// Recovery ratio over the short window.
    pub g_short: Vec<f64>,
    /// Transmission rate scaled by population size.
    pub tau: Vec<f64>,
    /// R0 corrected through the per-capita transmission rate.
    pub r0_fixed: Vec<f64>,
    /// Trailing instantaneous R reported by the simulation itself.
    pub r_inst: Vec<f64>,
}

impl DailySeries {
    /// Number of tracked days.
    pub fn len(&self) -> usize {
        self.susceptible.len()
    }

    /// Whether no day has been tracked.
    pub fn is_empty(&self) -> bool {
        self.susceptible.is_empty()
    }

    /// Recoveries over infectious counts for tracked indices `start..end`.
    fn recovery_ratio(&self, start: usize, end: usize) -> f64 {
        let recovered: i64 = self.newly_recovered[start..end].iter().sum();
        let infectious: usize = self.infectious[start..end].iter().sum();
        safe_div(recovered as f64, infectious as f64)
    }
}

/// Drives a model one day at a time and derives the estimator panel from
/// each day's population state.
#[derive(Debug, Clone)]
pub struct EpidemicStateTracker {
    opts: TrackerOpts,
    series: DailySeries,
    traces: NetworkTraces,
    population: usize,
    total_days: u32,
    last_immune: usize,
}

impl EpidemicStateTracker {
    /// Creates a tracker after validating its options.
    pub fn new(opts: TrackerOpts) -> Result<Self, EpiError> {
        opts.validate()?;
        Ok(Self {
            opts,
            series: DailySeries::default(),
            traces: NetworkTraces::default(),
            population: 0,
            total_days: 0,
            last_immune: 0,
        })
    }

    /// Creates a tracker that scales tau by `population` when days are fed
    /// through [`record_day`](Self::record_day) directly.
    ///
    /// [`run`](Self::run) replaces the population with the model's.
    pub fn with_population(opts: TrackerOpts, population: usize) -> Result<Self, EpiError> {
        let mut tracker = Self::new(opts)?;
        tracker.population = population;
        Ok(tracker)
    }

    /// Options in use.
    pub fn opts(&self) -> &TrackerOpts {
        &self.opts
    }

    /// Series tracked so far.
    pub fn series(&self) -> &DailySeries {
        &self.series
    }

    /// Network multiplier traces captured so far.
    pub fn traces(&self) -> &NetworkTraces {
        &self.traces
    }

    /// Population size of the last run.
    pub fn population(&self) -> usize {
        self.population
    }

    /// Day count of the last run.
    pub fn total_days(&self) -> u32 {
        self.total_days
    }

    /// Last value of the tau series, or `0.0` if no tau settled.
    pub fn final_tau(&self) -> f64 {
        self.series.tau.last().copied().unwrap_or(0.0)
    }

    /// Runs the model over its full horizon.
    pub fn run<M>(&mut self, model: &mut M) -> Result<(), EpiError>
    where
        M: EpidemicModel + ?Sized,
    {
        self.run_with(model, |_, _| Ok(()))
    }

    /// Runs the model over its full horizon, calling `hook` at the start of
    /// every day before anything is observed.
    ///
    /// The hook may change model parameters (interventions); its errors abort
    /// the run.
    pub fn run_with<M, F>(&mut self, model: &mut M, mut hook: F) -> Result<(), EpiError>
    where
        M: EpidemicModel + ?Sized,
        F: FnMut(&mut M, u32) -> Result<(), EpiError>,
    {
        self.reset();
        self.population = model.population_size();
        self.total_days = model.total_days();

        for day in 1..=self.total_days {
            hook(&mut *model, day)?;
            self.traces
                .push(MultiplierSnapshot::capture(day, model.networks()));
            let counts = StateCounts::tabulate(&*model)?;
            self.record_day(day, counts);
            model.step()?;
        }

        let keep = (self.total_days as usize).saturating_sub(1);
        match model.named_series(INSTANTANEOUS_R_SERIES) {
            Some(values) => {
                let start = values.len().saturating_sub(keep);
                self.series.r_inst = values[start..].to_vec();
            }
            None => debug!("model reports no {INSTANTANEOUS_R_SERIES} series"),
        }

        if self.series.tau.is_empty() {
            warn!(
                "no tau settled over {} days, final tau defaults to 0",
                self.total_days
            );
        }
        info!(
            "tracked {} days over population {}, final tau {:.6}",
            self.series.len(),
            self.population,
            self.final_tau()
        );
        Ok(())
    }

    /// Folds one day's population counts into the series.
    ///
    /// Day 1 has no earlier state to compare against and emits nothing; the
    /// return value tells whether a row was appended. Tau is scaled by the
    /// tracker's population.
    pub fn record_day(&mut self, day: u32, counts: StateCounts) -> bool {
        if day <= 1 {
            return false;
        }
        let index = self.series.len();
        let series = &mut self.series;

        series.susceptible.push(counts.susceptible);
        series.host.push(counts.host);
        series.immune.push(counts.immune);
        series.infectious.push(counts.infectious);

        let r0 = safe_div(counts.host as f64, counts.susceptible as f64);
        series.r0.push(r0);

        let newly_recovered = if index > 0 {
            counts.immune as i64 - self.last_immune as i64
        } else {
            counts.immune as i64
        };
        series.newly_recovered.push(newly_recovered);
        series
            .g_instant
            .push(safe_div(newly_recovered as f64, counts.infectious as f64));

        let prior_infectious: usize = series.infectious[..index].iter().sum();
        if index > 0 && prior_infectious > 0 {
            let g = series.recovery_ratio(0, index);
            series.g_cumulative.push(g);

            let susceptible = counts.susceptible as f64;
            let denom = if counts.susceptible > 0 {
                susceptible - r0
            } else {
                susceptible
            };
            if denom > 0.0 {
                let tau = r0 * g / denom;
                series.tau.push(self.population as f64 * tau);
                series.r0_fixed.push(if g > 0.0 {
                    susceptible * (1.0 - (-tau / g).exp())
                } else {
                    0.0
                });
            } else {
                series.tau.push(0.0);
                series.r0_fixed.push(0.0);
            }
        } else {
            series.g_cumulative.push(0.0);
            series.tau.push(0.0);
            series.r0_fixed.push(0.0);
        }

        let long = self.opts.long_window;
        let g_long = if index > long {
            series.recovery_ratio(index - long, index)
        } else {
            0.0
        };
        series.g_long.push(g_long);

        let short = self.opts.short_window;
        let g_short = if index > short {
            series.recovery_ratio(index - short, index)
        } else {
            0.0
        };
        series.g_short.push(g_short);

        self.last_immune = counts.immune;

        debug!(
            "day {day}: S={} N={} I={} R={} r0={r0:.4} tau={:.6}",
            counts.susceptible,
            counts.host,
            counts.infectious,
            counts.immune,
            series.tau[index]
        );
        true
    }

    fn reset(&mut self) {
        self.series = DailySeries::default();
        self.traces = NetworkTraces::default();
        self.last_immune = 0;
    }
}
