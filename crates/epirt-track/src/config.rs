use epirt_core::errors::{EpiError, ErrorInfo};
use serde::{Deserialize, Serialize};

/// Options for the windowed generation-interval estimators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerOpts {
    /// Width in days of the short recovery window.
    pub short_window: usize,
    /// Width in days of the long recovery window.
    pub long_window: usize,
}

impl Default for TrackerOpts {
    fn default() -> Self {
        Self {
            short_window: 5,
            long_window: 10,
        }
    }
}

impl TrackerOpts {
    /// Rejects zero-width windows and a short window wider than the long one.
    pub fn validate(&self) -> Result<(), EpiError> {
        if self.short_window == 0 || self.long_window == 0 {
            return Err(EpiError::Config(
                ErrorInfo::new("window-zero", "recovery windows must span at least one day")
                    .with_context("short_window", self.short_window)
                    .with_context("long_window", self.long_window),
            ));
        }
        if self.short_window > self.long_window {
            return Err(EpiError::Config(
                ErrorInfo::new("window-order", "short window exceeds long window")
                    .with_context("short_window", self.short_window)
                    .with_context("long_window", self.long_window)
                    .with_hint("swap the two widths"),
            ));
        }
        Ok(())
    }
}

/// Options for replaying the contact log after a tracked run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayOpts {
    /// First day whose contact events are replayed (inclusive).
    pub since_day: u32,
    /// Transmission rate used instead of the tracker's settled tau.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tau_override: Option<f64>,
}

impl Default for ReplayOpts {
    fn default() -> Self {
        Self {
            since_day: 1,
            tau_override: None,
        }
    }
}

impl ReplayOpts {
    /// Rejects non-finite or negative tau overrides.
    pub fn validate(&self) -> Result<(), EpiError> {
        if let Some(tau) = self.tau_override {
            if !tau.is_finite() || tau < 0.0 {
                return Err(EpiError::Config(
                    ErrorInfo::new("tau-invalid", "tau override must be finite and non-negative")
                        .with_context("tau", tau),
                ));
            }
        }
        Ok(())
    }
}

/// Full configuration of an end-to-end analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Tracker options.
    pub tracker: TrackerOpts,
    /// Replay options.
    pub replay: ReplayOpts,
}

impl AnalysisConfig {
    /// Validates both option groups.
    pub fn validate(&self) -> Result<(), EpiError> {
        self.tracker.validate()?;
        self.replay.validate()
    }
}
