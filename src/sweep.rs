//! Sweep layer - uniform sampling of the field for plotting harnesses
//!
//! The kernel itself answers one point at a time. Consumers that draw the
//! field (or feed it to an external analysis) want a whole range of `t`
//! across one or more channels. This module does exactly that sampling and
//! nothing more; what a caller concludes from the samples is their business.
//!
//! Every call is independent, so multi-channel sweeps fan out across a rayon
//! pool with no coordination.

use crate::error::{FieldError, FieldResult};
use crate::kernel::phase_intensity;
use rayon::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a uniform time sweep.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SweepConfig {
    /// First sampled time coordinate (inclusive).
    pub t_start: f64,

    /// Last sampled time coordinate (inclusive).
    pub t_end: f64,

    /// Number of samples across the span.
    pub samples: usize,
}

impl SweepConfig {
    /// Create a sweep over `[t_start, t_end]` with `samples` points.
    pub fn new(t_start: f64, t_end: f64, samples: usize) -> Self {
        Self {
            t_start,
            t_end,
            samples,
        }
    }

    /// Width of the swept interval.
    pub fn span(&self) -> f64 {
        self.t_end - self.t_start
    }

    /// Spacing between consecutive samples.
    pub fn step(&self) -> f64 {
        self.span() / self.samples.saturating_sub(1) as f64
    }

    /// Validate the configuration.
    pub fn validate(&self) -> FieldResult<()> {
        if !self.t_start.is_finite() {
            return Err(FieldError::NonFiniteTime(self.t_start));
        }
        if !self.t_end.is_finite() {
            return Err(FieldError::NonFiniteTime(self.t_end));
        }
        if self.t_end <= self.t_start {
            return Err(FieldError::InvalidSweep("t_end must be > t_start"));
        }
        if self.samples < 2 {
            return Err(FieldError::InvalidSweep("samples must be >= 2"));
        }
        Ok(())
    }

    /// The sampled time coordinates, endpoints included.
    pub fn sample_times(&self) -> Vec<f64> {
        let step = self.step();
        (0..self.samples)
            .map(|i| self.t_start + i as f64 * step)
            .collect()
    }
}

/// Sample one channel across the configured span.
pub fn sweep_channel(config: &SweepConfig, channel: i64) -> FieldResult<Vec<f64>> {
    config.validate()?;
    config
        .sample_times()
        .into_iter()
        .map(|t| phase_intensity(t, channel))
        .collect()
}

/// Sample several channels across the configured span, one rayon task per
/// channel.
pub fn sweep_grid(config: &SweepConfig, channels: &[i64]) -> FieldResult<IntensityGrid> {
    config.validate()?;
    let rows: Vec<Vec<f64>> = channels
        .par_iter()
        .map(|&channel| sweep_channel(config, channel))
        .collect::<FieldResult<_>>()?;

    Ok(IntensityGrid {
        times: config.sample_times(),
        channels: channels.to_vec(),
        rows,
    })
}

/// Sampled intensities for a set of channels over a common time grid.
///
/// Row `i` holds the intensities of `channels()[i]`, one value per entry of
/// `times()`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IntensityGrid {
    times: Vec<f64>,
    channels: Vec<i64>,
    rows: Vec<Vec<f64>>,
}

impl IntensityGrid {
    /// The sampled time coordinates.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// The channels sampled, in row order.
    pub fn channels(&self) -> &[i64] {
        &self.channels
    }

    /// The row for a given channel, if it was swept.
    pub fn channel_row(&self, channel: i64) -> Option<&[f64]> {
        self.channels
            .iter()
            .position(|&c| c == channel)
            .map(|i| self.rows[i].as_slice())
    }

    /// Peak intensity anywhere in the grid.
    pub fn peak(&self) -> f64 {
        self.rows
            .iter()
            .flatten()
            .copied()
            .fold(0.0f64, f64::max)
    }

    /// Mean intensity over the whole grid.
    pub fn mean(&self) -> f64 {
        let count = self.channels.len() * self.times.len();
        if count == 0 {
            return 0.0;
        }
        self.rows.iter().flatten().sum::<f64>() / count as f64
    }
}
