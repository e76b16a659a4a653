//! ROA Field - Golden-ratio phase-locking wave kernel
//!
//! One deterministic function is the whole substrate: sample a time
//! coordinate on a dimension channel, get back a bounded field intensity.
//!
//! ```text
//! intensity(t, d) = | sin(t * phi) + 0.5 * cos(t / phi * d) |
//! ```
//!
//! # Core Types
//!
//! - **`phase_intensity`**: the kernel itself, `(t, channel) -> [0, 1.5]`
//! - **`GOLDEN_RATIO`**: the exact constant the kernel scales by
//! - **`SweepConfig` / `IntensityGrid`**: uniform sampling for plotting
//!   harnesses and other downstream consumers
//! - **`superpose` / `bridge_strength`**: constructive combination of two
//!   channels into one field strength
//!
//! # Architecture: Kernel / Sweep / Superposition
//!
//! The system separates into three layers:
//!
//! 1. **Kernel** - the pure wave evaluation, stateless and memoryless
//! 2. **Sweep** - batch sampling over a time span and channel set
//! 3. **Superposition** - additive combination of channel intensities
//!
//! The kernel never blocks, never allocates, and holds no shared state, so
//! any number of callers may evaluate it concurrently; the sweep layer leans
//! on that to fan multi-channel grids across a rayon pool.
//!
//! # Core Concepts
//!
//! - **Golden-ratio scaling**: phi has the slowest-converging continued
//!   fraction of any real, so the base vibration and the channel overtone
//!   never settle into low-order rational resonance
//! - **Channels**: integer indices selecting which dimension of the field is
//!   sampled; the overtone is even in the channel, negative indices mirror
//!   positive ones
//! - **Constructive superposition**: channels combine additively with a bias,
//!   so a bridge between a weak and a strong wave still holds
//!
//! # Example: Sweeping the Field for a Plot
//!
//! ```rust
//! use roa_field::{phase_intensity, sweep_grid, SweepConfig, INTENSITY_MAX};
//!
//! // Point evaluation.
//! let v = phase_intensity(0.0, 1).unwrap();
//! assert!((v - 0.5).abs() < 1e-12);
//!
//! // Grid for a figure: 256 samples of channels 0..4 over t in [0, 20].
//! let config = SweepConfig::new(0.0, 20.0, 256);
//! let grid = sweep_grid(&config, &[0, 1, 2, 3]).unwrap();
//!
//! assert_eq!(grid.times().len(), 256);
//! assert!(grid.peak() <= INTENSITY_MAX);
//! ```
//!
//! # Key Insight
//!
//! The kernel does not know about rendezvous agents, primes, or turbulence.
//! It just evaluates one wave. Whatever meaning a consumer reads into the
//! samples lives entirely on their side of the boundary.

mod constants;
mod error;
mod kernel;
mod superposition;
mod sweep;

pub use constants::{GOLDEN_RATIO, INTENSITY_MAX, RADIUS_GAIN, SUPERPOSITION_BIAS};
pub use error::{FieldError, FieldResult};
pub use kernel::phase_intensity;
pub use superposition::{bridge_strength, effective_radius, superpose};
pub use sweep::{sweep_channel, sweep_grid, IntensityGrid, SweepConfig};
