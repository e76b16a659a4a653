//! Field constants
//!
//! Every value the wave kernel and its consumers share lives here, so that
//! plotting or analysis harnesses built on top of the crate sample with
//! exactly the numbers the kernel uses internally.

/// The golden ratio, (1 + sqrt(5)) / 2.
///
/// The kernel uses this constant verbatim. Its continued-fraction expansion
/// converges slower than any other real number's, which keeps the two
/// trigonometric terms of the wave from locking into low-order rational
/// resonance.
pub const GOLDEN_RATIO: f64 = 1.61803398875;

/// Theoretical upper bound of the intensity kernel.
///
/// `|sin| <= 1` and the cosine term is scaled by 0.5, so the sum's absolute
/// value never exceeds 1.5. The bound is attained (e.g. at `t = pi / (2*phi)`,
/// channel 0).
pub const INTENSITY_MAX: f64 = 1.5;

/// Bias added when superposing two channel intensities.
///
/// Keeps the combined field strictly positive so a bridge between channels
/// never fully collapses, even when both waves pass through a trough.
pub const SUPERPOSITION_BIAS: f64 = 0.5;

/// Gain applied when converting a superposed field strength into an
/// effective interaction radius.
pub const RADIUS_GAIN: f64 = 2.5;
