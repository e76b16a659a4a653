//! Phase intensity kernel - the core wave evaluation
//!
//! One pure function maps a time coordinate and a dimension channel to a
//! bounded field intensity:
//!
//! ```text
//! intensity(t, d) = | sin(t * phi) + 0.5 * cos(t / phi * d) |
//! ```
//!
//! The base vibration `sin(t * phi)` carries the field; the channel overtone
//! `0.5 * cos(t / phi * d)` modulates it per channel. Taking the absolute
//! value of the sum (not summing absolute values) is what lets the two terms
//! interfere, constructively or destructively, before normalization.
//!
//! The kernel is stateless and memoryless. Identical inputs always produce
//! bit-identical outputs, and calls from any number of threads need no
//! coordination.

use crate::constants::GOLDEN_RATIO;
use crate::error::{FieldError, FieldResult};

/// Evaluate the phase intensity of the field at time `t` on `channel`.
///
/// `t` is an abstract evolution parameter, not wall-clock time; any finite
/// value is accepted. `channel` selects which dimension of the field is
/// sampled and may be zero or negative (the overtone is even in the channel,
/// so `channel` and `-channel` sample identically).
///
/// Returns a value in `[0.0, INTENSITY_MAX]`.
///
/// # Errors
///
/// [`FieldError::NonFiniteTime`] if `t` is NaN or infinite.
///
/// # Example
///
/// ```rust
/// use roa_field::phase_intensity;
///
/// // sin(0) = 0, cos(0) = 1, so the overtone alone survives.
/// let at_origin = phase_intensity(0.0, 1).unwrap();
/// assert!((at_origin - 0.5).abs() < 1e-12);
/// ```
pub fn phase_intensity(t: f64, channel: i64) -> FieldResult<f64> {
    if !t.is_finite() {
        return Err(FieldError::NonFiniteTime(t));
    }
    let wave = (t * GOLDEN_RATIO).sin() + 0.5 * (t / GOLDEN_RATIO * channel as f64).cos();
    Ok(wave.abs())
}
