//! Constructive superposition of channel intensities
//!
//! Two channels interact additively, not multiplicatively: if one wave is
//! weak but the other is strong, the combined field still holds. A fixed
//! bias keeps the superposed strength away from zero, so the bridge between
//! channels never drops out entirely.

use crate::constants::{RADIUS_GAIN, SUPERPOSITION_BIAS};
use crate::error::{FieldError, FieldResult};
use crate::kernel::phase_intensity;

/// Combine two channel intensities into a single field strength.
///
/// `(a + b) / 2 + SUPERPOSITION_BIAS`. For intensities in the kernel's
/// `[0, 1.5]` range the result lies in `[0.5, 2.0]`.
///
/// # Errors
///
/// [`FieldError::NonFiniteInput`] if either intensity is NaN or infinite.
pub fn superpose(a: f64, b: f64) -> FieldResult<f64> {
    if !a.is_finite() {
        return Err(FieldError::NonFiniteInput(a));
    }
    if !b.is_finite() {
        return Err(FieldError::NonFiniteInput(b));
    }
    Ok((a + b) / 2.0 + SUPERPOSITION_BIAS)
}

/// Evaluate two channels at the same time coordinate and superpose them.
///
/// # Errors
///
/// Propagates [`FieldError::NonFiniteTime`] from the kernel.
pub fn bridge_strength(t: f64, channel_a: i64, channel_b: i64) -> FieldResult<f64> {
    let a = phase_intensity(t, channel_a)?;
    let b = phase_intensity(t, channel_b)?;
    superpose(a, b)
}

/// Scale a base interaction radius by a superposed field strength.
///
/// `base_radius * field_strength * RADIUS_GAIN`. A strong field widens the
/// zone over which two channels count as touching.
///
/// # Errors
///
/// [`FieldError::NonFiniteInput`] if either argument is NaN or infinite.
pub fn effective_radius(base_radius: f64, field_strength: f64) -> FieldResult<f64> {
    if !base_radius.is_finite() {
        return Err(FieldError::NonFiniteInput(base_radius));
    }
    if !field_strength.is_finite() {
        return Err(FieldError::NonFiniteInput(field_strength));
    }
    Ok(base_radius * field_strength * RADIUS_GAIN)
}
