//! Signed Q15 fixed-point sample convention.
//!
//! A sample is an `i16` with 15 fractional bits: real value = raw / 32768,
//! covering [-1.0, +0.99997]. All inter-node signals and gains use this
//! format. Internal accumulators that need headroom use wider integers.

/// Largest representable Q15 value (~0.99997).
pub const Q15_MAX: i16 = 0x7FFF;

/// Smallest representable Q15 value (-1.0).
pub const Q15_MIN: i16 = -0x8000;

/// Multiply two Q15 values.
///
/// The product is rescaled with an arithmetic right shift, truncating toward
/// negative infinity rather than rounding. A gain of [`Q15_MAX`] is therefore
/// always a very slight attenuation, never exact unity.
#[inline]
pub fn mul(a: i16, b: i16) -> i16 {
    ((a as i32 * b as i32) >> 15) as i16
}

/// Scale a wide accumulator by a Q15 gain, keeping the wide range.
///
/// Used where the unscaled value may exceed 16 bits, e.g. a mixer sum or a
/// filter integrator.
#[inline]
pub fn scale(value: i32, gain: i16) -> i32 {
    ((value as i64 * gain as i64) >> 15) as i32
}
