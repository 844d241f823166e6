//! Waveform generator library.
//!
//! Each generator maps a 15-bit positive phase value (0 = start of cycle) to
//! a signed Q15 sample. Generators are stateless; the one exception is
//! [`Waveform::Noise`], which ignores its phase input and pulls from the
//! process-global generator in [`crate::random`].

use crate::q15::{Q15_MAX, Q15_MIN};
use crate::random;
use crate::resources::sine::{LUT_SINE, LUT_SINE_BITS, LUT_SINE_SIZE};

/// Closed set of waveform generators selectable per oscillator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    #[default]
    Sawtooth,
    Sine,
    Square,
    Triangle,
    FallingRamp,
    ExpDecay,
    Noise,
}

impl Waveform {
    /// Sample the waveform at the given 15-bit phase.
    #[inline]
    pub fn sample(self, phase: i16) -> i16 {
        match self {
            Waveform::Sawtooth => sawtooth(phase),
            Waveform::Sine => sine(phase),
            Waveform::Square => square(phase),
            Waveform::Triangle => triangle(phase),
            Waveform::FallingRamp => falling_ramp(phase),
            Waveform::ExpDecay => exp_decay(phase),
            Waveform::Noise => random::get_sample(),
        }
    }
}

/// Linear ramp from minimum to maximum across one cycle.
#[inline]
pub fn sawtooth(phase: i16) -> i16 {
    (phase as i32 * 2 - Q15_MAX as i32) as i16
}

// Phase bits below the table index, used for interpolation.
const PHASE_SHIFT: u32 = 15 - LUT_SINE_BITS;

#[cfg(not(feature = "sine-lut-16bit"))]
#[inline]
fn lut_entry(index: usize) -> i32 {
    // Scale Q7 table entries to the full Q15 range.
    LUT_SINE[index] as i32 * 258
}

#[cfg(feature = "sine-lut-16bit")]
#[inline]
fn lut_entry(index: usize) -> i32 {
    LUT_SINE[index] as i32
}

/// Table-based sine.
///
/// With the `interpolation` feature, blends linearly between adjacent table
/// entries using the low-order phase bits; the duplicate entry at the end of
/// the table makes the last-to-first step branch-free.
#[inline]
pub fn sine(phase: i16) -> i16 {
    let index = (phase as usize >> PHASE_SHIFT) & (LUT_SINE_SIZE - 1);
    #[allow(unused_mut)]
    let mut res = lut_entry(index);

    #[cfg(feature = "interpolation")]
    {
        let next = lut_entry(index + 1);
        let frac = phase as i32 & ((1 << PHASE_SHIFT) - 1);
        res += ((next - res) * frac) >> PHASE_SHIFT;
    }

    res as i16
}

/// Maximum for the first half of the cycle, minimum for the second.
#[inline]
pub fn square(phase: i16) -> i16 {
    if phase < Q15_MAX / 2 {
        Q15_MAX
    } else {
        Q15_MIN
    }
}

/// Symmetric ramp up then down, folded from a doubled ramp.
#[inline]
pub fn triangle(phase: i16) -> i16 {
    let mut res = (phase as i32) << 1;
    if res > Q15_MAX as i32 {
        res = Q15_MAX as i32 - (res - Q15_MAX as i32);
    }
    (res * 2 - Q15_MAX as i32) as i16
}

/// Linear ramp from maximum to minimum across one cycle.
#[inline]
pub fn falling_ramp(phase: i16) -> i16 {
    (Q15_MAX as i32 - phase as i32 * 2) as i16
}

/// `((1 - phase)^2)^2`, a non-negative decaying-exponential approximation.
#[inline]
pub fn exp_decay(phase: i16) -> i16 {
    let inverted = (Q15_MAX - phase) as i32;
    let squared = (inverted * inverted) >> 15;
    ((squared * squared) >> 15) as i16
}

/// Sine-shaped soft clipper for wider-than-Q15 signals.
///
/// Compresses the magnitude into the first quadrant of the sine table
/// (values above a quarter of full scale are clamped), so the curve is close
/// to linear up to ~50% of the Q15 range and saturates smoothly above it.
#[inline]
pub fn soft_clip(input: i32) -> i16 {
    let negative = input < 0;
    let magnitude = if negative { -input } else { input };
    // A 50% input lands around 70% of the quadrant; anything past the
    // quadrant top is clamped.
    let quadrant = (magnitude >> 3).min(Q15_MAX as i32 / 4);
    let res = sine(quadrant as i16);
    if negative {
        -res
    } else {
        res
    }
}
