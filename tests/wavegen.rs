//! Tests for the waveform generators.

use q15_synth::q15::{Q15_MAX, Q15_MIN};
use q15_synth::wavegen::*;
use q15_synth::random;

#[test]
fn sawtooth_ramps_up() {
    assert_eq!(sawtooth(0), -Q15_MAX);
    assert_eq!(sawtooth(Q15_MAX / 2), -1);
    assert_eq!(sawtooth(Q15_MAX), Q15_MAX);

    for phase in (0..Q15_MAX - 64).step_by(64) {
        assert!(sawtooth(phase) < sawtooth(phase + 64));
    }
}

#[test]
fn falling_ramp_mirrors_sawtooth() {
    assert_eq!(falling_ramp(0), Q15_MAX);
    assert_eq!(falling_ramp(Q15_MAX), -Q15_MAX);

    for phase in (0..=Q15_MAX).step_by(97) {
        assert_eq!(falling_ramp(phase), -sawtooth(phase));
    }
}

#[test]
fn square_switches_at_half_cycle() {
    assert_eq!(square(0), Q15_MAX);
    assert_eq!(square(Q15_MAX / 2 - 1), Q15_MAX);
    assert_eq!(square(Q15_MAX / 2), Q15_MIN);
    assert_eq!(square(Q15_MAX), Q15_MIN);
}

#[test]
fn triangle_folds_symmetrically() {
    assert_eq!(triangle(0), -Q15_MAX);
    // Peak at a quarter cycle, back at the minimum near the end.
    assert_eq!(triangle(Q15_MAX / 2), Q15_MAX - 2);
    assert_eq!(triangle(Q15_MAX), -Q15_MAX);

    // Rising then falling.
    for phase in (0..Q15_MAX / 2 - 64).step_by(64) {
        assert!(triangle(phase) < triangle(phase + 64));
    }
    for phase in (Q15_MAX / 2 + 1..Q15_MAX - 64).step_by(64) {
        assert!(triangle(phase) > triangle(phase + 64));
    }
}

#[cfg(not(feature = "sine-lut-16bit"))]
#[test]
fn sine_hits_cardinal_points() {
    assert_eq!(sine(0), 0);
    // Quarter cycle: table maximum, scaled to the full Q15 range.
    assert_eq!(sine(8192), 127 * 258);
    assert_eq!(sine(16384), 0);
    assert_eq!(sine(24576), -127 * 258);
}

#[test]
fn sine_is_odd_symmetric() {
    // sin(x + half cycle) == -sin(x) on exact table points.
    for index in 0..64_i16 {
        let phase = index << 8;
        assert_eq!(sine(phase), -sine(phase + 16384));
    }
}

#[test]
fn exp_decay_is_non_negative_and_decreasing() {
    assert_eq!(exp_decay(0), Q15_MAX - 3);
    assert_eq!(exp_decay(Q15_MAX), 0);

    let mut previous = exp_decay(0);
    for phase in (0..=Q15_MAX).step_by(131) {
        let value = exp_decay(phase);
        assert!(value >= 0);
        assert!(value <= previous);
        previous = value;
    }
}

#[test]
fn soft_clip_shape() {
    assert_eq!(soft_clip(0), 0);

    // Odd symmetry.
    for input in [100, 5_000, 16_384, 32_767, 100_000] {
        assert_eq!(soft_clip(-input), -soft_clip(input));
    }

    // Monotone non-decreasing over the useful range.
    let mut previous = soft_clip(-200_000);
    for input in (-200_000..=200_000).step_by(1_000) {
        let value = soft_clip(input);
        assert!(value >= previous);
        previous = value;
    }

    // Saturates at the quadrant top for anything past full scale.
    let top = soft_clip(8_192 << 3);
    assert_eq!(soft_clip(100_000), top);
    assert_eq!(soft_clip(i32::MAX), top);
    assert!(top > Q15_MAX - 512);
}

#[test]
fn noise_stream_is_seed_reproducible() {
    // The generator state is process-global; keep every noise assertion in
    // this single test so parallel test threads cannot interleave draws.
    random::seed(0x1234_5678);
    let first: Vec<i16> = (0..16).map(|_| random::get_sample()).collect();

    random::seed(0x1234_5678);
    let second: Vec<i16> = (0..16).map(|_| random::get_sample()).collect();
    assert_eq!(first, second);

    // First draw from the default seed follows the LCG recurrence.
    random::seed(0x1234_5678);
    let expected = 0x1234_5678_u32
        .wrapping_mul(1_664_525)
        .wrapping_add(1_013_904_223);
    assert_eq!(random::get_sample(), (expected & 0xFFFF) as u16 as i16);

    // The dispatching waveform draws from the same stream.
    random::seed(42);
    let direct: Vec<i16> = (0..8).map(|_| random::get_sample()).collect();
    random::seed(42);
    let via_enum: Vec<i16> = (0..8).map(|_| Waveform::Noise.sample(0)).collect();
    assert_eq!(direct, via_enum);
}

#[test]
fn waveform_enum_dispatch() {
    for phase in (0..=Q15_MAX).step_by(997) {
        assert_eq!(Waveform::Sawtooth.sample(phase), sawtooth(phase));
        assert_eq!(Waveform::Sine.sample(phase), sine(phase));
        assert_eq!(Waveform::Square.sample(phase), square(phase));
        assert_eq!(Waveform::Triangle.sample(phase), triangle(phase));
        assert_eq!(Waveform::FallingRamp.sample(phase), falling_ramp(phase));
        assert_eq!(Waveform::ExpDecay.sample(phase), exp_decay(phase));
    }
}
