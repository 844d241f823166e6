//! Fast 16-bit pseudo random number generator.
//!
//! Linear-congruential generator (the `ranqd1` recurrence from Numerical
//! Recipes); it cycles through every 32-bit state before repeating. The
//! state is process-global and seeded once, so the sample stream is fixed
//! across the process lifetime. Tests that need a reproducible stream can
//! call [`seed`] first.

use core::sync::atomic::{AtomicU32, Ordering};

static RNG_STATE: AtomicU32 = AtomicU32::new(0x1234_5678);

#[inline]
fn state() -> u32 {
    RNG_STATE.load(Ordering::Relaxed)
}

/// Reset the generator state.
#[inline]
pub fn seed(seed: u32) {
    RNG_STATE.store(seed, Ordering::Relaxed);
}

#[inline]
pub fn get_word() -> u32 {
    RNG_STATE.store(
        RNG_STATE
            .load(Ordering::Relaxed)
            .wrapping_mul(1664525)
            .wrapping_add(1013904223),
        Ordering::Relaxed,
    );
    state()
}

/// Next sample: the low 16 bits of the state, reinterpreted as Q15.
#[inline]
pub fn get_sample() -> i16 {
    (get_word() & 0xFFFF) as u16 as i16
}
