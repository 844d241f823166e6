#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]

pub mod engine;
pub mod node;
pub mod pitch;
pub mod q15;
pub mod random;
pub mod resources;
pub mod voice;
pub mod wavegen;

/// Audio sample rate in Hz.
///
/// All phase-increment tables are precomputed for this rate, so it is a
/// build-time constant rather than a runtime parameter.
pub const SAMPLE_RATE: u32 = 11025;

/// Convert a duration in milliseconds to a sample count at [`SAMPLE_RATE`].
///
/// Intended for sequencer collaborators that schedule note events in
/// sample-counted time.
pub const fn ms_to_samples(ms: u32) -> u32 {
    ms * SAMPLE_RATE / 1000
}
