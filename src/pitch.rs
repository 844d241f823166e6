//! MIDI-note-to-phase-increment conversion.
//!
//! A 12-entry table holds the phase increment for each pitch class at the
//! highest supported octave; lower octaves are derived with one right shift
//! per octave (each octave down halves the frequency). No trigonometric or
//! floating-point computation happens at run time or at build time.

use crate::q15::Q15_MAX;
use crate::SAMPLE_RATE;

/// Octave of the top-octave table entries (C8..B8).
const BASE_OCTAVE: u8 = 8;

/// Convert a frequency in centihertz to a phase increment at [`SAMPLE_RATE`].
///
/// Centihertz keeps the computation in integer arithmetic while preserving
/// the two-decimal precision of the equal-tempered pitch table.
pub const fn hz_to_phase_increment(centihertz: u32) -> i16 {
    ((centihertz as u64 * Q15_MAX as u64) / (SAMPLE_RATE as u64 * 100)) as i16
}

// Phase increments for the top octave, C8 through B8. The largest increments
// live here; every lower octave is an exact right shift of these.
const TOP_OCTAVE: [i16; 12] = [
    hz_to_phase_increment(418_601), // C
    hz_to_phase_increment(443_492), // C#
    hz_to_phase_increment(469_863), // D
    hz_to_phase_increment(497_803), // D#
    hz_to_phase_increment(527_404), // E
    hz_to_phase_increment(558_765), // F
    hz_to_phase_increment(591_991), // F#
    hz_to_phase_increment(627_193), // G
    hz_to_phase_increment(664_488), // G#
    hz_to_phase_increment(704_000), // A
    hz_to_phase_increment(745_862), // A#
    hz_to_phase_increment(790_213), // B
];

/// Phase increment for a MIDI note number.
///
/// Octave and pitch class come from division/remainder by 12; the top-octave
/// entry is shifted down one bit per octave below the reference. Notes above
/// the reference band clamp the shift to zero.
#[inline]
pub fn note_to_phase_increment(note: u8) -> i16 {
    let octave = note / 12;
    let pitch_class = (note % 12) as usize;
    let shift = (BASE_OCTAVE + 1).saturating_sub(octave);

    TOP_OCTAVE[pitch_class] >> shift
}
