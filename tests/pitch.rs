//! Tests for the note-to-pitch conversion.

use q15_synth::pitch::{hz_to_phase_increment, note_to_phase_increment};
use q15_synth::{ms_to_samples, SAMPLE_RATE};

#[test]
fn known_notes() {
    // C8 (MIDI 108) maps straight to the reference table entry.
    assert_eq!(note_to_phase_increment(108), 12441);
    // C7 is one shift down.
    assert_eq!(note_to_phase_increment(96), 12441 >> 1);
    // Middle C.
    assert_eq!(note_to_phase_increment(60), 777);
    // A4.
    assert_eq!(note_to_phase_increment(69), 1307);
}

#[test]
fn octave_shift_is_exact_halving() {
    // One octave down is exactly one right shift of the octave above.
    for note in 0..=107_u8 {
        let upper = note_to_phase_increment(note + 12);
        let lower = note_to_phase_increment(note);
        assert_eq!(lower, upper >> 1, "note {note}");
    }
}

#[test]
fn octave_doubling_within_truncation() {
    // Doubling the lower octave recovers the upper one up to the bit lost
    // by the extra shift.
    for note in 0..=107_u8 {
        let upper = note_to_phase_increment(note + 12) as i32;
        let doubled = 2 * note_to_phase_increment(note) as i32;
        let error = upper - doubled;
        assert!((0..=1).contains(&error), "note {note}: error {error}");
    }
}

#[test]
fn increments_monotonic_in_note() {
    for note in 0..119_u8 {
        assert!(note_to_phase_increment(note) <= note_to_phase_increment(note + 1));
    }
}

#[test]
fn hz_conversion() {
    // 5 Hz and 10 Hz, typical LFO and vibrato rates.
    assert_eq!(hz_to_phase_increment(500), 14);
    assert_eq!(hz_to_phase_increment(1_000), 29);
    // A full-scale increment corresponds to the sample rate itself.
    assert_eq!(hz_to_phase_increment(SAMPLE_RATE * 100), 32767);
}

#[test]
fn ms_conversion() {
    assert_eq!(ms_to_samples(1000), SAMPLE_RATE);
    assert_eq!(ms_to_samples(500), SAMPLE_RATE / 2);
    assert_eq!(ms_to_samples(0), 0);
}
