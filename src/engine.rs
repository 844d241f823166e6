//! Polyphonic engine: a fixed bank of voices mixed to one output sample.
//!
//! The engine executes synchronously. One tick is a short, bounded,
//! allocation-free computation with cost proportional to voices × nodes,
//! independent of signal content, so it can be driven from an audio-rate
//! interrupt. Note events and configuration must be serialized against
//! ticks by the caller; there is no internal locking.

use crate::q15::Q15_MAX;
use crate::voice::Voice;

/// Fixed-polyphony synthesis engine.
///
/// `VOICES` and `NODES` (node slots per voice) are fixed at compile time;
/// all state lives inline, with no heap allocation.
#[derive(Debug, Clone)]
pub struct Synth<const VOICES: usize, const NODES: usize> {
    voices: [Voice<NODES>; VOICES],
}

impl<const VOICES: usize, const NODES: usize> Synth<VOICES, NODES> {
    pub fn new() -> Self {
        Self {
            voices: core::array::from_fn(|_| Voice::new()),
        }
    }

    pub fn voice(&self, voice: usize) -> &Voice<NODES> {
        &self.voices[voice]
    }

    pub fn voice_mut(&mut self, voice: usize) -> &mut Voice<NODES> {
        &mut self.voices[voice]
    }

    /// Start a note on the given voice. See [`Voice::note_on`].
    pub fn note_on(&mut self, voice: usize, note: u8) {
        self.voices[voice].note_on(note);
    }

    /// Release the note on the given voice. See [`Voice::note_off`].
    pub fn note_off(&mut self, voice: usize) {
        self.voices[voice].note_off();
    }

    /// Advance all voices by one sample and return the mixed output.
    ///
    /// Each voice's root node (slot 0) is summed, then scaled by a static
    /// per-voice divisor to keep the sum within the Q15 range. With a single
    /// voice no scaling is applied.
    pub fn process(&mut self) -> i16 {
        let mut main_output = 0_i32;
        for voice in &mut self.voices {
            main_output += voice.render() as i32;
        }

        if VOICES > 1 {
            let main_mixer_gain = Q15_MAX / VOICES as i16;
            ((main_output * main_mixer_gain as i32) >> 15) as i16
        } else {
            main_output as i16
        }
    }
}

impl<const VOICES: usize, const NODES: usize> Default for Synth<VOICES, NODES> {
    fn default() -> Self {
        Self::new()
    }
}
