//! Voice: a fixed sequence of node slots playing one note at a time.
//!
//! Slot 0 is by convention the voice's root node; its published output is
//! what the engine sums into the mix. Evaluation is a strict two-pass sweep:
//! pass 1 computes every node's output from previous-tick published values,
//! pass 2 publishes the results and advances private state. No same-tick
//! value ever crosses a node boundary, so slot ordering carries no
//! dependency and feedback wiring is well-defined with a one-sample delay.

use crate::node::{Envelope, Filter, Kind, Mixer, Node, Oscillator, Source, WiringError};
use crate::pitch::note_to_phase_increment;
use crate::q15::{self, Q15_MAX};
use crate::wavegen::Waveform;

/// Phase accumulators wrap at 15 bits.
const PHASE_MASK: i32 = 0x7FFF;

/// Envelope state: top bit selects decay mode, the rest is the value.
const DECAY_MODE: i32 = i32::MIN;
const ENVELOPE_VALUE_MASK: i32 = i32::MAX;

/// Envelope values carry 4 extra bits of precision beyond Q15.
const ENVELOPE_SHIFT: u32 = 4;
const ENVELOPE_MAX: i32 = (Q15_MAX as i32) << ENVELOPE_SHIFT;

/// One independent instance of the node graph.
#[derive(Debug, Clone)]
pub struct Voice<const NODES: usize> {
    note: u8,
    gate: bool,
    phase_increment: i16,
    nodes: [Node; NODES],
}

impl<const NODES: usize> Voice<NODES> {
    pub fn new() -> Self {
        Self {
            note: 0,
            gate: false,
            phase_increment: 0,
            nodes: [Node::default(); NODES],
        }
    }

    /// Configure a slot as an oscillator.
    ///
    /// `phase_increment` is usually [`Source::PitchIncrement`]; a fixed
    /// [`Source::Value`] from [`crate::pitch::hz_to_phase_increment`] makes
    /// an LFO. `detune` is added to the increment every tick, for vibrato
    /// and FM.
    pub fn configure_oscillator(
        &mut self,
        slot: usize,
        gain: Option<Source>,
        phase_increment: Source,
        detune: Option<Source>,
        waveform: Waveform,
    ) -> Result<(), WiringError> {
        self.check_slot(slot)?;
        self.check_source(phase_increment)?;
        self.check_optional(gain)?;
        self.check_optional(detune)?;
        self.nodes[slot] = Node {
            kind: Kind::Oscillator(Oscillator {
                phase: 0,
                phase_increment,
                detune,
                waveform,
            }),
            gain,
            output: 0,
        };
        Ok(())
    }

    /// Configure a slot as an envelope.
    ///
    /// `attack`, `decay` and `release` are per-tick rates on the internal
    /// value, which carries 4 extra bits beyond Q15. A negative `sustain`
    /// makes the envelope bipolar: it tracks `sustain.abs()` as its floor
    /// and negates its output, for use as a subtractive modulation source.
    pub fn configure_envelope(
        &mut self,
        slot: usize,
        gain: Option<Source>,
        attack: i16,
        decay: i16,
        sustain: i16,
        release: i16,
    ) -> Result<(), WiringError> {
        self.check_slot(slot)?;
        self.check_optional(gain)?;
        self.nodes[slot] = Node {
            kind: Kind::Envelope(Envelope {
                state: 0,
                attack,
                decay,
                sustain,
                release,
            }),
            gain,
            output: 0,
        };
        Ok(())
    }

    /// Configure a slot as a one-pole low-pass filter.
    pub fn configure_lowpass(
        &mut self,
        slot: usize,
        gain: Option<Source>,
        input: Source,
        coefficient: i16,
    ) -> Result<(), WiringError> {
        self.configure_filter(slot, gain, input, coefficient, false)
    }

    /// Configure a slot as a one-pole high-pass filter.
    pub fn configure_highpass(
        &mut self,
        slot: usize,
        gain: Option<Source>,
        input: Source,
        coefficient: i16,
    ) -> Result<(), WiringError> {
        self.configure_filter(slot, gain, input, coefficient, true)
    }

    fn configure_filter(
        &mut self,
        slot: usize,
        gain: Option<Source>,
        input: Source,
        coefficient: i16,
        highpass: bool,
    ) -> Result<(), WiringError> {
        self.check_slot(slot)?;
        self.check_source(input)?;
        self.check_optional(gain)?;
        let filter = Filter {
            input,
            accum: 0,
            coefficient,
        };
        self.nodes[slot] = Node {
            kind: if highpass {
                Kind::HighPass(filter)
            } else {
                Kind::LowPass(filter)
            },
            gain,
            output: 0,
        };
        Ok(())
    }

    /// Configure a slot as a mixer summing up to three inputs.
    ///
    /// Inputs are summed unweighted; compensating for the input count is
    /// deliberately left to explicit gain configuration.
    pub fn configure_mixer(
        &mut self,
        slot: usize,
        gain: Option<Source>,
        inputs: [Option<Source>; 3],
    ) -> Result<(), WiringError> {
        self.check_slot(slot)?;
        self.check_optional(gain)?;
        for input in inputs {
            self.check_optional(input)?;
        }
        self.nodes[slot] = Node {
            kind: Kind::Mixer(Mixer { inputs }),
            gain,
            output: 0,
        };
        Ok(())
    }

    /// Start a note: record it, assert the gate, derive the phase increment
    /// and zero every node's private state. Published outputs are left
    /// untouched until the next tick recomputes them.
    pub fn note_on(&mut self, note: u8) {
        self.note = note;
        self.gate = true;
        self.phase_increment = note_to_phase_increment(note);
        for node in &mut self.nodes {
            node.reset_state();
        }
    }

    /// Release the current note: clear the gate only. Envelopes observe the
    /// cleared gate on their next update and begin release from wherever
    /// their value currently sits.
    pub fn note_off(&mut self) {
        self.gate = false;
    }

    pub fn note(&self) -> u8 {
        self.note
    }

    pub fn gate(&self) -> bool {
        self.gate
    }

    /// The phase increment derived from the last note-on.
    pub fn phase_increment(&self) -> i16 {
        self.phase_increment
    }

    /// Published output of a node slot, as of the end of the last tick.
    pub fn output(&self, slot: usize) -> i16 {
        self.nodes[slot].output
    }

    fn check_slot(&self, slot: usize) -> Result<(), WiringError> {
        if slot >= NODES {
            return Err(WiringError::SlotOutOfRange {
                slot,
                capacity: NODES,
            });
        }
        Ok(())
    }

    fn check_source(&self, source: Source) -> Result<(), WiringError> {
        if let Source::Node(slot) = source {
            if slot >= NODES {
                return Err(WiringError::SourceOutOfRange {
                    slot,
                    capacity: NODES,
                });
            }
        }
        Ok(())
    }

    fn check_optional(&self, source: Option<Source>) -> Result<(), WiringError> {
        match source {
            Some(source) => self.check_source(source),
            None => Ok(()),
        }
    }

    /// Read a signal source. [`Source::Node`] yields the referenced node's
    /// output as published at the end of the previous tick.
    #[inline]
    fn read(&self, source: Source) -> i16 {
        match source {
            Source::Node(slot) => self.nodes[slot].output,
            Source::PitchIncrement => self.phase_increment,
            Source::Value(value) => value,
        }
    }

    /// Advance the voice by one tick and return the root node's output.
    #[inline]
    pub(crate) fn render(&mut self) -> i16 {
        let mut outputs = [0_i32; NODES];

        // Pass 1: compute every node's output from previous-tick published
        // values. Results stay in the transient array, invisible to other
        // nodes until pass 2.
        for slot in 0..NODES {
            let node = &self.nodes[slot];
            let raw: i32 = match &node.kind {
                Kind::None => break,
                Kind::Oscillator(osc) => {
                    let phase = (osc.phase & PHASE_MASK) as i16;
                    osc.waveform.sample(phase) as i32
                }
                Kind::Envelope(env) => {
                    let value = (env.state & 0x7F_FFFF) >> ENVELOPE_SHIFT;
                    // Squaring turns the linear internal ramp into a
                    // perceptually shaped one.
                    let shaped = (value * value) >> 15;
                    if env.sustain < 0 {
                        -shaped
                    } else {
                        shaped
                    }
                }
                Kind::LowPass(filter) => q15::scale(filter.accum, filter.coefficient),
                Kind::HighPass(filter) => {
                    let lowpass = q15::scale(filter.accum, filter.coefficient);
                    self.read(filter.input) as i32 - lowpass
                }
                Kind::Mixer(mixer) => {
                    let mut sum = 0_i32;
                    for input in mixer.inputs.into_iter().flatten() {
                        sum += self.read(input) as i32;
                    }
                    sum
                }
            };
            outputs[slot] = match node.gain {
                Some(gain) => q15::scale(raw, self.read(gain)),
                None => raw,
            };
        }

        // Pass 2: advance private state, reading cross-node sources at their
        // previous-tick values, then publish. A node's own same-tick result
        // participates only in its own update (the filter difference term).
        for slot in 0..NODES {
            let kind = self.nodes[slot].kind;
            let published = outputs[slot] as i16;
            match kind {
                Kind::None => break,
                Kind::Oscillator(mut osc) => {
                    let mut increment = self.read(osc.phase_increment) as i32;
                    if let Some(detune) = osc.detune {
                        increment += self.read(detune) as i32;
                    }
                    osc.phase = (osc.phase + increment) & PHASE_MASK;
                    self.nodes[slot].kind = Kind::Oscillator(osc);
                }
                Kind::Envelope(mut env) => {
                    if self.gate {
                        let in_decay = (env.state & DECAY_MODE) != 0;
                        let mut value = env.state & ENVELOPE_VALUE_MASK;
                        if in_decay {
                            // Decay floors at the absolute sustain level
                            // while the gate is held.
                            value -= env.decay as i32;
                            let sustain_floor =
                                (env.sustain as i32).abs() << ENVELOPE_SHIFT;
                            if value < sustain_floor {
                                value = sustain_floor;
                            }
                            env.state = value | DECAY_MODE;
                        } else {
                            value += env.attack as i32;
                            if value >= ENVELOPE_MAX {
                                value = ENVELOPE_MAX;
                                env.state = value | DECAY_MODE;
                            } else {
                                env.state = value;
                            }
                        }
                    } else {
                        // Release. Clearing the mode bit makes the next
                        // gate-on restart in attack.
                        env.state &= ENVELOPE_VALUE_MASK;
                        env.state -= env.release as i32;
                        if env.state < 0 {
                            env.state = 0;
                        }
                    }
                    self.nodes[slot].kind = Kind::Envelope(env);
                }
                Kind::LowPass(mut filter) => {
                    let input = self.read(filter.input) as i32;
                    filter.accum = filter.accum.wrapping_add(input - published as i32);
                    self.nodes[slot].kind = Kind::LowPass(filter);
                }
                Kind::HighPass(mut filter) => {
                    let input = self.read(filter.input) as i32;
                    filter.accum = filter.accum.wrapping_add(input - published as i32);
                    self.nodes[slot].kind = Kind::HighPass(filter);
                }
                Kind::Mixer(_) => {}
            }
        }

        // Publish after every state advance so pass-2 source reads still see
        // previous-tick values regardless of slot order.
        for slot in 0..NODES {
            if matches!(self.nodes[slot].kind, Kind::None) {
                break;
            }
            self.nodes[slot].output = outputs[slot] as i16;
        }

        self.nodes[0].output
    }
}

impl<const NODES: usize> Default for Voice<NODES> {
    fn default() -> Self {
        Self::new()
    }
}
