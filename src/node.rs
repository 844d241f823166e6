//! Node graph model.
//!
//! A voice's signal topology is a fixed array of node slots. Signal routing
//! uses stable slot indices instead of pointers: a node input names a
//! [`Source`], and reading it always yields the value published at the end
//! of the previous tick, so cross-node propagation carries a one-sample
//! delay and slot ordering never matters within a tick.

use thiserror::Error;

use crate::wavegen::Waveform;

/// A readable signal source wired into a node input or gain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Published output of the node in the given slot of the same voice.
    Node(usize),
    /// The voice's current phase increment, as derived by the last note-on.
    PitchIncrement,
    /// A fixed Q15 control value.
    Value(i16),
}

/// Wiring contract violation, reported at configure time.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WiringError {
    /// The slot index exceeds the voice's fixed node capacity.
    #[error("node slot {slot} exceeds the voice capacity of {capacity}")]
    SlotOutOfRange { slot: usize, capacity: usize },
    /// A [`Source::Node`] reference points beyond the voice's node capacity.
    #[error("signal source references slot {slot} beyond the voice capacity of {capacity}")]
    SourceOutOfRange { slot: usize, capacity: usize },
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Oscillator {
    /// Phase accumulator, logically 15 bits, wrapping.
    pub phase: i32,
    pub phase_increment: Source,
    pub detune: Option<Source>,
    pub waveform: Waveform,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Envelope {
    /// Mode+value state word: top bit = decay-mode flag, lower bits = the
    /// amplitude scaled with 4 extra bits of precision beyond Q15.
    pub state: i32,
    pub attack: i16,
    pub decay: i16,
    /// Negative sustain marks a bipolar envelope: the output is negated.
    pub sustain: i16,
    pub release: i16,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Filter {
    pub input: Source,
    /// Leaky-integrator accumulator. Not clamped; sustained extreme inputs
    /// can wrap it, which is a documented limitation.
    pub accum: i32,
    pub coefficient: i16,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Mixer {
    pub inputs: [Option<Source>; 3],
}

/// Tagged node variant. `None` doubles as the evaluation-sweep terminator.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) enum Kind {
    #[default]
    None,
    Oscillator(Oscillator),
    Envelope(Envelope),
    LowPass(Filter),
    HighPass(Filter),
    Mixer(Mixer),
}

/// One node slot: variant-specific state plus the common gain input and the
/// published output sample, the only value visible to other nodes.
#[derive(Debug, Default, Clone, Copy)]
pub struct Node {
    pub(crate) kind: Kind,
    pub(crate) gain: Option<Source>,
    pub(crate) output: i16,
}

impl Node {
    /// Zero the variant-specific private state, keeping wiring and the
    /// published output untouched. Called on note-on.
    pub(crate) fn reset_state(&mut self) {
        match &mut self.kind {
            Kind::Oscillator(osc) => osc.phase = 0,
            Kind::Envelope(env) => env.state = 0,
            Kind::LowPass(filter) | Kind::HighPass(filter) => filter.accum = 0,
            Kind::Mixer(_) | Kind::None => {}
        }
    }
}
