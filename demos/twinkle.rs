//! Two-voice demo song rendered to a WAV file.
//!
//! A minimal sequencer drives the engine with sample-counted note events and
//! streams the returned samples into `twinkle.wav`.

use simple_logger::SimpleLogger;

use q15_synth::engine::Synth;
use q15_synth::node::Source;
use q15_synth::pitch::hz_to_phase_increment;
use q15_synth::q15::Q15_MAX;
use q15_synth::wavegen::Waveform;
use q15_synth::{ms_to_samples, SAMPLE_RATE};

// Twinkle Twinkle Little Star; note 0 marks a rest.
const MELODY: [u8; 48] = [
    60, 60, 67, 67, 69, 69, 67, 0, 65, 65, 64, 64, 62, 62, 60, 0, //
    67, 67, 65, 65, 64, 64, 62, 0, 67, 67, 65, 65, 64, 64, 62, 0, //
    60, 60, 67, 67, 69, 69, 67, 0, 65, 65, 64, 64, 62, 62, 60, 0,
];

const BEATS: [u32; 48] = [
    4, 4, 4, 4, 4, 4, 2, 2, 4, 4, 4, 4, 4, 4, 2, 2, //
    4, 4, 4, 4, 4, 4, 2, 2, 4, 4, 4, 4, 4, 4, 2, 2, //
    4, 4, 4, 4, 4, 4, 2, 2, 4, 4, 4, 4, 4, 4, 2, 2,
];

fn main() {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .unwrap();

    let mut synth: Synth<2, 8> = Synth::new();

    // Lead voice: envelope-gated sawtooth with sine-LFO vibrato, low-pass
    // filter as the root node.
    let lead = synth.voice_mut(0);
    lead.configure_envelope(1, None, 500, 150, (Q15_MAX as i32 * 4 / 5) as i16, 150)
        .unwrap();
    lead.configure_oscillator(
        2,
        Some(Source::Value(hz_to_phase_increment(1_000))), // vibrato depth
        Source::Value(hz_to_phase_increment(500)),         // 5 Hz LFO
        None,
        Waveform::Sine,
    )
    .unwrap();
    lead.configure_oscillator(
        3,
        Some(Source::Node(1)),
        Source::PitchIncrement,
        Some(Source::Node(2)),
        Waveform::Sawtooth,
    )
    .unwrap();
    lead.configure_lowpass(0, None, Source::Node(3), 8000).unwrap();

    // Bass voice: square wave two octaves down behind a darker low-pass.
    let bass = synth.voice_mut(1);
    bass.configure_envelope(1, None, 100, 500, Q15_MAX / 2, 15)
        .unwrap();
    bass.configure_oscillator(
        2,
        Some(Source::Node(1)),
        Source::PitchIncrement,
        None,
        Waveform::Square,
    )
    .unwrap();
    bass.configure_lowpass(0, None, Source::Node(2), 4000).unwrap();

    let mut samples: Vec<i16> = Vec::new();
    let mut note_duration = 0_u32;
    let mut note_index = 0_usize;
    loop {
        if note_duration == 0 {
            note_duration = ms_to_samples(2000 / BEATS[note_index]);
            let note = MELODY[note_index];
            if note != 0 {
                synth.note_on(0, note);
                synth.note_on(1, note - 24);
            }
            note_index += 1;
            if note_index >= MELODY.len() {
                break;
            }
        } else if note_duration < 500 {
            // Cut the note slightly short to leave room for the release.
            synth.note_off(0);
            synth.note_off(1);
        }
        note_duration -= 1;

        samples.push(synth.process());
    }

    log::info!(
        "rendered {} samples ({:.1} s)",
        samples.len(),
        samples.len() as f32 / SAMPLE_RATE as f32
    );

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create("twinkle.wav", spec).unwrap();
    for sample in &samples {
        writer.write_sample(*sample).unwrap();
    }
    writer.finalize().unwrap();

    log::info!("wrote twinkle.wav");
}
