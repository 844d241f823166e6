//! Writer for WAV files

use std::path::Path;

use hound::*;

use q15_synth::SAMPLE_RATE;

/// Writes sample data as WAV file in 16-bit mono PCM format.
pub fn write(
    filename: impl AsRef<std::path::Path> + core::fmt::Display,
    samples: &[i16],
) -> std::io::Result<()> {
    let path = format!("out/{filename}");
    let path = Path::new(path.as_str());

    // Create parent directories to the path if they don't exist.
    let parent = path.parent().unwrap();
    std::fs::create_dir_all(parent).ok();

    let spec = WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec).unwrap();

    for sample in samples {
        writer.write_sample(*sample).unwrap();
    }

    Ok(())
}
