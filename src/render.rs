use std::fs;
use std::path::Path;

use crate::synth::{BIT_DEPTH, CHANNELS};

/// Writes a finished PCM buffer as a mono 16 bit WAV at the engine's
/// sample rate, creating the target directory when missing. The audio
/// device collaborator is external; this is the only materialization the
/// crate performs.
pub fn write_pcm(sample_rate: usize, samples: &[i16], filename: &str) -> Result<(), hound::Error> {
    let path = Path::new(filename);
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }

    let spec = hound::WavSpec {
        channels: CHANNELS,
        sample_rate: sample_rate as u32,
        bits_per_sample: BIT_DEPTH,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec)?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}
