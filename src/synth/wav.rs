use super::types::{WavData, WaveError};
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use std::path::Path;

/// Writes quantized samples to a mono 16-bit PCM WAV file.
///
/// # Arguments
/// * `path` - Destination path for the WAV file
/// * `samples` - Quantized 16-bit samples
/// * `sample_rate` - Sample rate in Hz
///
/// # Errors
/// * If the file cannot be created or written
pub fn write_wav_file(path: &Path, samples: &[i16], sample_rate: u32) -> Result<(), WaveError> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer =
        WavWriter::create(path, spec).map_err(|e| WaveError::Wav(e.to_string()))?;
    for &sample in samples {
        writer
            .write_sample(sample)
            .map_err(|e| WaveError::Wav(e.to_string()))?;
    }
    writer.finalize().map_err(|e| WaveError::Wav(e.to_string()))?;

    Ok(())
}

/// Reads a 16-bit integer WAV file back into its raw samples.
///
/// # Arguments
/// * `path` - Path to the WAV file to read
///
/// # Returns
/// * `Result<WavData, WaveError>` - Parsed WAV data or an error
///
/// # Errors
/// * If the file cannot be read
/// * If the WAV format is not 16-bit integer PCM
pub fn read_wav_file(path: &Path) -> Result<WavData, WaveError> {
    let reader = WavReader::open(path).map_err(|e| WaveError::Wav(e.to_string()))?;
    let spec = reader.spec();

    let samples: Vec<i16> = match (spec.sample_format, spec.bits_per_sample) {
        (SampleFormat::Int, 16) => reader
            .into_samples::<i16>()
            .map(|s| s.map_err(|e| WaveError::Wav(e.to_string())))
            .collect::<Result<Vec<i16>, WaveError>>()?,
        _ => {
            return Err(WaveError::Wav(format!(
                "Unsupported WAV format: {:?} {}-bit",
                spec.sample_format, spec.bits_per_sample
            )))
        }
    };

    Ok(WavData {
        samples,
        sample_rate: spec.sample_rate,
        channels: spec.channels,
    })
}
