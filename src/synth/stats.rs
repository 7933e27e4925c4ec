use std::fmt;

use super::factory::SAMPLING_RATE;

/// Descriptive statistics for a waveform buffer.
///
/// Recomputed on demand from a sample slice; nothing here is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveStats {
    /// Length of the waveform in seconds at the given sampling rate
    pub duration: f64,
    /// Smallest sample value
    pub min: f64,
    /// Largest sample value
    pub max: f64,
    /// Arithmetic mean of the samples
    pub mean: f64,
    /// Population standard deviation of the samples
    pub std_dev: f64,
    /// Number of samples
    pub len: usize,
}

impl WaveStats {
    /// Computes statistics over a sample buffer.
    ///
    /// A `sampling_rate` of `None` or `Some(0)` falls back to the default
    /// 44100 Hz.
    pub fn from_samples(wave: &[f64], sampling_rate: Option<u32>) -> Self {
        let rate = match sampling_rate {
            Some(rate) if rate > 0 => rate,
            _ => SAMPLING_RATE,
        };

        let len = wave.len();
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for &sample in wave {
            min = min.min(sample);
            max = max.max(sample);
            sum += sample;
        }
        let mean = sum / len as f64;
        let variance = wave
            .iter()
            .map(|&sample| (sample - mean) * (sample - mean))
            .sum::<f64>()
            / len as f64;

        WaveStats {
            duration: len as f64 / rate as f64,
            min,
            max,
            mean,
            std_dev: variance.sqrt(),
            len,
        }
    }
}

impl fmt::Display for WaveStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Duration: {}", self.duration)?;
        writeln!(f, "Min Amplitude: {}", self.min)?;
        writeln!(f, "Max Amplitude: {}", self.max)?;
        writeln!(f, "Mean Amplitude: {}", self.mean)?;
        writeln!(f, "Standard Deviation: {}", self.std_dev)?;
        write!(f, "Wave Length: {}", self.len)
    }
}
