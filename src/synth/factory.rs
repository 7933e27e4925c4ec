use std::collections::HashMap;
use std::f64::consts::PI;
use std::path::{Path, PathBuf};

use super::notes::NOTES;
use super::stats::WaveStats;
use super::text;
use super::types::WaveError;
use super::wav;
use crate::config::Config;

/// Default sample rate in Hz (44.1 kHz)
pub const SAMPLING_RATE: u32 = 44100;
/// Default waveform duration in seconds
pub const DURATION_SECONDS: f64 = 5.0;
/// Default sample count: sampling rate times duration
pub const SOUND_ARRAY_LEN: usize = 220500;
/// Peak amplitude used when scaling the unit sine (2^13)
pub const MAX_AMPLITUDE: f64 = 8192.0;

/// Ordered sequence of sample instants used to evaluate the sine function.
pub type Timeline = Vec<f64>;

/// Builds a timeline of `duration_seconds` at `sampling_rate`, with sample
/// instants uniformly spaced from 0 to the duration inclusive.
pub fn make_timeline(duration_seconds: f64, sampling_rate: u32) -> Timeline {
    let len = (sampling_rate as f64 * duration_seconds).round() as usize;
    linspace(duration_seconds, len)
}

/// Uniformly spaced values from 0 to `duration_seconds` inclusive.
fn linspace(duration_seconds: f64, len: usize) -> Timeline {
    if len <= 1 {
        return vec![0.0; len];
    }
    let step = duration_seconds / (len - 1) as f64;
    (0..len).map(|i| i as f64 * step).collect()
}

/// Generates sine waveforms for musical notes and moves waveform buffers
/// to and from storage.
///
/// The note table and the default timeline are built once at construction
/// and read thereafter. Waveforms are created per call and only survive the
/// process when explicitly saved.
pub struct SoundWaveFactory {
    notes: HashMap<&'static str, f64>,
    timeline: Timeline,
    sampling_rate: u32,
    max_amplitude: f64,
    output_dir: PathBuf,
}

impl SoundWaveFactory {
    /// Creates a factory with the default 44100 Hz rate and 5 second timeline.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Creates a factory from a loaded configuration.
    pub fn with_config(config: &Config) -> Self {
        let len = (config.synthesis.sampling_rate as f64 * config.synthesis.duration_seconds)
            .round() as usize;
        SoundWaveFactory {
            notes: NOTES.iter().copied().collect(),
            timeline: linspace(config.synthesis.duration_seconds, len),
            sampling_rate: config.synthesis.sampling_rate,
            max_amplitude: config.synthesis.max_amplitude,
            output_dir: PathBuf::from(&config.output.directory),
        }
    }

    /// The factory's shared default timeline.
    pub fn timeline(&self) -> &[f64] {
        &self.timeline
    }

    /// The factory's sample rate in Hz.
    pub fn sampling_rate(&self) -> u32 {
        self.sampling_rate
    }

    /// Synthesizes a sine waveform for `note` over `timeline`, or over the
    /// factory's default timeline when `timeline` is `None`.
    ///
    /// Each sample is `max_amplitude * sin(2π * frequency * t)`.
    ///
    /// # Errors
    /// * `UnknownNote` if `note` is not in the note table
    pub fn synthesize(&self, note: &str, timeline: Option<&[f64]>) -> Result<Vec<f64>, WaveError> {
        let frequency = self
            .notes
            .get(note)
            .copied()
            .ok_or_else(|| WaveError::UnknownNote(note.to_string()))?;
        let timeline = timeline.unwrap_or(&self.timeline);

        Ok(timeline
            .iter()
            .map(|&t| self.max_amplitude * (2.0 * PI * frequency * t).sin())
            .collect())
    }

    /// Synthesizes `note`, quantizes it to 16-bit samples, and writes it as a
    /// mono WAV file in the output directory.
    ///
    /// The filename is `"<name>.wav"` when `name` is given, otherwise
    /// `"<note>_sin.wav"` with every `#` replaced by `s` so sharps stay
    /// filesystem-safe (`"a#4"` becomes `"as4_sin.wav"`).
    ///
    /// Returns the quantized waveform.
    pub fn create_note(
        &self,
        note: &str,
        name: Option<&str>,
        timeline: Option<&[f64]>,
    ) -> Result<Vec<i16>, WaveError> {
        let sound_wave = quantize(&self.synthesize(note, timeline)?);

        let file_name = match name {
            Some(name) => format!("{}.wav", name),
            None => format!("{}_sin.wav", note).replace('#', "s"),
        };
        wav::write_wav_file(&self.output_dir.join(file_name), &sound_wave, self.sampling_rate)?;

        Ok(sound_wave)
    }

    /// Reads a whitespace-delimited numeric text file into a float waveform.
    pub fn load_text_waveform(&self, path: &Path) -> Result<Vec<f64>, WaveError> {
        text::load_txt(path)
    }

    /// Computes statistics for `wave` and prints the report to stdout.
    ///
    /// A `sampling_rate` of `None` or `Some(0)` falls back to the factory's
    /// rate.
    pub fn describe(&self, wave: &[f64], sampling_rate: Option<u32>) {
        let rate = match sampling_rate {
            Some(rate) if rate > 0 => rate,
            _ => self.sampling_rate,
        };
        println!("{}", WaveStats::from_samples(wave, Some(rate)));
    }

    /// Rescales a collection of waveforms onto a common [0,1] range.
    ///
    /// Every input is first truncated to the shortest input's length (a
    /// destructive crop, no resampling), then a single global min and max are
    /// taken over all truncated samples and each wave is mapped elementwise
    /// to `(x - min) / (max - min)`.
    ///
    /// # Errors
    /// * `EmptyNormalize` if `waves` is empty
    /// * `DegenerateRange` if the global min equals the global max
    pub fn normalize_waves(&self, waves: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, WaveError> {
        let min_length = waves
            .iter()
            .map(|wave| wave.len())
            .min()
            .ok_or(WaveError::EmptyNormalize)?;
        let trimmed: Vec<&[f64]> = waves.iter().map(|wave| &wave[..min_length]).collect();

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for wave in &trimmed {
            for &sample in *wave {
                min = min.min(sample);
                max = max.max(sample);
            }
        }
        if min == max {
            return Err(WaveError::DegenerateRange);
        }

        let range = max - min;
        Ok(trimmed
            .iter()
            .map(|wave| wave.iter().map(|&sample| (sample - min) / range).collect())
            .collect())
    }

    /// Saves a float waveform under `file_name` in the output directory.
    ///
    /// When `file_type` is exactly `"WAV"` the wave is quantized to 16-bit
    /// samples and written as `"<file_name>.wav"`; any other value takes the
    /// text path and writes `"<file_name>.txt"`. Returns the path written.
    pub fn save_wave(
        &self,
        wave: &[f64],
        file_name: &str,
        file_type: &str,
    ) -> Result<PathBuf, WaveError> {
        if file_type == "WAV" {
            let path = self.output_dir.join(format!("{}.wav", file_name));
            wav::write_wav_file(&path, &quantize(wave), self.sampling_rate)?;
            Ok(path)
        } else {
            let path = self.output_dir.join(format!("{}.txt", file_name));
            text::save_txt(&path, wave)?;
            Ok(path)
        }
    }
}

impl Default for SoundWaveFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Quantizes float samples to 16-bit integers by truncation toward zero.
fn quantize(wave: &[f64]) -> Vec<i16> {
    wave.iter().map(|&sample| sample as i16).collect()
}
