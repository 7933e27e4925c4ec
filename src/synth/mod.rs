/// Sound synthesis module for generating sine-wave notes and working with
/// waveform files.
///
/// This module provides functionality to:
/// - Map note names to piano-key frequencies
/// - Synthesize sine waveforms over a sample timeline
/// - Save and load waveforms as WAV or plain-text files
/// - Compute descriptive statistics and normalize waveform collections
mod factory;
mod notes;
mod stats;
mod text;
mod types;
mod wav;

pub use factory::{
    make_timeline, SoundWaveFactory, Timeline, DURATION_SECONDS, MAX_AMPLITUDE, SAMPLING_RATE,
    SOUND_ARRAY_LEN,
};
pub use notes::note_frequency;
pub use stats::WaveStats;
pub use text::{load_txt, save_txt};
pub use types::{WaveError, WavData};
pub use wav::{read_wav_file, write_wav_file};
