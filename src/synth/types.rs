/// Represents the data from a WAV file after reading
#[derive(Debug)]
pub struct WavData {
    /// Raw 16-bit PCM samples
    pub samples: Vec<i16>,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of audio channels
    pub channels: u16,
}

/// Errors that can occur during synthesis and waveform I/O
#[derive(Debug, thiserror::Error)]
pub enum WaveError {
    /// IO errors when reading/writing files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors during WAV file reading or writing
    #[error("WAV error: {0}")]
    Wav(String),

    /// Note identifier absent from the note table
    #[error("unknown note: {0}")]
    UnknownNote(String),

    /// Non-numeric content in a text waveform file
    #[error("malformed waveform data: {0}")]
    MalformedData(String),

    /// Normalization called with no input waveforms
    #[error("normalization requires at least one waveform")]
    EmptyNormalize,

    /// Normalization over waveforms whose global min equals the global max
    #[error("cannot normalize: amplitude range is zero (min == max)")]
    DegenerateRange,
}
