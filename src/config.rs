use serde::Deserialize;
use std::fs::File;
use std::io::Read;

/// Configuration for the synthesizer and its output locations
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub synthesis: SynthesisConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Synthesis parameters
#[derive(Debug, Clone, Deserialize)]
pub struct SynthesisConfig {
    /// Sample rate in Hz
    #[serde(default = "default_sampling_rate")]
    pub sampling_rate: u32,
    /// Default waveform duration in seconds
    #[serde(default = "default_duration")]
    pub duration_seconds: f64,
    /// Peak amplitude applied to the unit sine before quantization
    #[serde(default = "default_max_amplitude")]
    pub max_amplitude: f64,
}

/// Output settings
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory where generated files are written
    #[serde(default = "default_output_dir")]
    pub directory: String,
}

fn default_sampling_rate() -> u32 {
    44100
}

fn default_duration() -> f64 {
    5.0
}

fn default_max_amplitude() -> f64 {
    8192.0
}

fn default_output_dir() -> String {
    ".".to_string()
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        SynthesisConfig {
            sampling_rate: default_sampling_rate(),
            duration_seconds: default_duration(),
            max_amplitude: default_max_amplitude(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            directory: default_output_dir(),
        }
    }
}

/// Load configuration from config.toml
pub fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
    // Try to load from config.toml
    match File::open("config.toml") {
        Ok(mut file) => {
            let mut contents = String::new();
            file.read_to_string(&mut contents)?;
            Ok(toml::from_str(&contents)?)
        }
        Err(_) => {
            // If file doesn't exist, return default config
            Ok(Config::default())
        }
    }
}
