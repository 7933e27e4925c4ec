// Integration tests for the wave generation pipeline
//
// These tests verify the end-to-end flow: synthesize notes, persist them as
// text, reload them, compute statistics, normalize the collection, and write
// the result back out as WAV. They exercise the same sequence of operations
// a user of the CLI composes from the note/describe/normalize subcommands.

use wavegen::config::Config;
use wavegen::synth::{read_wav_file, SoundWaveFactory, WaveStats, SOUND_ARRAY_LEN};

mod test_utils;
use test_utils::{factory_in, scratch_dir};

/// Test the full generate/save/reload/analyze/normalize pipeline.
///
/// This test verifies:
/// - Two notes generate as WAV with the expected default filenames
/// - Quantized waves persist as text and reload unchanged
/// - Reloaded waves report a 5 second duration at 44100 Hz
/// - The normalized pair stays within [0,1] at full length
/// - A reloaded wave written back as WAV reads with the original contents
#[test]
fn test_generate_analyze_normalize_pipeline() {
    let dir = scratch_dir("pipeline");
    let factory = factory_in(&dir);

    let a4 = factory
        .create_note("a4", None, None)
        .expect("Failed to create a4");
    let a1 = factory
        .create_note("a1", None, None)
        .expect("Failed to create a1");
    assert!(dir.join("a4_sin.wav").exists());
    assert!(dir.join("a1_sin.wav").exists());

    let a4_float: Vec<f64> = a4.iter().map(|&s| s as f64).collect();
    let a1_float: Vec<f64> = a1.iter().map(|&s| s as f64).collect();
    factory
        .save_wave(&a4_float, "a4_wave", "txt")
        .expect("Failed to save a4 text");
    factory
        .save_wave(&a1_float, "a1_wave", "txt")
        .expect("Failed to save a1 text");

    let a4_reloaded = factory
        .load_text_waveform(&dir.join("a4_wave.txt"))
        .expect("Failed to reload a4");
    let a1_reloaded = factory
        .load_text_waveform(&dir.join("a1_wave.txt"))
        .expect("Failed to reload a1");
    assert_eq!(a4_reloaded, a4_float);
    assert_eq!(a1_reloaded, a1_float);

    let stats = WaveStats::from_samples(&a4_reloaded, None);
    assert_eq!(stats.duration, 5.0);
    assert_eq!(stats.len, SOUND_ARRAY_LEN);
    assert!(stats.max <= 8192.0);
    assert!(stats.min >= -8192.0);

    let normalized = factory
        .normalize_waves(&[a1_reloaded.clone(), a4_reloaded])
        .expect("Failed to normalize");
    assert_eq!(normalized.len(), 2);
    for wave in &normalized {
        assert_eq!(wave.len(), SOUND_ARRAY_LEN);
        assert!(wave.iter().all(|&s| (0.0..=1.0).contains(&s)));
    }

    let wav_path = factory
        .save_wave(&a1_reloaded, "a1_wave_as_wav", "WAV")
        .expect("Failed to save WAV");
    let data = read_wav_file(&wav_path).expect("Failed to read WAV back");
    assert_eq!(data.sample_rate, 44100);
    assert_eq!(data.samples, a1);
}

/// Test the end-to-end WAV contract for a generated note.
///
/// A default a4 note must produce a file a standard WAV reader opens as
/// mono 16-bit PCM at 44100 Hz with 220500 samples, and statistics over the
/// loaded samples must report a duration of exactly 5 seconds.
#[test]
fn test_generated_wav_contract() {
    let dir = scratch_dir("wav_contract");
    let factory = factory_in(&dir);

    factory
        .create_note("a4", None, None)
        .expect("Failed to create note");

    let data = read_wav_file(&dir.join("a4_sin.wav")).expect("Failed to read WAV");
    assert_eq!(data.sample_rate, 44100);
    assert_eq!(data.channels, 1);
    assert_eq!(data.samples.len(), 220500);

    let float_samples: Vec<f64> = data.samples.iter().map(|&s| s as f64).collect();
    let stats = WaveStats::from_samples(&float_samples, Some(data.sample_rate));
    assert_eq!(stats.duration, 5.0);
}

/// Test configuration parsing and its effect on the factory.
///
/// This test verifies:
/// - Defaults match the documented synthesis constants
/// - A partial config.toml keeps defaults for omitted fields
/// - A configured duration changes the timeline length
#[test]
fn test_config_drives_factory() {
    let config = Config::default();
    assert_eq!(config.synthesis.sampling_rate, 44100);
    assert_eq!(config.synthesis.duration_seconds, 5.0);
    assert_eq!(config.synthesis.max_amplitude, 8192.0);
    assert_eq!(config.output.directory, ".");

    let config: Config = toml::from_str(
        r#"
        [synthesis]
        duration_seconds = 1.0
        "#,
    )
    .expect("Failed to parse config");
    assert_eq!(config.synthesis.duration_seconds, 1.0);
    assert_eq!(config.synthesis.sampling_rate, 44100);

    let factory = SoundWaveFactory::with_config(&config);
    assert_eq!(factory.timeline().len(), 44100);
}
