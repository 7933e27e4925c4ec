// Test utilities and common constants
//
// This file provides shared utilities used across multiple test files.
// It centralizes scratch directory creation and factory construction to
// avoid duplication and ensure consistency across tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};

use wavegen::config::Config;
use wavegen::synth::SoundWaveFactory;

static NEXT_DIR: AtomicU32 = AtomicU32::new(0);

/// Create a fresh scratch directory for a test.
///
/// Each call returns a unique directory under the system temp dir, so tests
/// never collide on output filenames.
pub fn scratch_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "wavegen_test_{}_{}_{}",
        label,
        std::process::id(),
        NEXT_DIR.fetch_add(1, Ordering::Relaxed)
    ));
    fs::create_dir_all(&dir).expect("Failed to create scratch directory");
    dir
}

/// Build a factory with default synthesis settings that writes into `dir`.
#[allow(dead_code)]
pub fn factory_in(dir: &Path) -> SoundWaveFactory {
    let mut config = Config::default();
    config.output.directory = dir.to_string_lossy().into_owned();
    SoundWaveFactory::with_config(&config)
}

/// Build a factory with a shortened timeline that writes into `dir`.
///
/// Useful for tests that exercise file paths and do not care about the full
/// five-second buffer.
#[allow(dead_code)]
pub fn short_factory_in(dir: &Path, duration_seconds: f64) -> SoundWaveFactory {
    let mut config = Config::default();
    config.synthesis.duration_seconds = duration_seconds;
    config.output.directory = dir.to_string_lossy().into_owned();
    SoundWaveFactory::with_config(&config)
}
