use super::types::WaveError;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes float samples as plain text, one sample per line.
///
/// Values use Rust's shortest round-trip float formatting, so a file written
/// here loads back with [`load_txt`] numerically unchanged.
pub fn save_txt(path: &Path, samples: &[f64]) -> Result<(), WaveError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for sample in samples {
        writeln!(writer, "{}", sample)?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads a whitespace/newline-delimited numeric text file into float samples.
///
/// # Errors
/// * `Io` if the file is missing or unreadable
/// * `MalformedData` if any token fails to parse as a float
pub fn load_txt(path: &Path) -> Result<Vec<f64>, WaveError> {
    let contents = fs::read_to_string(path)?;
    contents
        .split_whitespace()
        .map(|token| {
            token.parse::<f64>().map_err(|_| {
                WaveError::MalformedData(format!(
                    "invalid sample {:?} in {}",
                    token,
                    path.display()
                ))
            })
        })
        .collect()
}
