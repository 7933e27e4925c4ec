use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use std::process;

use wavegen::config;
use wavegen::synth::{self, SoundWaveFactory, WaveError};

/// Sine-Wave Note Generator and Waveform Analysis Tool
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a sine-wave note and write it to disk
    Note(NoteArgs),

    /// Print descriptive statistics for a waveform file
    Describe(DescribeArgs),

    /// Normalize text waveforms onto a common [0,1] range
    Normalize(NormalizeArgs),
}

/// Generate a sine-wave note and write it to disk
#[derive(Parser)]
struct NoteArgs {
    /// Note name, e.g. a4 or c#3 (use "0" for silence)
    #[arg(default_value = "a4")]
    note: String,

    /// Output filename stem (extension is added automatically)
    #[arg(short, long)]
    name: Option<String>,

    /// Output format: WAV writes 16-bit PCM, anything else writes text
    #[arg(short, long, default_value = "WAV")]
    format: String,

    /// Override the configured duration (seconds)
    #[arg(short, long)]
    duration: Option<f64>,
}

/// Print descriptive statistics for a waveform file
#[derive(Parser)]
struct DescribeArgs {
    /// Path to a .wav or .txt waveform file
    #[arg(required = true)]
    file: String,

    /// Sampling rate used for the duration calculation
    #[arg(short, long)]
    sampling_rate: Option<u32>,
}

/// Normalize text waveforms onto a common [0,1] range
#[derive(Parser)]
struct NormalizeArgs {
    /// Paths to the input .txt waveform files
    #[arg(required = true, num_args = 1..)]
    files: Vec<String>,

    /// Print normalized samples to stdout instead of writing files
    #[arg(short, long)]
    print: bool,
}

fn run_note_command(factory: &SoundWaveFactory, args: &NoteArgs) -> Result<(), WaveError> {
    let timeline = args
        .duration
        .map(|duration| synth::make_timeline(duration, factory.sampling_rate()));

    if args.format == "WAV" {
        factory.create_note(&args.note, args.name.as_deref(), timeline.as_deref())?;
    } else {
        let wave = factory.synthesize(&args.note, timeline.as_deref())?;
        let stem = match &args.name {
            Some(name) => name.clone(),
            None => format!("{}_sin", args.note).replace('#', "s"),
        };
        factory.save_wave(&wave, &stem, &args.format)?;
    }

    Ok(())
}

fn run_describe_command(factory: &SoundWaveFactory, args: &DescribeArgs) -> Result<(), WaveError> {
    let path = Path::new(&args.file);
    if !path.exists() {
        return Err(WaveError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("Waveform file not found: {}", args.file),
        )));
    }

    let (wave, file_rate) = load_waveform(path)?;
    factory.describe(&wave, args.sampling_rate.or(file_rate));

    Ok(())
}

fn run_normalize_command(
    factory: &SoundWaveFactory,
    args: &NormalizeArgs,
) -> Result<(), WaveError> {
    let waves = args
        .files
        .iter()
        .map(|file| factory.load_text_waveform(Path::new(file)))
        .collect::<Result<Vec<_>, _>>()?;

    let normalized = factory.normalize_waves(&waves)?;

    if args.print {
        for wave in &normalized {
            let line = wave
                .iter()
                .map(|sample| sample.to_string())
                .collect::<Vec<String>>()
                .join(" ");
            println!("{}", line);
        }
    } else {
        for (file, wave) in args.files.iter().zip(&normalized) {
            let path = normalized_output_path(Path::new(file));
            synth::save_txt(&path, wave)?;
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}

/// Load a waveform as floats, dispatching on the file extension.
///
/// WAV files also report their embedded sample rate so duration comes out
/// right without an explicit --sampling-rate.
fn load_waveform(path: &Path) -> Result<(Vec<f64>, Option<u32>), WaveError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("wav") => {
            let data = synth::read_wav_file(path)?;
            let samples = data.samples.iter().map(|&s| s as f64).collect();
            Ok((samples, Some(data.sample_rate)))
        }
        _ => Ok((synth::load_txt(path)?, None)),
    }
}

fn normalized_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "wave".to_string());
    input.with_file_name(format!("{}_norm.txt", stem))
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = config::load_config()?;
    let factory = SoundWaveFactory::with_config(&config);

    match &cli.command {
        Commands::Note(args) => run_note_command(&factory, args)?,
        Commands::Describe(args) => run_describe_command(&factory, args)?,
        Commands::Normalize(args) => run_normalize_command(&factory, args)?,
    }

    Ok(())
}

fn main() {
    match run() {
        Ok(_) => {}
        Err(err) => {
            eprintln!("\nERROR: {}\n", err);
            match err.downcast_ref::<WaveError>() {
                Some(WaveError::Io(ref io_err)) if io_err.kind() == io::ErrorKind::NotFound => {
                    eprintln!("Please check that:");
                    eprintln!("1. The file path is correct");
                    eprintln!("2. The file exists");
                    eprintln!("3. You have permission to read the file");
                }
                Some(WaveError::UnknownNote(ref _note)) => {
                    eprintln!("Note names run from e0 to d#7, plus \"0\" for silence.");
                }
                _ => {}
            }
            process::exit(1);
        }
    }
}
