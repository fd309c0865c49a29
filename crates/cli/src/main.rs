use std::path::PathBuf;
use std::process;

use clap::Parser;

use echoscribe_core::media::infrastructure::ffmpeg_audio_reader::FfmpegAudioReader;
use echoscribe_core::media::infrastructure::text_file_writer::TextFileWriter;
use echoscribe_core::pipeline::infrastructure::worker_pool_executor::WorkerPoolExecutor;
use echoscribe_core::pipeline::job::{JobStatus, TranscriptionJob};
use echoscribe_core::pipeline::pipeline_logger::StdoutPipelineLogger;
use echoscribe_core::pipeline::transcribe_batch_use_case::TranscribeBatchUseCase;
use echoscribe_core::shared::constants::{DEFAULT_WORKERS, SUPPORTED_LANGUAGES};
use echoscribe_core::shared::media_paths;
use echoscribe_core::shared::model_resolver;
use echoscribe_core::transcription::domain::model_size::ModelSize;
use echoscribe_core::transcription::domain::speech_recognizer::TranscribeOptions;
use echoscribe_core::transcription::infrastructure::whisper_recognizer::WhisperRecognizer;

/// Batch transcription of audio and video files with a local Whisper model.
#[derive(Parser)]
#[command(name = "echoscribe")]
struct Cli {
    /// Audio/video files or folders to transcribe.
    inputs: Vec<PathBuf>,

    /// Whisper model size: tiny, base, small, medium, or large.
    #[arg(long, default_value = "base")]
    model: ModelSize,

    /// Language code of the speech, or "auto" to let the model detect it.
    #[arg(long, default_value = "auto")]
    language: String,

    /// Translate the speech to English instead of transcribing it.
    #[arg(long)]
    translate: bool,

    /// Descend into subdirectories when an input is a folder.
    #[arg(long)]
    recursive: bool,

    /// Number of files to transcribe in parallel.
    #[arg(long, default_value_t = DEFAULT_WORKERS)]
    workers: usize,

    /// Write transcriptions here instead of next to each input.
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let files = collect_files(&cli)?;
    log::info!("Transcribing {} file(s) with the {} model", files.len(), cli.model);

    let model_path = model_resolver::resolve(cli.model, Some(Box::new(download_progress)))?;
    eprintln!();

    let language = match cli.language.as_str() {
        "auto" => None,
        code => Some(code.to_string()),
    };
    let options = TranscribeOptions {
        language,
        translate: cli.translate,
    };

    let recognizer = WhisperRecognizer::new(&model_path)?;

    let progress: Box<dyn Fn(usize, usize) -> bool + Send> = Box::new(|completed, total| {
        eprint!("\rTranscribing file {completed}/{total}");
        true
    });

    let mut use_case = TranscribeBatchUseCase::new(
        Box::new(FfmpegAudioReader),
        Box::new(recognizer),
        Box::new(TextFileWriter),
        options,
        Box::new(WorkerPoolExecutor::new()),
        Box::new(StdoutPipelineLogger::new()),
        Some(cli.workers),
        None,
        Some(progress),
        None,
    );

    let jobs: Vec<TranscriptionJob> = files
        .into_iter()
        .map(|input| TranscriptionJob::from_input(input, cli.output_dir.as_deref()))
        .collect();

    let outcome = use_case.execute(&jobs)?;
    eprintln!();

    for (job, status) in jobs.iter().zip(&outcome.statuses) {
        match status {
            JobStatus::Done => log::info!("Wrote {}", job.output.display()),
            JobStatus::Failed(msg) => log::warn!("Skipped {}: {msg}", job.input.display()),
            _ => {}
        }
    }
    log::info!(
        "Finished: {} transcribed, {} failed",
        outcome.done_count(),
        outcome.failed_count()
    );

    if outcome.done_count() == 0 {
        return Err("No files were transcribed".into());
    }
    Ok(())
}

/// Expand folder inputs into their media files; pass file inputs through.
fn collect_files(cli: &Cli) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let mut files = Vec::new();
    for input in &cli.inputs {
        if input.is_dir() {
            let found = media_paths::scan_folder(input, cli.recursive)?;
            if found.is_empty() {
                log::warn!("No media files found in {}", input.display());
            }
            files.extend(found);
        } else {
            files.push(input.clone());
        }
    }
    let mut seen = std::collections::HashSet::new();
    files.retain(|f| seen.insert(f.clone()));
    if files.is_empty() {
        return Err("No input files to transcribe".into());
    }
    Ok(files)
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.inputs.is_empty() {
        return Err("At least one input file or folder is required".into());
    }
    for input in &cli.inputs {
        if !input.exists() {
            return Err(format!("Input not found: {}", input.display()).into());
        }
        if input.is_file() && !media_paths::is_media_file(input) {
            return Err(format!("Not a supported media file: {}", input.display()).into());
        }
    }
    if cli.workers == 0 {
        return Err("Workers must be at least 1".into());
    }
    if cli.language != "auto" && !SUPPORTED_LANGUAGES.contains(&cli.language.as_str()) {
        return Err(format!(
            "Unsupported language '{}' (expected auto or one of: {})",
            cli.language,
            SUPPORTED_LANGUAGES.join(", ")
        )
        .into());
    }
    if let Some(ref dir) = cli.output_dir {
        if !dir.is_dir() {
            return Err(format!("Output directory not found: {}", dir.display()).into());
        }
    }
    Ok(())
}

fn download_progress(downloaded: u64, total: u64) {
    if total > 0 {
        let pct = (downloaded as f64 / total as f64 * 100.0) as u32;
        eprint!("\rDownloading Whisper model... {pct}%");
    } else {
        eprint!("\rDownloading Whisper model... {downloaded} bytes");
    }
}
