use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use crossbeam_channel::{Receiver, Sender};

use echoscribe_core::media::infrastructure::ffmpeg_audio_reader::FfmpegAudioReader;
use echoscribe_core::media::infrastructure::text_file_writer::TextFileWriter;
use echoscribe_core::pipeline::infrastructure::worker_pool_executor::WorkerPoolExecutor;
use echoscribe_core::pipeline::job::{JobStatus, TranscriptionJob};
use echoscribe_core::pipeline::pipeline_logger::NullPipelineLogger;
use echoscribe_core::pipeline::transcribe_batch_use_case::TranscribeBatchUseCase;
use echoscribe_core::transcription::domain::model_size::ModelSize;
use echoscribe_core::transcription::domain::speech_recognizer::TranscribeOptions;
use echoscribe_core::transcription::infrastructure::whisper_recognizer::WhisperRecognizer;

use super::model_cache::ModelCache;

/// Messages sent from the worker thread to the UI.
#[derive(Debug, Clone)]
pub enum WorkerMessage {
    DownloadProgress(u64, u64),
    LoadingModel,
    FileStatus(usize, JobStatus),
    BatchProgress(usize, usize),
    Complete { done: usize, failed: usize },
    Error(String),
    Cancelled,
}

/// Parameters for a batch transcription run.
pub struct TranscribeParams {
    pub files: Vec<PathBuf>,
    pub model: ModelSize,
    /// ISO 639-1 hint; None = auto-detect.
    pub language: Option<String>,
    pub translate: bool,
    pub workers: usize,
    /// Shared cache for pre-resolved model paths.
    pub model_cache: Arc<ModelCache>,
}

/// Spawn a background transcription worker. Returns the channel receiver
/// and cancellation token; the UI polls the receiver on a timer.
pub fn spawn(params: TranscribeParams) -> (Receiver<WorkerMessage>, Arc<AtomicBool>) {
    let (tx, rx) = crossbeam_channel::unbounded::<WorkerMessage>();
    let cancelled = Arc::new(AtomicBool::new(false));
    let cancelled_clone = cancelled.clone();

    thread::spawn(move || {
        if let Err(e) = run_batch(&tx, &cancelled_clone, params) {
            if cancelled_clone.load(Ordering::Relaxed) {
                let _ = tx.send(WorkerMessage::Cancelled);
            } else {
                let _ = tx.send(WorkerMessage::Error(e.to_string()));
            }
        }
    });

    (rx, cancelled)
}

fn run_batch(
    tx: &Sender<WorkerMessage>,
    cancelled: &Arc<AtomicBool>,
    params: TranscribeParams,
) -> Result<(), Box<dyn std::error::Error>> {
    // Wait for the model (prefetched at startup or downloading now)
    let tx_dl = tx.clone();
    let model_path = params
        .model_cache
        .wait_for(
            params.model,
            &|downloaded, total| {
                let _ = tx_dl.send(WorkerMessage::DownloadProgress(downloaded, total));
            },
            cancelled,
        )
        .map_err(|e| -> Box<dyn std::error::Error> { e.into() })?;

    if cancelled.load(Ordering::Relaxed) {
        return Err("Cancelled".into());
    }

    let _ = tx.send(WorkerMessage::LoadingModel);
    let recognizer = WhisperRecognizer::new(&model_path)?;

    let jobs: Vec<TranscriptionJob> = params
        .files
        .into_iter()
        .map(|input| TranscriptionJob::from_input(input, None))
        .collect();

    let tx_status = tx.clone();
    let on_file_status: Box<dyn Fn(usize, &JobStatus) + Send> =
        Box::new(move |index, status| {
            let _ = tx_status.send(WorkerMessage::FileStatus(index, status.clone()));
        });

    let tx_progress = tx.clone();
    let cancelled_progress = cancelled.clone();
    let on_progress: Box<dyn Fn(usize, usize) -> bool + Send> =
        Box::new(move |completed, total| {
            let _ = tx_progress.send(WorkerMessage::BatchProgress(completed, total));
            !cancelled_progress.load(Ordering::Relaxed)
        });

    let options = TranscribeOptions {
        language: params.language,
        translate: params.translate,
    };

    let mut use_case = TranscribeBatchUseCase::new(
        Box::new(FfmpegAudioReader),
        Box::new(recognizer),
        Box::new(TextFileWriter),
        options,
        Box::new(WorkerPoolExecutor::new()),
        Box::new(NullPipelineLogger),
        Some(params.workers),
        Some(on_file_status),
        Some(on_progress),
        Some(cancelled.clone()),
    );

    let outcome = use_case.execute(&jobs)?;

    if cancelled.load(Ordering::Relaxed) {
        return Err("Cancelled".into());
    }

    let _ = tx.send(WorkerMessage::Complete {
        done: outcome.done_count(),
        failed: outcome.failed_count(),
    });
    Ok(())
}
