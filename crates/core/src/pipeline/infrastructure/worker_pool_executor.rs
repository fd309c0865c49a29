use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use crate::pipeline::batch_executor::{BatchConfig, BatchExecutor};
use crate::pipeline::job::{BatchOutcome, JobReport, JobStatus, TranscriptionJob};
use crate::pipeline::pipeline_logger::PipelineLogger;
use crate::pipeline::transcribe_file_use_case::TranscribeFileUseCase;

/// Events sent from worker threads back to the batch loop.
enum JobEvent {
    Started(usize),
    Finished(usize, JobReport),
    Failed(usize, String),
}

/// Executes a batch with a fixed-size pool of worker threads.
///
/// Layout: `queue → workers[N] → event loop (status/progress/logging)`
///
/// Workers pull jobs from a shared channel, so a slow file never stalls the
/// other slots. The event loop runs on the calling thread; UI callbacks and
/// the logger are only ever touched there.
pub struct WorkerPoolExecutor;

impl WorkerPoolExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WorkerPoolExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchExecutor for WorkerPoolExecutor {
    fn execute(
        &self,
        file_use_case: Arc<TranscribeFileUseCase>,
        jobs: &[TranscriptionJob],
        logger: &mut dyn PipelineLogger,
        config: BatchConfig,
    ) -> Result<BatchOutcome, Box<dyn std::error::Error>> {
        let total = jobs.len();
        let mut statuses = vec![JobStatus::Pending; total];
        if total == 0 {
            return Ok(BatchOutcome { statuses });
        }

        let workers = config.workers.clamp(1, total);

        // Queue every job up front; workers drain it until empty or cancelled.
        let (job_tx, job_rx) = crossbeam_channel::bounded::<(usize, TranscriptionJob)>(total);
        for (index, job) in jobs.iter().enumerate() {
            job_tx
                .send((index, job.clone()))
                .map_err(|_| "Job queue closed unexpectedly")?;
        }
        drop(job_tx);

        let (event_tx, event_rx) = crossbeam_channel::unbounded::<JobEvent>();

        let handles: Vec<_> = (0..workers)
            .map(|_| {
                spawn_worker(
                    file_use_case.clone(),
                    job_rx.clone(),
                    event_tx.clone(),
                    config.cancelled.clone(),
                )
            })
            .collect();
        drop(event_tx);

        let mut completed: usize = 0;
        for event in event_rx {
            match event {
                JobEvent::Started(index) => {
                    statuses[index] = JobStatus::Running;
                    notify_status(&config, index, &statuses[index]);
                }
                JobEvent::Finished(index, report) => {
                    statuses[index] = JobStatus::Done;
                    completed += 1;

                    logger.timing("decode", report.decode_ms);
                    logger.timing("transcribe", report.transcribe_ms);
                    logger.timing("write", report.write_ms);
                    if let Some(lang) = report.detected_language.as_deref() {
                        logger.info(&format!(
                            "{} done ({lang}, {} chars)",
                            jobs[index].input.display(),
                            report.text_chars
                        ));
                    }

                    notify_status(&config, index, &statuses[index]);
                    notify_progress(&config, logger, completed, total);
                }
                JobEvent::Failed(index, message) => {
                    logger.info(&format!("{} failed: {message}", jobs[index].input.display()));
                    statuses[index] = JobStatus::Failed(message);
                    completed += 1;

                    notify_status(&config, index, &statuses[index]);
                    notify_progress(&config, logger, completed, total);
                }
            }
        }

        let mut first_error: Option<Box<dyn std::error::Error>> = None;
        for handle in handles {
            if handle.join().is_err() && first_error.is_none() {
                first_error = Some("Worker thread panicked".into());
            }
        }

        logger.summary();

        match first_error {
            Some(e) => Err(e),
            None => Ok(BatchOutcome { statuses }),
        }
    }
}

fn spawn_worker(
    file_use_case: Arc<TranscribeFileUseCase>,
    job_rx: crossbeam_channel::Receiver<(usize, TranscriptionJob)>,
    event_tx: crossbeam_channel::Sender<JobEvent>,
    cancelled: Arc<AtomicBool>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        for (index, job) in job_rx {
            // Checked between jobs only: an in-flight transcription runs
            // to completion.
            if cancelled.load(Ordering::Relaxed) {
                break;
            }
            if event_tx.send(JobEvent::Started(index)).is_err() {
                break;
            }

            let event = match file_use_case.run(&job) {
                Ok(report) => JobEvent::Finished(index, report),
                Err(e) => JobEvent::Failed(index, e.to_string()),
            };
            if event_tx.send(event).is_err() {
                break;
            }
        }
    })
}

fn notify_status(config: &BatchConfig, index: usize, status: &JobStatus) {
    if let Some(ref callback) = config.on_file_status {
        callback(index, status);
    }
}

fn notify_progress(
    config: &BatchConfig,
    logger: &mut dyn PipelineLogger,
    completed: usize,
    total: usize,
) {
    logger.progress(completed, total);
    if let Some(ref callback) = config.on_progress {
        if !callback(completed, total) {
            config.cancelled.store(true, Ordering::Relaxed);
        }
    }
}
