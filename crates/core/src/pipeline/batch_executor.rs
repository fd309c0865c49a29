use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::pipeline::job::{BatchOutcome, JobStatus, TranscriptionJob};
use crate::pipeline::pipeline_logger::PipelineLogger;
use crate::pipeline::transcribe_file_use_case::TranscribeFileUseCase;

/// Configuration for a batch execution run.
pub struct BatchConfig {
    /// Number of files processed concurrently.
    pub workers: usize,
    /// Called on the batch thread whenever a job changes status.
    pub on_file_status: Option<Box<dyn Fn(usize, &JobStatus) + Send>>,
    /// Called after each job finishes with `(completed, total)`.
    /// Returning `false` cancels the rest of the batch.
    pub on_progress: Option<Box<dyn Fn(usize, usize) -> bool + Send>>,
    pub cancelled: Arc<AtomicBool>,
}

/// Abstracts how the per-file pipeline is fanned out over a batch.
///
/// This is a port (application-layer interface). Infrastructure provides
/// concrete implementations (e.g. a fixed-size worker pool).
pub trait BatchExecutor: Send {
    fn execute(
        &self,
        file_use_case: Arc<TranscribeFileUseCase>,
        jobs: &[TranscriptionJob],
        logger: &mut dyn PipelineLogger,
        config: BatchConfig,
    ) -> Result<BatchOutcome, Box<dyn std::error::Error>>;
}
