use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::media::domain::audio_reader::AudioReader;
use crate::media::domain::transcript_writer::TranscriptWriter;
use crate::pipeline::batch_executor::{BatchConfig, BatchExecutor};
use crate::pipeline::job::{BatchOutcome, JobStatus, TranscriptionJob};
use crate::pipeline::pipeline_logger::PipelineLogger;
use crate::pipeline::transcribe_file_use_case::TranscribeFileUseCase;
use crate::shared::constants::DEFAULT_WORKERS;
use crate::transcription::domain::speech_recognizer::{SpeechRecognizer, TranscribeOptions};

/// Orchestrates a full batch transcription run.
///
/// Wires domain components together and delegates fan-out to a
/// `BatchExecutor`. This is a single-use struct: `execute` consumes the
/// owned components, so calling it twice will fail.
pub struct TranscribeBatchUseCase {
    file_use_case: Option<Arc<TranscribeFileUseCase>>,
    executor: Box<dyn BatchExecutor>,
    logger: Option<Box<dyn PipelineLogger>>,
    workers: usize,
    on_file_status: Option<Box<dyn Fn(usize, &JobStatus) + Send>>,
    on_progress: Option<Box<dyn Fn(usize, usize) -> bool + Send>>,
    cancelled: Arc<AtomicBool>,
}

impl TranscribeBatchUseCase {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        reader: Box<dyn AudioReader>,
        recognizer: Box<dyn SpeechRecognizer>,
        writer: Box<dyn TranscriptWriter>,
        options: TranscribeOptions,
        executor: Box<dyn BatchExecutor>,
        logger: Box<dyn PipelineLogger>,
        workers: Option<usize>,
        on_file_status: Option<Box<dyn Fn(usize, &JobStatus) + Send>>,
        on_progress: Option<Box<dyn Fn(usize, usize) -> bool + Send>>,
        cancelled: Option<Arc<AtomicBool>>,
    ) -> Self {
        Self {
            file_use_case: Some(Arc::new(TranscribeFileUseCase::new(
                reader, recognizer, writer, options,
            ))),
            executor,
            logger: Some(logger),
            workers: workers.unwrap_or(DEFAULT_WORKERS),
            on_file_status,
            on_progress,
            cancelled: cancelled.unwrap_or_else(|| Arc::new(AtomicBool::new(false))),
        }
    }

    pub fn execute(
        &mut self,
        jobs: &[TranscriptionJob],
    ) -> Result<BatchOutcome, Box<dyn std::error::Error>> {
        let file_use_case = self
            .file_use_case
            .take()
            .ok_or("Batch already executed")?;
        let mut logger = self.logger.take().ok_or("Batch already executed")?;

        let config = BatchConfig {
            workers: self.workers,
            on_file_status: self.on_file_status.take(),
            on_progress: self.on_progress.take(),
            cancelled: self.cancelled.clone(),
        };

        self.executor
            .execute(file_use_case, jobs, &mut *logger, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::infrastructure::worker_pool_executor::WorkerPoolExecutor;
    use crate::pipeline::pipeline_logger::NullPipelineLogger;
    use crate::transcription::domain::audio_segment::AudioSegment;
    use crate::transcription::domain::transcript::{Transcript, TranscriptSegment};
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    // --- Stubs ---

    struct StubReader;

    impl AudioReader for StubReader {
        fn read_audio(
            &self,
            _: &Path,
            _: u32,
        ) -> Result<Option<AudioSegment>, Box<dyn std::error::Error>> {
            Ok(Some(AudioSegment::new(vec![0.0; 1600], 16000)))
        }
    }

    struct StubRecognizer;

    impl SpeechRecognizer for StubRecognizer {
        fn transcribe(
            &self,
            _: &AudioSegment,
            _: &TranscribeOptions,
        ) -> Result<Transcript, Box<dyn std::error::Error>> {
            Ok(Transcript {
                segments: vec![TranscriptSegment {
                    text: "words".to_string(),
                    start_time: 0.0,
                    end_time: 1.0,
                }],
                detected_language: None,
            })
        }
    }

    #[allow(clippy::type_complexity)]
    struct StubWriter {
        written: Arc<Mutex<Vec<(PathBuf, String)>>>,
    }

    impl TranscriptWriter for StubWriter {
        fn write(
            &self,
            path: &Path,
            transcript: &Transcript,
        ) -> Result<(), Box<dyn std::error::Error>> {
            self.written
                .lock()
                .unwrap()
                .push((path.to_path_buf(), transcript.text()));
            Ok(())
        }
    }

    // --- Helpers ---

    fn make_jobs(count: usize) -> Vec<TranscriptionJob> {
        (0..count)
            .map(|i| TranscriptionJob::from_input(PathBuf::from(format!("/media/f{i}.wav")), None))
            .collect()
    }

    #[allow(clippy::type_complexity)]
    fn make_use_case(written: Arc<Mutex<Vec<(PathBuf, String)>>>) -> TranscribeBatchUseCase {
        TranscribeBatchUseCase::new(
            Box::new(StubReader),
            Box::new(StubRecognizer),
            Box::new(StubWriter { written }),
            TranscribeOptions::default(),
            Box::new(WorkerPoolExecutor::new()),
            Box::new(NullPipelineLogger),
            None,
            None,
            None,
            None,
        )
    }

    // --- Tests ---

    #[test]
    fn test_transcribes_every_job() {
        let written = Arc::new(Mutex::new(Vec::new()));
        let mut uc = make_use_case(written.clone());

        let outcome = uc.execute(&make_jobs(4)).unwrap();

        assert_eq!(outcome.done_count(), 4);
        assert_eq!(written.lock().unwrap().len(), 4);
    }

    #[test]
    fn test_writes_go_to_job_outputs() {
        let written = Arc::new(Mutex::new(Vec::new()));
        let mut uc = make_use_case(written.clone());

        uc.execute(&make_jobs(1)).unwrap();

        let written = written.lock().unwrap();
        assert_eq!(written[0].0, PathBuf::from("/media/f0_transcription.txt"));
        assert_eq!(written[0].1, "words");
    }

    #[test]
    fn test_second_execute_fails() {
        let mut uc = make_use_case(Arc::new(Mutex::new(Vec::new())));

        uc.execute(&make_jobs(1)).unwrap();
        let err = uc.execute(&make_jobs(1)).unwrap_err().to_string();
        assert!(err.contains("already executed"), "got: {err}");
    }

    #[test]
    fn test_empty_job_list_is_ok() {
        let mut uc = make_use_case(Arc::new(Mutex::new(Vec::new())));
        let outcome = uc.execute(&[]).unwrap();
        assert!(outcome.statuses.is_empty());
    }
}
