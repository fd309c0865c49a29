use std::path::{Path, PathBuf};

use crate::shared::media_paths;

/// One unit of batch work: an input media file and where its transcript goes.
#[derive(Clone, Debug, PartialEq)]
pub struct TranscriptionJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl TranscriptionJob {
    /// Build a job with the standard `<stem>_transcription.txt` output,
    /// next to the input unless an override directory is given.
    pub fn from_input(input: PathBuf, output_dir: Option<&Path>) -> Self {
        let output = media_paths::transcription_output_path(&input, output_dir);
        Self { input, output }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum JobStatus {
    Pending,
    Running,
    Done,
    Failed(String),
}

impl JobStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Done | JobStatus::Failed(_))
    }
}

/// What one finished job reports back to the batch loop.
#[derive(Clone, Debug, Default)]
pub struct JobReport {
    pub detected_language: Option<String>,
    pub text_chars: usize,
    pub decode_ms: f64,
    pub transcribe_ms: f64,
    pub write_ms: f64,
}

/// Final per-job statuses for a batch run, positional with the input jobs.
#[derive(Debug)]
pub struct BatchOutcome {
    pub statuses: Vec<JobStatus>,
}

impl BatchOutcome {
    pub fn done_count(&self) -> usize {
        self.statuses
            .iter()
            .filter(|s| matches!(s, JobStatus::Done))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.statuses
            .iter()
            .filter(|s| matches!(s, JobStatus::Failed(_)))
            .count()
    }

    /// Jobs never started (batch was cancelled before they ran).
    pub fn pending_count(&self) -> usize {
        self.statuses
            .iter()
            .filter(|s| !s.is_terminal())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input_names_output_beside_input() {
        let job = TranscriptionJob::from_input(PathBuf::from("/media/talk.mp4"), None);
        assert_eq!(job.output, PathBuf::from("/media/talk_transcription.txt"));
    }

    #[test]
    fn test_from_input_with_output_dir() {
        let job =
            TranscriptionJob::from_input(PathBuf::from("/media/talk.mp3"), Some(Path::new("/out")));
        assert_eq!(job.output, PathBuf::from("/out/talk_transcription.txt"));
    }

    #[test]
    fn test_status_terminality() {
        assert!(!JobStatus::Pending.is_terminal());
        assert!(!JobStatus::Running.is_terminal());
        assert!(JobStatus::Done.is_terminal());
        assert!(JobStatus::Failed("x".to_string()).is_terminal());
    }

    #[test]
    fn test_outcome_counts() {
        let outcome = BatchOutcome {
            statuses: vec![
                JobStatus::Done,
                JobStatus::Failed("no audio".to_string()),
                JobStatus::Pending,
                JobStatus::Done,
            ],
        };
        assert_eq!(outcome.done_count(), 2);
        assert_eq!(outcome.failed_count(), 1);
        assert_eq!(outcome.pending_count(), 1);
    }
}
