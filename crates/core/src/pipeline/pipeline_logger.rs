use std::collections::HashMap;
use std::time::Instant;

/// Cross-cutting logger for batch orchestration events.
///
/// Decouples the batch loop from specific output mechanisms (stdout, GUI
/// signals, log crate) so each caller can observe batch behavior without
/// changing the orchestration code.
pub trait PipelineLogger: Send {
    /// Report file-level progress (completed out of total).
    fn progress(&mut self, completed: usize, total: usize);

    /// Record how long a named pipeline stage took for one file.
    fn timing(&mut self, stage: &str, duration_ms: f64);

    /// Log a human-readable status message.
    fn info(&mut self, message: &str);

    /// Emit an end-of-batch summary. Default: no-op.
    fn summary(&self) {}
}

/// Silent logger that discards all events.
///
/// Used by the desktop GUI (which has its own channel-based progress)
/// and by tests where logger output is irrelevant.
pub struct NullPipelineLogger;

impl PipelineLogger for NullPipelineLogger {
    fn progress(&mut self, _completed: usize, _total: usize) {}
    fn timing(&mut self, _stage: &str, _duration_ms: f64) {}
    fn info(&mut self, _message: &str) {}
}

/// CLI-oriented logger that tracks per-stage timing and produces a summary
/// report at batch completion.
pub struct StdoutPipelineLogger {
    timings: HashMap<String, Vec<f64>>,
    start_time: Instant,
    total_files: usize,
    completed_files: usize,
    messages: Vec<String>,
}

impl StdoutPipelineLogger {
    pub fn new() -> Self {
        Self {
            timings: HashMap::new(),
            start_time: Instant::now(),
            total_files: 0,
            completed_files: 0,
            messages: Vec::new(),
        }
    }

    /// Returns the formatted summary string, or `None` if no data recorded.
    pub fn summary_string(&self) -> Option<String> {
        if self.timings.is_empty() {
            return None;
        }

        let elapsed_ms = self.start_time.elapsed().as_secs_f64() * 1000.0;
        let files = self.completed_files;
        let mut lines = Vec::new();

        lines.push(format!(
            "Batch summary ({files} files, {:.1}s total):",
            elapsed_ms / 1000.0
        ));

        let mut stages: Vec<_> = self.timings.keys().collect();
        stages.sort();
        for stage in stages {
            let durations = &self.timings[stage];
            let total_ms: f64 = durations.iter().sum();
            let avg_ms = if durations.is_empty() {
                0.0
            } else {
                total_ms / durations.len() as f64
            };
            lines.push(format!(
                "  {stage:12}: avg {avg_ms:7.0}ms  total {total_ms:8.0}ms"
            ));
        }

        Some(lines.join("\n"))
    }

    /// Returns the timing data for a given stage.
    pub fn timings_for(&self, stage: &str) -> Option<&[f64]> {
        self.timings.get(stage).map(|v| v.as_slice())
    }
}

impl Default for StdoutPipelineLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineLogger for StdoutPipelineLogger {
    fn progress(&mut self, completed: usize, total: usize) {
        self.total_files = total;
        self.completed_files = completed;
        if total > 0 {
            let pct = completed as f64 / total as f64 * 100.0;
            log::info!("Transcribed: {completed}/{total} files ({pct:.0}%)");
        }
    }

    fn timing(&mut self, stage: &str, duration_ms: f64) {
        self.timings
            .entry(stage.to_string())
            .or_default()
            .push(duration_ms);
    }

    fn info(&mut self, message: &str) {
        self.messages.push(message.to_string());
        log::info!("{message}");
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("\n\n{text}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_logger_all_methods_are_noop() {
        let mut logger = NullPipelineLogger;
        logger.progress(1, 10);
        logger.timing("transcribe", 5.0);
        logger.info("hello");
        logger.summary();
        // No panics = success
    }

    #[test]
    fn test_timing_records_values() {
        let mut logger = StdoutPipelineLogger::new();
        logger.timing("decode", 20.0);
        logger.timing("decode", 30.0);
        logger.timing("write", 5.0);

        let decode = logger.timings_for("decode").unwrap();
        assert_eq!(decode.len(), 2);
        assert!((decode[0] - 20.0).abs() < f64::EPSILON);
        assert!((decode[1] - 30.0).abs() < f64::EPSILON);

        let write = logger.timings_for("write").unwrap();
        assert_eq!(write.len(), 1);
    }

    #[test]
    fn test_summary_lists_stages() {
        let mut logger = StdoutPipelineLogger::new();
        logger.progress(2, 2);
        logger.timing("decode", 20.0);
        logger.timing("transcribe", 900.0);

        let summary = logger.summary_string().unwrap();
        assert!(summary.contains("Batch summary"));
        assert!(summary.contains("2 files"));
        assert!(summary.contains("decode"));
        assert!(summary.contains("transcribe"));
    }

    #[test]
    fn test_empty_summary_returns_none() {
        let logger = StdoutPipelineLogger::new();
        assert!(logger.summary_string().is_none());
    }

    #[test]
    fn test_progress_tracks_counts() {
        let mut logger = StdoutPipelineLogger::new();
        for i in 1..=5 {
            logger.progress(i, 5);
        }
        assert_eq!(logger.completed_files, 5);
        assert_eq!(logger.total_files, 5);
    }

    #[test]
    fn test_info_stores_messages() {
        let mut logger = StdoutPipelineLogger::new();
        logger.info("talk.mp4 failed: no audio track");
        assert_eq!(logger.messages.len(), 1);
        assert!(logger.messages[0].contains("no audio track"));
    }
}
