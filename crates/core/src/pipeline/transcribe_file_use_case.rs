use std::time::Instant;

use crate::media::domain::audio_reader::AudioReader;
use crate::media::domain::transcript_writer::TranscriptWriter;
use crate::pipeline::job::{JobReport, TranscriptionJob};
use crate::shared::constants::WHISPER_SAMPLE_RATE;
use crate::transcription::domain::speech_recognizer::{SpeechRecognizer, TranscribeOptions};

/// Runs the full pipeline for a single file: decode the audio track,
/// transcribe it, write the text output.
///
/// Shared across worker threads via `Arc`; all components are used through
/// `&self`, so one loaded model serves every worker.
pub struct TranscribeFileUseCase {
    reader: Box<dyn AudioReader>,
    recognizer: Box<dyn SpeechRecognizer>,
    writer: Box<dyn TranscriptWriter>,
    options: TranscribeOptions,
}

impl TranscribeFileUseCase {
    pub fn new(
        reader: Box<dyn AudioReader>,
        recognizer: Box<dyn SpeechRecognizer>,
        writer: Box<dyn TranscriptWriter>,
        options: TranscribeOptions,
    ) -> Self {
        Self {
            reader,
            recognizer,
            writer,
            options,
        }
    }

    pub fn run(&self, job: &TranscriptionJob) -> Result<JobReport, Box<dyn std::error::Error>> {
        // 1. Decode the audio track (audio extraction from video is the
        //    same decode path)
        let decode_start = Instant::now();
        let audio = self
            .reader
            .read_audio(&job.input, WHISPER_SAMPLE_RATE)
            .map_err(|e| format!("Failed to decode {}: {e}", job.input.display()))?;
        let audio = match audio {
            Some(a) => a,
            None => return Err(format!("No audio track in {}", job.input.display()).into()),
        };
        let decode_ms = decode_start.elapsed().as_secs_f64() * 1000.0;

        // 2. Run inference
        let transcribe_start = Instant::now();
        let transcript = self.recognizer.transcribe(&audio, &self.options)?;
        let transcribe_ms = transcribe_start.elapsed().as_secs_f64() * 1000.0;

        if transcript.is_empty() {
            log::warn!("No speech recognized in {}", job.input.display());
        }

        // 3. Write the output file (empty transcripts still produce one:
        //    one output per input)
        let write_start = Instant::now();
        self.writer.write(&job.output, &transcript)?;
        let write_ms = write_start.elapsed().as_secs_f64() * 1000.0;

        Ok(JobReport {
            detected_language: transcript.detected_language.clone(),
            text_chars: transcript.text().chars().count(),
            decode_ms,
            transcribe_ms,
            write_ms,
        })
    }
}
