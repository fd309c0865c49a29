use super::audio_segment::AudioSegment;
use super::transcript::Transcript;

/// Per-run inference options.
#[derive(Clone, Debug, Default)]
pub struct TranscribeOptions {
    /// ISO 639-1 language hint. `None` lets the model auto-detect.
    pub language: Option<String>,
    /// Run Whisper's translate task (output in English) instead of plain
    /// transcription.
    pub translate: bool,
}

/// Domain interface for speech-to-text transcription.
///
/// `Sync` so a single loaded model can serve several worker threads at once.
pub trait SpeechRecognizer: Send + Sync {
    fn transcribe(
        &self,
        audio: &AudioSegment,
        options: &TranscribeOptions,
    ) -> Result<Transcript, Box<dyn std::error::Error>>;
}
