use std::path::Path;

use crate::transcription::domain::transcript::Transcript;

/// Domain interface for persisting a finished transcript.
pub trait TranscriptWriter: Send + Sync {
    fn write(&self, path: &Path, transcript: &Transcript) -> Result<(), Box<dyn std::error::Error>>;
}
