/// One timestamped stretch of recognized speech.
#[derive(Clone, Debug, PartialEq)]
pub struct TranscriptSegment {
    pub text: String,
    pub start_time: f64,
    pub end_time: f64,
}

impl TranscriptSegment {
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

/// The result of transcribing one file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transcript {
    pub segments: Vec<TranscriptSegment>,
    /// ISO 639-1 code reported by the model, when it detected one.
    pub detected_language: Option<String>,
}

impl Transcript {
    /// Joined segment text, trimmed. This is what gets written to disk.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            out.push_str(segment.text.trim());
            out.push(' ');
        }
        out.trim_end().to_string()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(|s| s.text.trim().is_empty())
    }
}
