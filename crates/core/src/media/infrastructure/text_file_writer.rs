use std::fs;
use std::path::Path;

use crate::media::domain::transcript_writer::TranscriptWriter;
use crate::transcription::domain::transcript::Transcript;

/// Writes the transcript text as a UTF-8 file with a trailing newline.
pub struct TextFileWriter;

impl TranscriptWriter for TextFileWriter {
    fn write(&self, path: &Path, transcript: &Transcript) -> Result<(), Box<dyn std::error::Error>> {
        let mut text = transcript.text();
        text.push('\n');
        fs::write(path, text)
            .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcription::domain::transcript::TranscriptSegment;
    use tempfile::TempDir;

    fn transcript_of(text: &str) -> Transcript {
        Transcript {
            segments: vec![TranscriptSegment {
                text: text.to_string(),
                start_time: 0.0,
                end_time: 1.0,
            }],
            detected_language: None,
        }
    }

    #[test]
    fn test_writes_text_with_trailing_newline() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out_transcription.txt");

        TextFileWriter.write(&path, &transcript_of("hello world")).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "hello world\n");
    }

    #[test]
    fn test_overwrites_existing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out_transcription.txt");
        fs::write(&path, "stale").unwrap();

        TextFileWriter.write(&path, &transcript_of("fresh")).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh\n");
    }

    #[test]
    fn test_write_to_missing_directory_errors() {
        let result = TextFileWriter.write(
            Path::new("/nonexistent/dir/out.txt"),
            &transcript_of("text"),
        );
        let err = result.unwrap_err().to_string();
        assert!(err.contains("out.txt"));
    }

    #[test]
    fn test_preserves_non_ascii_text() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.txt");

        TextFileWriter
            .write(&path, &transcript_of("Привет, добрый день"))
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Привет, добрый день\n");
    }
}
