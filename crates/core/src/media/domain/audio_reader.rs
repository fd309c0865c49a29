use std::path::Path;

use crate::transcription::domain::audio_segment::AudioSegment;

/// Domain interface for decoding the audio track of a media file.
///
/// Covers both audio containers and video containers: audio extraction from
/// video is just a decode of the best audio stream.
pub trait AudioReader: Send + Sync {
    /// Decode the audio track to mono PCM at the given sample rate.
    /// Returns None if the file has no audio track.
    fn read_audio(
        &self,
        path: &Path,
        target_sample_rate: u32,
    ) -> Result<Option<AudioSegment>, Box<dyn std::error::Error>>;
}
