pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "m4a", "flac", "ogg", "opus", "aac", "wma"];

pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mov", "mkv", "flv", "wmv", "webm", "m4v"];

/// Whisper models only accept 16 kHz mono input.
pub const WHISPER_SAMPLE_RATE: u32 = 16000;

pub const DEFAULT_WORKERS: usize = 2;

/// Appended to the input file stem to form the output file name.
pub const OUTPUT_SUFFIX: &str = "_transcription";

pub const MODEL_BASE_URL: &str = "https://huggingface.co/ggerganov/whisper.cpp/resolve/main";

/// Language codes the front-ends offer. Auto-detect (no hint) is handled
/// separately and is not part of this table.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "en", "es", "fr", "de", "it", "pt", "nl", "pl", "ru", "uk", "ja", "ko", "zh",
];
