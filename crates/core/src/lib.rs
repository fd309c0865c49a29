//! Core library for EchoScribe: batch transcription of audio and video
//! files with a local Whisper model.
//!
//! Layered domain/infrastructure split: domain modules define the ports
//! (traits and plain data), infrastructure modules bind them to ffmpeg,
//! whisper.cpp, and the filesystem.

pub mod media;
pub mod pipeline;
pub mod shared;
pub mod transcription;
