pub mod audio_reader;
pub mod transcript_writer;
