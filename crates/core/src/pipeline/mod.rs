pub mod batch_executor;
pub mod infrastructure;
pub mod job;
pub mod pipeline_logger;
pub mod transcribe_batch_use_case;
pub mod transcribe_file_use_case;
