pub mod job_row;
