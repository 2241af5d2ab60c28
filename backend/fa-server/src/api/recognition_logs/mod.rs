pub mod recognition_log_dto;
pub mod recognition_logs;
