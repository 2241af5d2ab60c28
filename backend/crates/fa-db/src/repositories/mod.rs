pub mod attendance_repository;
pub mod class_repository;
pub mod class_session_repository;
pub mod embedding_repository;
pub mod recognition_log_repository;
pub mod student_repository;
pub mod user_repository;
