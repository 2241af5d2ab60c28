pub mod attendance_record;
pub mod attendance_status;
pub mod class;
pub mod class_session;
pub mod detection;
pub mod recognition_log;
pub mod role;
pub mod session_status;
pub mod student;
pub mod student_embedding;
pub mod user;
