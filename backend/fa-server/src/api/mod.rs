pub mod attendance;
pub mod auth;
pub mod class_sessions;
pub mod classes;
pub mod dashboard;
pub mod delete_response;
pub mod error;
pub mod extractors;
pub mod recognition;
pub mod recognition_logs;
pub mod students;
