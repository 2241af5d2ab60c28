pub mod class_sessions;
pub mod create_session_request;
pub mod list_sessions_query;
pub mod session_dto;
pub mod update_session_request;
