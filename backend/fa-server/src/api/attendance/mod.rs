pub mod attendance;
pub mod attendance_dto;
pub mod mark_attendance_query;
