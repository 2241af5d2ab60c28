pub mod recognition;
pub mod take_attendance_request;
pub mod take_attendance_response;
