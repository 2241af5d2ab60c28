use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct TakeAttendanceResponse {
    /// Most-voted first
    pub detected_students: Vec<DetectedStudentDto>,
    pub attendance_summary: AttendanceSummary,
}

#[derive(Debug, Serialize)]
pub struct DetectedStudentDto {
    pub student_id: Uuid,
    /// Number of photos the student was matched in
    pub votes: u32,
    /// Best match score across photos
    pub confidence: f32,
}

#[derive(Debug, Serialize)]
pub struct AttendanceSummary {
    pub present: usize,
    pub absent: usize,
    pub session_id: Uuid,
}
