pub mod error;
pub mod models;
pub mod recognition;
pub mod stats;

pub use error::{CoreError, Result};
pub use models::attendance_record::AttendanceRecord;
pub use models::attendance_status::AttendanceStatus;
pub use models::class::Class;
pub use models::class_session::ClassSession;
pub use models::detection::{BoundingBox, FaceDetection, RecognizedFace};
pub use models::recognition_log::RecognitionLog;
pub use models::role::Role;
pub use models::session_status::SessionStatus;
pub use models::student::Student;
pub use models::student_embedding::StudentEmbedding;
pub use models::user::User;
pub use recognition::matcher::{EmbeddingMatcher, MatchResult};
pub use recognition::nms::apply_nms;
pub use recognition::similarity::cosine_similarity;
pub use recognition::votes::{RecognitionTally, tally_votes};
pub use stats::attendance_stats::{StudentAttendance, attendance_percentage, day_rate};

#[cfg(test)]
mod tests;
