pub mod columns;
pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::database::{MIGRATOR, connect};
pub use error::{DbError, Result};
pub use repositories::attendance_repository::{AttendanceRepository, DatedAttendance};
pub use repositories::class_repository::ClassRepository;
pub use repositories::class_session_repository::ClassSessionRepository;
pub use repositories::embedding_repository::EmbeddingRepository;
pub use repositories::recognition_log_repository::RecognitionLogRepository;
pub use repositories::student_repository::StudentRepository;
pub use repositories::user_repository::UserRepository;
