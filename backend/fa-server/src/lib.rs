pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    attendance::{
        attendance::{mark_attendance, session_attendance, student_attendance},
        attendance_dto::AttendanceDto,
        mark_attendance_query::MarkAttendanceQuery,
    },
    auth::{
        auth::{login, me, register},
        login_request::LoginRequest,
        login_response::LoginResponse,
        me_response::MeResponse,
        register_request::RegisterRequest,
        user_dto::UserDto,
    },
    class_sessions::{
        class_sessions::{
            create_session, delete_session, get_session, list_sessions, update_session,
        },
        create_session_request::CreateSessionRequest,
        list_sessions_query::ListSessionsQuery,
        session_dto::SessionDto,
        update_session_request::UpdateSessionRequest,
    },
    classes::{
        class_dto::ClassDto,
        class_request::ClassRequest,
        classes::{create_class, delete_class, get_class, list_classes, update_class},
    },
    dashboard::{
        dashboard::{stats as dashboard_stats, top_students},
        dashboard_stats_response::{DashboardStatsResponse, DayRate, Totals},
        top_students_query::TopStudentsQuery,
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::{current_user::CurrentUser, teacher_or_admin::TeacherOrAdmin},
    recognition::{
        recognition::take_attendance,
        take_attendance_request::TakeAttendanceRequest,
        take_attendance_response::{AttendanceSummary, DetectedStudentDto, TakeAttendanceResponse},
    },
    recognition_logs::{
        recognition_log_dto::RecognitionLogDto,
        recognition_logs::{list_logs, logs_by_class, logs_by_session},
    },
    students::{
        create_student_request::CreateStudentRequest,
        embedding_dto::EmbeddingDto,
        enroll_embedding_request::EnrollEmbeddingRequest,
        list_students_query::ListStudentsQuery,
        student_dto::StudentDto,
        students::{create_student, delete_student, enroll_embedding, get_student, list_students},
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
