use crate::{
    AppState, create_class, create_session, create_student, dashboard_stats, delete_class,
    delete_session, delete_student, enroll_embedding, get_class, get_session, get_student, health,
    list_classes, list_logs, list_sessions, list_students, login, logs_by_class, logs_by_session,
    mark_attendance, me, register, session_attendance, student_attendance, take_attendance,
    top_students, update_class, update_session,
};

use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.cors_origin);

    Router::new()
        // Health check endpoints
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Auth
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/me", get(me))
        // Students
        .route("/students/", get(list_students).post(create_student))
        .route("/students/{id}", get(get_student).delete(delete_student))
        .route("/students/{id}/embeddings", post(enroll_embedding))
        // Classes
        .route("/classes/", get(list_classes).post(create_class))
        .route(
            "/classes/{id}",
            get(get_class).put(update_class).delete(delete_class),
        )
        // Class sessions
        .route("/class-sessions/", get(list_sessions).post(create_session))
        .route(
            "/class-sessions/{id}",
            get(get_session).put(update_session).delete(delete_session),
        )
        // Attendance
        .route("/attendance/{student_id}", post(mark_attendance))
        .route("/attendance/student/{id}", get(student_attendance))
        .route("/attendance/session/{id}", get(session_attendance))
        // Recognition
        .route("/recognition/take-attendance", post(take_attendance))
        .route("/recognition-logs/", get(list_logs))
        .route("/recognition-logs/class/{id}", get(logs_by_class))
        .route("/recognition-logs/session/{id}", get(logs_by_session))
        // Dashboard
        .route("/dashboard/stats", get(dashboard_stats))
        .route("/dashboard/top-students", get(top_students))
        // Add shared state
        .with_state(state)
        .layer(cors)
}

/// `*` allows any origin; otherwise a single exact origin
fn cors_layer(origin: &str) -> CorsLayer {
    let allow_origin = if origin == "*" {
        AllowOrigin::any()
    } else {
        match HeaderValue::from_str(origin) {
            Ok(value) => AllowOrigin::exact(value),
            Err(e) => {
                log::warn!("Invalid CORS origin {:?} ({}), allowing any", origin, e);
                AllowOrigin::any()
            }
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
