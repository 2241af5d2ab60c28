//! Dashboard statistics computed from stored attendance

use crate::{
    ApiResult, AppState, CurrentUser, DashboardStatsResponse, DayRate, SessionDto,
    TopStudentsQuery, Totals, api::dashboard::top_students_query::DEFAULT_TOP_STUDENTS,
};

use fa_core::{AttendanceRecord, StudentAttendance, attendance_percentage, day_rate};
use fa_db::{AttendanceRepository, ClassRepository, ClassSessionRepository, StudentRepository};

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::{Days, NaiveDate, Utc};
use uuid::Uuid;

const WEEK_DAYS: u64 = 7;
const UPCOMING_LIMIT: i64 = 3;

/// GET /dashboard/stats
pub async fn stats(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> ApiResult<Json<DashboardStatsResponse>> {
    let today = Utc::now().date_naive();
    let week_start = today - Days::new(WEEK_DAYS - 1);

    let dated = AttendanceRepository::new(state.pool.clone())
        .find_between_dates(week_start, today)
        .await?;

    let mut by_day: HashMap<NaiveDate, Vec<AttendanceRecord>> = HashMap::new();
    for entry in dated {
        by_day
            .entry(entry.session_date)
            .or_default()
            .push(entry.record);
    }

    let weekly_summary = (0..WEEK_DAYS)
        .map(|offset| {
            let date = week_start + Days::new(offset);
            let rate = by_day
                .get(&date)
                .map(|records| day_rate(records.iter()))
                .unwrap_or(0.0);
            DayRate { date, rate }
        })
        .collect::<Vec<_>>();
    let today_rate = weekly_summary.last().map(|d| d.rate).unwrap_or(0.0);

    let sessions = ClassSessionRepository::new(state.pool.clone());
    let upcoming_sessions = sessions
        .find_upcoming(today, UPCOMING_LIMIT)
        .await?
        .into_iter()
        .map(SessionDto::from)
        .collect();

    let totals = Totals {
        students: StudentRepository::new(state.pool.clone()).count().await?,
        classes: ClassRepository::new(state.pool.clone()).count().await?,
        sessions: sessions.count().await?,
    };

    let top_students = rank_students(&state, DEFAULT_TOP_STUDENTS).await?;

    Ok(Json(DashboardStatsResponse {
        today_rate,
        weekly_summary,
        upcoming_sessions,
        totals,
        top_students,
    }))
}

/// GET /dashboard/top-students?limit
pub async fn top_students(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(query): Query<TopStudentsQuery>,
) -> ApiResult<Json<Vec<StudentAttendance>>> {
    Ok(Json(rank_students(&state, query.limit).await?))
}

/// Every student's attendance percentage, best first.
/// Students with no records rank at 0%.
async fn rank_students(state: &AppState, limit: usize) -> ApiResult<Vec<StudentAttendance>> {
    let students_repo = StudentRepository::new(state.pool.clone());
    let total = students_repo.count().await?;
    let students = students_repo.find_all(0, total.max(1)).await?;

    let mut by_student: HashMap<Uuid, Vec<AttendanceRecord>> = HashMap::new();
    for record in AttendanceRepository::new(state.pool.clone())
        .find_all()
        .await?
    {
        by_student.entry(record.student_id).or_default().push(record);
    }

    let rows = students
        .into_iter()
        .map(|s| {
            let records = by_student.remove(&s.id).unwrap_or_default();
            StudentAttendance {
                student_id: s.id,
                name: s.name,
                class_name: s.class_name,
                sessions: records.len(),
                percentage: attendance_percentage(&records),
            }
        })
        .collect();

    Ok(StudentAttendance::top(rows, limit))
}
