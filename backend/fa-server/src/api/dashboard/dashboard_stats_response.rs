use crate::SessionDto;

use fa_core::StudentAttendance;

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DashboardStatsResponse {
    /// Percentage of today's records marked present or late
    pub today_rate: f64,
    /// The last seven days, oldest first, ending today
    pub weekly_summary: Vec<DayRate>,
    pub upcoming_sessions: Vec<SessionDto>,
    pub totals: Totals,
    pub top_students: Vec<StudentAttendance>,
}

#[derive(Debug, Serialize)]
pub struct DayRate {
    pub date: NaiveDate,
    pub rate: f64,
}

#[derive(Debug, Serialize)]
pub struct Totals {
    pub students: i64,
    pub classes: i64,
    pub sessions: i64,
}
