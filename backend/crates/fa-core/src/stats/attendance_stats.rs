//! Attendance figures shown on the dashboard.

use crate::AttendanceRecord;

use serde::Serialize;
use uuid::Uuid;

/// Percentage of records that count as attended (present or late).
///
/// Empty input yields 0 rather than NaN.
pub fn attendance_percentage(records: &[AttendanceRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let attended = records.iter().filter(|r| r.present()).count();
    attended as f64 * 100.0 / records.len() as f64
}

/// Attendance rate over the records of a single day's sessions
pub fn day_rate<'a, I>(records: I) -> f64
where
    I: IntoIterator<Item = &'a AttendanceRecord>,
{
    let (attended, total) = records.into_iter().fold((0usize, 0usize), |(a, t), r| {
        (a + usize::from(r.present()), t + 1)
    });
    if total == 0 {
        0.0
    } else {
        attended as f64 * 100.0 / total as f64
    }
}

/// One row of the top-students table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentAttendance {
    pub student_id: Uuid,
    pub name: String,
    pub class_name: Option<String>,
    pub sessions: usize,
    pub percentage: f64,
}

impl StudentAttendance {
    /// Rank by percentage descending, then name; keep the first `limit`
    pub fn top(mut rows: Vec<StudentAttendance>, limit: usize) -> Vec<StudentAttendance> {
        rows.sort_by(|a, b| {
            b.percentage
                .total_cmp(&a.percentage)
                .then_with(|| a.name.cmp(&b.name))
        });
        rows.truncate(limit);
        rows
    }
}
