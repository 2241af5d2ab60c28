use crate::{AttendanceRecord, AttendanceStatus, StudentAttendance, attendance_percentage, day_rate};

use uuid::Uuid;

fn record(status: AttendanceStatus) -> AttendanceRecord {
    AttendanceRecord::manual(Uuid::new_v4(), Uuid::new_v4(), status)
}

#[test]
fn test_attendance_percentage_counts_present_and_late() {
    let records = vec![
        record(AttendanceStatus::Present),
        record(AttendanceStatus::Late),
        record(AttendanceStatus::Absent),
        record(AttendanceStatus::Absent),
    ];

    assert_eq!(attendance_percentage(&records), 50.0);
}

#[test]
fn test_attendance_percentage_of_no_records_is_zero() {
    assert_eq!(attendance_percentage(&[]), 0.0);
}

#[test]
fn test_day_rate_over_iterator() {
    let records = [
        record(AttendanceStatus::Present),
        record(AttendanceStatus::Present),
        record(AttendanceStatus::Present),
        record(AttendanceStatus::Absent),
    ];

    assert_eq!(day_rate(records.iter()), 75.0);
    assert_eq!(day_rate(std::iter::empty()), 0.0);
}

#[test]
fn test_top_students_sorted_by_percentage_then_name() {
    let row = |name: &str, percentage: f64| StudentAttendance {
        student_id: Uuid::new_v4(),
        name: name.to_string(),
        class_name: None,
        sessions: 4,
        percentage,
    };

    let top = StudentAttendance::top(
        vec![row("Cy", 50.0), row("Bo", 100.0), row("Al", 100.0), row("Di", 75.0)],
        3,
    );

    let names: Vec<&str> = top.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Al", "Bo", "Di"]);
}
