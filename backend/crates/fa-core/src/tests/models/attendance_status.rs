use crate::AttendanceStatus;

use std::str::FromStr;

#[test]
fn test_attendance_status_from_str_is_case_insensitive() {
    assert_eq!(
        AttendanceStatus::from_str("Present").unwrap(),
        AttendanceStatus::Present
    );
    assert_eq!(
        AttendanceStatus::from_str("late").unwrap(),
        AttendanceStatus::Late
    );
    assert!(AttendanceStatus::from_str("excused").is_err());
}

#[test]
fn test_late_counts_as_attended() {
    assert!(AttendanceStatus::Present.is_attended());
    assert!(AttendanceStatus::Late.is_attended());
    assert!(!AttendanceStatus::Absent.is_attended());
}
