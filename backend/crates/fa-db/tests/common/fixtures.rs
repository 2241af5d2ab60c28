use fa_core::{
    AttendanceRecord, AttendanceStatus, BoundingBox, Class, ClassSession, RecognitionLog,
    RecognizedFace, Role, Student, StudentEmbedding, User,
};
use fa_db::{ClassRepository, ClassSessionRepository, StudentRepository};

use chrono::NaiveDate;
use sqlx::SqlitePool;
use uuid::Uuid;

pub fn create_test_user(email: &str) -> User {
    User::new(
        "Test Teacher".to_string(),
        email,
        "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        Role::Teacher,
    )
}

pub fn create_test_student(code: &str) -> Student {
    let mut student = Student::new(code.to_string(), format!("Student {code}"));
    student.class_name = Some("UX Design".to_string());
    student
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn create_test_embedding(student_id: Uuid, seed: f32) -> StudentEmbedding {
    StudentEmbedding::new(student_id, vec![seed, 1.0 - seed, 0.25], None)
}

pub fn create_test_log(uploaded_by: Uuid, session_id: Option<Uuid>) -> RecognitionLog {
    RecognitionLog::new(
        vec![RecognizedFace {
            bbox: BoundingBox::new(0.0, 0.0, 10.0, 10.0),
            detection_confidence: 0.9,
            match_confidence: 0.8,
            student_id: Some(Uuid::new_v4()),
        }],
        uploaded_by,
        None,
        session_id,
    )
}

/// Persists students with the given codes
pub async fn seed_students(pool: &SqlitePool, codes: &[&str]) -> Vec<Student> {
    let repo = StudentRepository::new(pool.clone());
    let mut students = Vec::new();
    for code in codes {
        let student = create_test_student(code);
        repo.create(&student).await.unwrap();
        students.push(student);
    }
    students
}

/// Persists a class with the given roster and one session on `on`
pub async fn seed_class_with_session(
    pool: &SqlitePool,
    roster: Vec<Uuid>,
    on: NaiveDate,
) -> (Class, ClassSession) {
    let class = Class::new("UX Design".to_string(), "teacher-1".to_string(), roster);
    ClassRepository::new(pool.clone())
        .create(&class)
        .await
        .unwrap();

    let session = ClassSession::new(class.id, on);
    ClassSessionRepository::new(pool.clone())
        .create(&session)
        .await
        .unwrap();

    (class, session)
}

pub fn manual(student_id: Uuid, session_id: Uuid, status: AttendanceStatus) -> AttendanceRecord {
    AttendanceRecord::manual(student_id, session_id, status)
}
