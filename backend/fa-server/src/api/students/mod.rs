pub mod create_student_request;
pub mod embedding_dto;
pub mod enroll_embedding_request;
pub mod list_students_query;
pub mod student_dto;
pub mod students;
