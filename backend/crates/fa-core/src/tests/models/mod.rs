mod attendance_status;
mod role;
mod student_embedding;
mod user;
