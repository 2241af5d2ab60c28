pub mod current_user;
pub mod teacher_or_admin;
