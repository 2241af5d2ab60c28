use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    /// External student code, unique (required)
    pub student_id: String,

    pub name: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub class_id: Option<String>,

    #[serde(default)]
    pub class_name: Option<String>,

    #[serde(default)]
    pub photo_url: Option<String>,
}
