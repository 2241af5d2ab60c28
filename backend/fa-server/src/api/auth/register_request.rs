use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,

    /// `teacher` when omitted
    #[serde(default)]
    pub role: Option<String>,
}
