use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListSessionsQuery {
    #[serde(default)]
    pub class_id: Option<String>,
}
