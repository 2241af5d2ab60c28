use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct EnrollEmbeddingRequest {
    /// Face embedding produced by the recognition model
    pub embedding: Vec<f32>,

    /// Source photo; also becomes the student's photo
    #[serde(default)]
    pub photo_url: Option<String>,
}
