use crate::{CliClientResult, ClientError};

use std::panic::Location;

use error_location::ErrorLocation;
use log::error;
use reqwest::{Client as ReqwestClient, Method};
use serde::Serialize;
use serde_json::{Value, json};

/// HTTP client for the FaceAttend REST API
pub struct ApiClient {
    pub base_url: String,
    token: Option<String>,
    client: ReqwestClient,
}

impl ApiClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000"); trailing slashes are dropped
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            client: ReqwestClient::new(),
        }
    }

    /// Attach a bearer token to every subsequent request
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build a request with the bearer header when a token is set
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut req = self.client.request(method, self.url(path));

        if let Some(ref token) = self.token {
            req = req.bearer_auth(token);
        }

        req
    }

    /// Build a request that must carry a token
    #[track_caller]
    fn authed(&self, method: Method, path: &str) -> CliClientResult<reqwest::RequestBuilder> {
        if self.token.is_none() {
            return Err(ClientError::not_authenticated());
        }
        Ok(self.request(method, path))
    }

    /// Execute request; non-2xx becomes `ClientError::Api` carrying `detail`
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let body: Value = serde_json::from_str(&text).unwrap_or(Value::Null);
            return Err(ClientError::Api {
                status: status.as_u16(),
                detail: Self::detail_of(&body),
                code: body.get("code").and_then(Value::as_str).map(String::from),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Extract a displayable `detail` from an error body.
    ///
    /// A string is used as-is; a list of validation errors yields the first `msg`.
    pub fn detail_of(body: &Value) -> Option<String> {
        match body.get("detail")? {
            Value::String(s) => Some(s.clone()),
            Value::Array(items) => items
                .iter()
                .find_map(|i| i.get("msg").and_then(Value::as_str))
                .map(String::from),
            _ => None,
        }
    }

    // =========================================================================
    // Health
    // =========================================================================

    /// GET `endpoint` and return the parsed body.
    ///
    /// Never fails: non-2xx, transport and parse errors are logged and become `None`.
    pub async fn fetch_api(&self, endpoint: &str) -> Option<Value> {
        let response = match self.request(Method::GET, endpoint).send().await {
            Ok(r) => r,
            Err(e) => {
                error!("API Fetch Error: {}", e);
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            error!("API Fetch Error: HTTP error! status: {}", status.as_u16());
            return None;
        }

        match response.json::<Value>().await {
            Ok(body) => Some(body),
            Err(e) => {
                error!("API Fetch Error: {}", e);
                None
            }
        }
    }

    /// Root health message
    pub async fn health(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/");
        self.execute(req).await
    }

    // =========================================================================
    // Auth
    // =========================================================================

    pub async fn login(&self, email: &str, password: &str) -> CliClientResult<Value> {
        self.post_auth("/auth/login", &json!({ "email": email, "password": password }))
            .await
    }

    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: &str,
    ) -> CliClientResult<Value> {
        self.post_auth(
            "/auth/register",
            &json!({ "name": name, "email": email, "password": password, "role": role }),
        )
        .await
    }

    /// POST a prepared auth payload (login or register)
    pub async fn post_auth(&self, path: &str, payload: &Value) -> CliClientResult<Value> {
        let req = self.request(Method::POST, path).json(payload);
        self.execute(req).await
    }

    pub async fn me(&self) -> CliClientResult<Value> {
        let req = self.authed(Method::GET, "/auth/me")?;
        self.execute(req).await
    }

    // =========================================================================
    // Students
    // =========================================================================

    pub async fn list_students(&self, skip: u32, limit: u32) -> CliClientResult<Value> {
        let req = self.authed(
            Method::GET,
            &format!("/students/?skip={}&limit={}", skip, limit),
        )?;
        self.execute(req).await
    }

    /// `id` may be the UUID or the student code
    pub async fn get_student(&self, id: &str) -> CliClientResult<Value> {
        let req = self.authed(Method::GET, &format!("/students/{}", id))?;
        self.execute(req).await
    }

    pub async fn create_student(
        &self,
        student_id: &str,
        name: &str,
        email: Option<&str>,
        class_name: Option<&str>,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct CreateStudentRequest<'a> {
            student_id: &'a str,
            name: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            email: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            class_name: Option<&'a str>,
        }

        let body = CreateStudentRequest {
            student_id,
            name,
            email,
            class_name,
        };
        let req = self.authed(Method::POST, "/students/")?.json(&body);
        self.execute(req).await
    }

    pub async fn delete_student(&self, id: &str) -> CliClientResult<Value> {
        let req = self.authed(Method::DELETE, &format!("/students/{}", id))?;
        self.execute(req).await
    }

    pub async fn enroll_embedding(
        &self,
        id: &str,
        embedding: &[f32],
        photo_url: Option<&str>,
    ) -> CliClientResult<Value> {
        let body = json!({ "embedding": embedding, "photo_url": photo_url });
        let req = self
            .authed(Method::POST, &format!("/students/{}/embeddings", id))?
            .json(&body);
        self.execute(req).await
    }

    // =========================================================================
    // Classes
    // =========================================================================

    pub async fn list_classes(&self) -> CliClientResult<Value> {
        let req = self.authed(Method::GET, "/classes/")?;
        self.execute(req).await
    }

    pub async fn get_class(&self, id: &str) -> CliClientResult<Value> {
        let req = self.authed(Method::GET, &format!("/classes/{}", id))?;
        self.execute(req).await
    }

    pub async fn create_class(
        &self,
        class_name: &str,
        student_ids: &[String],
    ) -> CliClientResult<Value> {
        let body = json!({ "class_name": class_name, "student_ids": student_ids });
        let req = self.authed(Method::POST, "/classes/")?.json(&body);
        self.execute(req).await
    }

    pub async fn delete_class(&self, id: &str) -> CliClientResult<Value> {
        let req = self.authed(Method::DELETE, &format!("/classes/{}", id))?;
        self.execute(req).await
    }

    // =========================================================================
    // Class sessions
    // =========================================================================

    pub async fn list_sessions(&self, class_id: Option<&str>) -> CliClientResult<Value> {
        let path = match class_id {
            Some(id) => format!("/class-sessions/?class_id={}", id),
            None => "/class-sessions/".to_string(),
        };
        let req = self.authed(Method::GET, &path)?;
        self.execute(req).await
    }

    pub async fn get_session(&self, id: &str) -> CliClientResult<Value> {
        let req = self.authed(Method::GET, &format!("/class-sessions/{}", id))?;
        self.execute(req).await
    }

    pub async fn create_session(
        &self,
        class_id: &str,
        session_date: &str,
        status: Option<&str>,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct CreateSessionRequest<'a> {
            class_id: &'a str,
            session_date: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            status: Option<&'a str>,
        }

        let body = CreateSessionRequest {
            class_id,
            session_date,
            status,
        };
        let req = self.authed(Method::POST, "/class-sessions/")?.json(&body);
        self.execute(req).await
    }

    pub async fn delete_session(&self, id: &str) -> CliClientResult<Value> {
        let req = self.authed(Method::DELETE, &format!("/class-sessions/{}", id))?;
        self.execute(req).await
    }

    // =========================================================================
    // Attendance & recognition
    // =========================================================================

    pub async fn mark_attendance(
        &self,
        student_id: &str,
        session_id: &str,
        status: &str,
    ) -> CliClientResult<Value> {
        let req = self.authed(
            Method::POST,
            &format!(
                "/attendance/{}?status={}&session_id={}",
                student_id, status, session_id
            ),
        )?;
        self.execute(req).await
    }

    pub async fn student_attendance(&self, student_id: &str) -> CliClientResult<Value> {
        let req = self.authed(Method::GET, &format!("/attendance/student/{}", student_id))?;
        self.execute(req).await
    }

    pub async fn session_attendance(&self, session_id: &str) -> CliClientResult<Value> {
        let req = self.authed(Method::GET, &format!("/attendance/session/{}", session_id))?;
        self.execute(req).await
    }

    /// Submit detector output for each photo; `images` is a JSON array of detection lists
    pub async fn take_attendance(
        &self,
        class_session_id: &str,
        images: &Value,
    ) -> CliClientResult<Value> {
        let body = json!({ "class_session_id": class_session_id, "images": images });
        let req = self
            .authed(Method::POST, "/recognition/take-attendance")?
            .json(&body);
        self.execute(req).await
    }

    pub async fn recognition_logs(
        &self,
        class_id: Option<&str>,
        session_id: Option<&str>,
    ) -> CliClientResult<Value> {
        let path = match (class_id, session_id) {
            (Some(id), _) => format!("/recognition-logs/class/{}", id),
            (None, Some(id)) => format!("/recognition-logs/session/{}", id),
            (None, None) => "/recognition-logs/".to_string(),
        };
        let req = self.authed(Method::GET, &path)?;
        self.execute(req).await
    }

    // =========================================================================
    // Dashboard
    // =========================================================================

    pub async fn dashboard_stats(&self) -> CliClientResult<Value> {
        let req = self.authed(Method::GET, "/dashboard/stats")?;
        self.execute(req).await
    }

    pub async fn top_students(&self, limit: u32) -> CliClientResult<Value> {
        let req = self.authed(
            Method::GET,
            &format!("/dashboard/top-students?limit={}", limit),
        )?;
        self.execute(req).await
    }
}
