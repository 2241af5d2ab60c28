//! Login/register form state and submission.

use crate::{ApiClient, ClientError, TokenStore};

use log::{error, info};
use serde_json::{Value, json};

/// Message shown when the server gives no usable `detail`
pub const FALLBACK_ERROR: &str = "Something went wrong";

/// Role every self-registered account receives
pub const REGISTER_ROLE: &str = "teacher";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggle(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Welcome Back",
            AuthMode::Register => "Create Account",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            AuthMode::Login => "Sign in to manage attendance and view reports.",
            AuthMode::Register => "Register as a teacher to start managing attendance.",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Register => "Register",
        }
    }

    /// Prompt and link text offering the other mode
    pub fn switch_prompt(self) -> (&'static str, &'static str) {
        match self {
            AuthMode::Login => ("Don\u{2019}t have an account?", "Register"),
            AuthMode::Register => ("Already registered?", "Login"),
        }
    }

    fn endpoint(self) -> &'static str {
        match self {
            AuthMode::Login => "/auth/login",
            AuthMode::Register => "/auth/register",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Token stored
    LoggedIn,
    /// Account created; the form is now in login mode
    Registered,
    /// Message to display
    Failed(String),
}

/// Ephemeral credentials for one login or register interaction
#[derive(Debug, Default)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl AuthForm {
    pub fn login(email: &str, password: &str) -> Self {
        Self {
            mode: AuthMode::Login,
            email: email.to_string(),
            password: password.to_string(),
            ..Self::default()
        }
    }

    pub fn register(name: &str, email: &str, password: &str) -> Self {
        Self {
            mode: AuthMode::Register,
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggle();
    }

    /// Request body for the current mode. Login never carries `name` or `role`.
    pub fn payload(&self) -> Value {
        match self.mode {
            AuthMode::Login => json!({
                "email": self.email,
                "password": self.password,
            }),
            AuthMode::Register => json!({
                "name": self.name,
                "email": self.email,
                "password": self.password,
                "role": REGISTER_ROLE,
            }),
        }
    }

    /// Send the form to the server, storing the token on login.
    ///
    /// Name and password are cleared afterwards whatever the result.
    pub async fn submit(&mut self, client: &ApiClient, store: &dyn TokenStore) -> AuthOutcome {
        let result = client
            .post_auth(self.mode.endpoint(), &self.payload())
            .await;

        let outcome = match result {
            Ok(body) => self.accept(&body, store),
            Err(e) => {
                error!("{} failed: {}", self.mode.submit_label(), e);
                AuthOutcome::Failed(failure_message(&e))
            }
        };

        self.name.clear();
        self.password.clear();
        outcome
    }

    fn accept(&mut self, body: &Value, store: &dyn TokenStore) -> AuthOutcome {
        match self.mode {
            AuthMode::Login => {
                let Some(token) = body.get("access_token").and_then(Value::as_str) else {
                    error!("Login response carried no access_token");
                    return AuthOutcome::Failed(FALLBACK_ERROR.to_string());
                };

                match store.set(token) {
                    Ok(()) => {
                        info!("Logged in as {}", self.email);
                        AuthOutcome::LoggedIn
                    }
                    Err(e) => {
                        error!("Failed to store access token: {}", e);
                        AuthOutcome::Failed(FALLBACK_ERROR.to_string())
                    }
                }
            }
            AuthMode::Register => {
                info!("Registered {}", self.email);
                self.mode = AuthMode::Login;
                AuthOutcome::Registered
            }
        }
    }
}

fn failure_message(err: &ClientError) -> String {
    err.detail().unwrap_or(FALLBACK_ERROR).to_string()
}
