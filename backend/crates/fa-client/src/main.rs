//! fa - FaceAttend command-line client
//!
//! # Examples
//!
//! ```bash
//! # Log in (stores the token under the config directory)
//! fa login --email teacher@school.edu --password secret123
//!
//! # Take attendance from two photos' detector output
//! fa recognize --session-id <uuid> --image photo1.json --image photo2.json --pretty
//! ```

mod attendance_commands;
mod class_commands;
mod cli;
mod commands;
mod dashboard_commands;
mod log_commands;
mod session_commands;
mod student_commands;

use crate::{
    attendance_commands::AttendanceCommands, class_commands::ClassCommands, cli::Cli,
    commands::Commands, dashboard_commands::DashboardCommands, log_commands::LogCommands,
    session_commands::SessionCommands, student_commands::StudentCommands,
};

use fa_client::{
    ApiClient, AuthForm, AuthOutcome, CliClientResult, ClientError, FileTokenStore, SessionGate,
    TokenStore,
};
use fa_config::Config;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use serde_json::{Value, json};

const HEALTH_FALLBACK: &str = "Failed to connect to backend";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    if let Err(e) = fa_client::logger::initialize(level) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let config = match Config::load().and_then(|c| c.validate_client().map(|()| c)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Server URL: explicit flag > environment > config.toml
    let server_url = cli
        .server
        .clone()
        .unwrap_or_else(|| config.client.api_base_url.clone());

    let token_path = match config.token_path() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let gate = SessionGate::new(FileTokenStore::new(token_path));

    let token = match gate.store().get() {
        Ok(token) => token,
        Err(e) => {
            log::warn!("Could not read stored token: {}", e);
            None
        }
    };
    let client = ApiClient::new(&server_url).with_token(token);

    let result = run(cli.command, &client, &gate).await;

    match result {
        Ok(value) => print_json(&value, cli.pretty),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(
    command: Commands,
    client: &ApiClient,
    gate: &SessionGate<FileTokenStore>,
) -> CliClientResult<Value> {
    match command {
        Commands::Health => {
            let message = client
                .fetch_api("/")
                .await
                .and_then(|body| body.get("message").and_then(Value::as_str).map(String::from))
                .unwrap_or_else(|| HEALTH_FALLBACK.to_string());
            Ok(json!({ "message": message }))
        }

        Commands::Login { email, password } => {
            let form = AuthForm::login(&email, &password);
            submit(form, client, gate.store()).await
        }

        Commands::Register {
            name,
            email,
            password,
        } => {
            let form = AuthForm::register(&name, &email, &password);
            submit(form, client, gate.store()).await
        }

        Commands::Logout => {
            let mut navigator = PrintNavigator::default();
            gate.logout(&mut navigator);
            Ok(json!({ "message": "Logged out", "redirect": navigator.path }))
        }

        Commands::Status => Ok(json!({
            "authenticated": gate.is_authenticated(),
            "links": gate.nav_links(),
        })),

        Commands::Whoami => client.me().await,

        Commands::Student { action } => match action {
            StudentCommands::List { skip, limit } => client.list_students(skip, limit).await,
            StudentCommands::Get { id } => client.get_student(&id).await,
            StudentCommands::Create {
                student_id,
                name,
                email,
                class_name,
            } => {
                client
                    .create_student(
                        &student_id,
                        &name,
                        email.as_deref(),
                        class_name.as_deref(),
                    )
                    .await
            }
            StudentCommands::Delete { id } => client.delete_student(&id).await,
            StudentCommands::Enroll {
                id,
                embedding,
                photo_url,
            } => {
                let vector: Vec<f32> = serde_json::from_value(read_json(&embedding)?)?;
                client
                    .enroll_embedding(&id, &vector, photo_url.as_deref())
                    .await
            }
        },

        Commands::Class { action } => match action {
            ClassCommands::List => client.list_classes().await,
            ClassCommands::Get { id } => client.get_class(&id).await,
            ClassCommands::Create { name, students } => {
                client.create_class(&name, &students).await
            }
            ClassCommands::Delete { id } => client.delete_class(&id).await,
        },

        Commands::Session { action } => match action {
            SessionCommands::List { class_id } => client.list_sessions(class_id.as_deref()).await,
            SessionCommands::Get { id } => client.get_session(&id).await,
            SessionCommands::Create {
                class_id,
                date,
                status,
            } => {
                client
                    .create_session(&class_id, &date, status.as_deref())
                    .await
            }
            SessionCommands::Delete { id } => client.delete_session(&id).await,
        },

        Commands::Attendance { action } => match action {
            AttendanceCommands::Mark {
                student_id,
                session_id,
                status,
            } => {
                client
                    .mark_attendance(&student_id, &session_id, &status)
                    .await
            }
            AttendanceCommands::Student { id } => client.student_attendance(&id).await,
            AttendanceCommands::Session { id } => client.session_attendance(&id).await,
        },

        Commands::Recognize { session_id, images } => {
            let detections = images
                .iter()
                .map(|path| read_json(path))
                .collect::<CliClientResult<Vec<Value>>>()?;
            client
                .take_attendance(&session_id, &Value::Array(detections))
                .await
        }

        Commands::Logs { action } => match action {
            LogCommands::All => client.recognition_logs(None, None).await,
            LogCommands::Class { id } => client.recognition_logs(Some(&id), None).await,
            LogCommands::Session { id } => client.recognition_logs(None, Some(&id)).await,
        },

        Commands::Dashboard { action } => match action {
            DashboardCommands::Stats => client.dashboard_stats().await,
            DashboardCommands::Top { limit } => client.top_students(limit).await,
        },
    }
}

/// Submit an auth form; a failure is reported with the server's message
async fn submit(
    mut form: AuthForm,
    client: &ApiClient,
    store: &dyn TokenStore,
) -> CliClientResult<Value> {
    match form.submit(client, store).await {
        AuthOutcome::LoggedIn => Ok(json!({ "message": "Logged in" })),
        AuthOutcome::Registered => Ok(json!({
            "message": "Account created. Log in with `fa login`."
        })),
        AuthOutcome::Failed(message) => Err(ClientError::auth_failed(message)),
    }
}

fn read_json(path: &Path) -> CliClientResult<Value> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| ClientError::storage(path.to_path_buf(), e))?;
    Ok(serde_json::from_str(&contents)?)
}

fn print_json(value: &Value, pretty: bool) -> ExitCode {
    let output = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };

    match output {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing response: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Terminal stand-in for a router: remembers where it was sent
#[derive(Default)]
struct PrintNavigator {
    path: Option<String>,
}

impl fa_client::Navigator for PrintNavigator {
    fn navigate(&mut self, path: &str) {
        self.path = Some(path.to_string());
    }
}
