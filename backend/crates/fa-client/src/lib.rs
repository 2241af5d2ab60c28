//! fa-client library
//!
//! HTTP client, token storage, session gate and auth form shared by the
//! `fa` binary and its tests.

pub mod auth_form;
pub mod client;
pub mod logger;
pub mod session;

#[cfg(test)]
mod tests;

pub use auth_form::{AuthForm, AuthMode, AuthOutcome, FALLBACK_ERROR};
pub use client::{ApiClient, CliClientResult, ClientError};
pub use session::{
    FileTokenStore, MemoryTokenStore, NavLink, Navigation, Navigator, SessionGate, TokenStore,
};
