pub(crate) mod client;
pub(crate) mod error;

pub use client::ApiClient;
pub use error::{ClientError, Result as CliClientResult};
