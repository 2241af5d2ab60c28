use crate::{CliClientResult, TokenStore};

use std::sync::Mutex;

/// In-process token slot, used where nothing should touch disk
#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        // A poisoned slot still holds a valid Option
        self.token.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> CliClientResult<Option<String>> {
        Ok(self.slot().clone())
    }

    fn set(&self, token: &str) -> CliClientResult<()> {
        *self.slot() = Some(token.to_string());
        Ok(())
    }

    fn remove(&self) -> CliClientResult<()> {
        *self.slot() = None;
        Ok(())
    }
}
