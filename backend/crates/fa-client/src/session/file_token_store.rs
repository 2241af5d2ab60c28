use crate::{CliClientResult, ClientError, TokenStore};

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;

/// Token kept in a plain file, one token per file
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> CliClientResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                // Strip the line ending only
                let token = contents.trim_end_matches(['\r', '\n']);
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ClientError::storage(self.path.clone(), e)),
        }
    }

    fn set(&self, token: &str) -> CliClientResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .map_err(|e| ClientError::storage(parent.to_path_buf(), e))?;
        }

        fs::write(&self.path, token).map_err(|e| ClientError::storage(self.path.clone(), e))?;
        debug!("Stored access token at {}", self.path.display());
        Ok(())
    }

    fn remove(&self) -> CliClientResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("Removed access token at {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ClientError::storage(self.path.clone(), e)),
        }
    }
}
