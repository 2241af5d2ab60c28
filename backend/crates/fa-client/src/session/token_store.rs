use crate::CliClientResult;

/// Persistent slot holding the single access token
pub trait TokenStore {
    /// Current token, `None` when logged out
    fn get(&self) -> CliClientResult<Option<String>>;

    fn set(&self, token: &str) -> CliClientResult<()>;

    /// Forget the token; removing an absent token succeeds
    fn remove(&self) -> CliClientResult<()>;
}
