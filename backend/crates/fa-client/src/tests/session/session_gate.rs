use crate::{
    CliClientResult, ClientError, MemoryTokenStore, NavLink, Navigation, Navigator, SessionGate,
    TokenStore,
};

use std::path::PathBuf;

#[derive(Default)]
struct RecordingNavigator {
    visited: Vec<String>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, path: &str) {
        self.visited.push(path.to_string());
    }
}

/// Store whose every operation fails
struct BrokenStore;

impl TokenStore for BrokenStore {
    fn get(&self) -> CliClientResult<Option<String>> {
        Err(broken())
    }

    fn set(&self, _token: &str) -> CliClientResult<()> {
        Err(broken())
    }

    fn remove(&self) -> CliClientResult<()> {
        Err(broken())
    }
}

fn broken() -> ClientError {
    ClientError::storage(
        PathBuf::from("/nowhere/token"),
        std::io::Error::other("disk on fire"),
    )
}

#[test]
fn test_no_token_is_not_authenticated() {
    let gate = SessionGate::new(MemoryTokenStore::new());
    assert!(!gate.is_authenticated());
}

#[test]
fn test_any_non_empty_token_is_authenticated() {
    let gate = SessionGate::new(MemoryTokenStore::with_token("x"));
    assert!(gate.is_authenticated());
}

#[test]
fn test_empty_token_is_not_authenticated() {
    let gate = SessionGate::new(MemoryTokenStore::with_token(""));
    assert!(!gate.is_authenticated());
}

#[test]
fn test_unreadable_store_is_not_authenticated() {
    let gate = SessionGate::new(BrokenStore);
    assert!(!gate.is_authenticated());
}

#[test]
fn test_guard_redirects_to_auth_when_logged_out() {
    let gate = SessionGate::new(MemoryTokenStore::new());
    assert_eq!(
        gate.guard("/dashboard"),
        Navigation::Redirect("/auth".to_string())
    );
}

#[test]
fn test_guard_renders_when_logged_in() {
    let gate = SessionGate::new(MemoryTokenStore::with_token("tok"));
    assert_eq!(gate.guard("/dashboard"), Navigation::Render);
}

#[test]
fn test_logout_clears_token_and_navigates_home() {
    let gate = SessionGate::new(MemoryTokenStore::with_token("tok"));
    let mut navigator = RecordingNavigator::default();

    gate.logout(&mut navigator);

    assert_eq!(gate.store().get().unwrap(), None);
    assert_eq!(navigator.visited, vec!["/".to_string()]);
}

#[test]
fn test_logout_when_logged_out_still_navigates_home() {
    let gate = SessionGate::new(MemoryTokenStore::new());
    let mut navigator = RecordingNavigator::default();

    gate.logout(&mut navigator);

    assert_eq!(navigator.visited, vec!["/".to_string()]);
}

#[test]
fn test_logout_with_failing_store_still_navigates_home() {
    let gate = SessionGate::new(BrokenStore);
    let mut navigator = RecordingNavigator::default();

    gate.logout(&mut navigator);

    assert_eq!(navigator.visited, vec!["/".to_string()]);
}

#[test]
fn test_nav_links_logged_out() {
    let gate = SessionGate::new(MemoryTokenStore::new());

    assert_eq!(
        gate.nav_links(),
        vec![NavLink::route("Home", "/"), NavLink::route("Login", "/auth")]
    );
}

#[test]
fn test_nav_links_logged_in() {
    let gate = SessionGate::new(MemoryTokenStore::with_token("tok"));

    let labels: Vec<&str> = gate.nav_links().iter().map(|l| l.label).collect();

    assert_eq!(labels, ["Home", "Dashboard", "History", "Profile", "Logout"]);
    assert_eq!(gate.nav_links().last(), Some(&NavLink::action("Logout")));
}
