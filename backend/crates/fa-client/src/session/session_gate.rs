use crate::{NavLink, Navigation, Navigator, TokenStore};

use log::{debug, warn};

pub const AUTH_ROUTE: &str = "/auth";
pub const HOME_ROUTE: &str = "/";

/// Decides what a client may see based on whether a token is stored.
///
/// Only the token's presence is checked; the server remains the authority
/// on whether it is still valid.
pub struct SessionGate<S: TokenStore> {
    store: S,
}

impl<S: TokenStore> SessionGate<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// True when a non-empty token is stored. Unreadable storage counts as logged out.
    pub fn is_authenticated(&self) -> bool {
        match self.store.get() {
            Ok(Some(token)) => !token.is_empty(),
            Ok(None) => false,
            Err(e) => {
                warn!("Token storage unreadable, treating as logged out: {}", e);
                false
            }
        }
    }

    /// Guard a protected route
    pub fn guard(&self, route: &str) -> Navigation {
        if self.is_authenticated() {
            Navigation::Render
        } else {
            debug!("Redirecting {} to {}", route, AUTH_ROUTE);
            Navigation::Redirect(AUTH_ROUTE.to_string())
        }
    }

    /// Clear the token and return home. Navigation happens even if removal fails.
    pub fn logout(&self, navigator: &mut dyn Navigator) {
        if let Err(e) = self.store.remove() {
            warn!("Failed to remove access token: {}", e);
        }
        navigator.navigate(HOME_ROUTE);
    }

    pub fn nav_links(&self) -> Vec<NavLink> {
        let mut links = vec![NavLink::route("Home", HOME_ROUTE)];

        if self.is_authenticated() {
            links.extend([
                NavLink::route("Dashboard", "/dashboard"),
                NavLink::route("History", "/history"),
                NavLink::route("Profile", "/profile"),
                NavLink::action("Logout"),
            ]);
        } else {
            links.push(NavLink::route("Login", AUTH_ROUTE));
        }

        links
    }
}
