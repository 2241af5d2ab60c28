use serde::Serialize;

/// Outcome of guarding a route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Show the requested page
    Render,
    /// Send the user elsewhere
    Redirect(String),
}

/// Anything that can move the user to another route
pub trait Navigator {
    fn navigate(&mut self, path: &str);
}

/// Entry in the top navigation bar. `href` is `None` for the logout action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: Option<&'static str>,
}

impl NavLink {
    pub const fn route(label: &'static str, href: &'static str) -> Self {
        Self {
            label,
            href: Some(href),
        }
    }

    pub const fn action(label: &'static str) -> Self {
        Self { label, href: None }
    }
}
