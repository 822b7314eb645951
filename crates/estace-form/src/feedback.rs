//! What a controller asks the surrounding UI to show or do next.

use std::time::Duration;

pub mod routes {
    pub const LOGIN: &str = "/";
    pub const DASHBOARD: &str = "/dashboard";
    pub const FACILITIES: &str = "/estacionamientos";
    pub const PLAYEROS: &str = "/playeros";
}

/// Pause between a success message and navigating away from a form.
pub const SUCCESS_REDIRECT_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

/// Inline banner. Error alerts are cleared by the next field edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub text: String,
}

impl Alert {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            text: text.into(),
        }
    }
}

/// Deferred navigation scheduled after a successful save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    pub route: &'static str,
    pub after: Duration,
}

impl Redirect {
    #[must_use]
    pub fn after_success(route: &'static str) -> Self {
        Self {
            route,
            after: SUCCESS_REDIRECT_DELAY,
        }
    }
}
