//! Route access by account role.

use estace_api::ApiClient;
use estace_core::{Role, UserProfile};

use crate::feedback::routes;

/// Roles allowed on the facility and playero pages.
pub const OWNER_ONLY: &[Role] = &[Role::Dueno];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Granted(UserProfile),
    RedirectLogin,
    RedirectDashboard,
}

impl Access {
    /// Where to navigate instead of rendering, if anywhere.
    #[must_use]
    pub fn redirect_route(&self) -> Option<&'static str> {
        match self {
            Access::Granted(_) => None,
            Access::RedirectLogin => Some(routes::LOGIN),
            Access::RedirectDashboard => Some(routes::DASHBOARD),
        }
    }
}

/// Looks up the current user's role and decides whether the page renders.
///
/// Without a token no request is made. A failed profile fetch sends the
/// user back to login.
pub async fn authorize(api: &ApiClient, allowed: &[Role]) -> Access {
    if !api.session().is_authenticated() {
        return Access::RedirectLogin;
    }
    match api.get_profile().await {
        Ok(profile) if allowed.contains(&profile.tipo) => Access::Granted(profile),
        Ok(profile) => {
            tracing::info!(tipo = %profile.tipo, "role not allowed on this page");
            Access::RedirectDashboard
        }
        Err(e) => {
            tracing::warn!(error = %e, "could not verify role");
            Access::RedirectLogin
        }
    }
}
