//! Login and profile endpoints.

use estace_core::{AuthResponse, LoginRequest, ProfileUpdate, UserProfile};
use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ApiError;

const USERS: &str = "api/usuarios";

impl ApiClient {
    /// Exchanges credentials for a token and stores it in the session.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Server`] when the credentials are rejected.
    pub async fn login(&self, legajo: i64, password: &str) -> Result<AuthResponse, ApiError> {
        let request = LoginRequest {
            legajo,
            password: password.to_string(),
        };
        let auth: AuthResponse = self
            .send_anonymous(
                Method::POST,
                &format!("{USERS}/login"),
                &request,
                "Error en el login: Credenciales inválidas",
            )
            .await?;
        self.session().sign_in(&auth);
        tracing::info!(legajo, tipo = %auth.tipo, "logged in");
        Ok(auth)
    }

    /// Forgets the stored token. Purely local: the API has no logout call.
    pub fn logout(&self) {
        self.session().clear();
        tracing::info!("logged out");
    }

    /// # Errors
    ///
    /// Propagates [`ApiError`] from the authenticated request.
    pub async fn get_profile(&self) -> Result<UserProfile, ApiError> {
        self.send_authenticated(
            Method::GET,
            &format!("{USERS}/perfil"),
            None::<&()>,
            "Error al obtener los datos del perfil",
        )
        .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Server`] with the backend's message on rejection.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), ApiError> {
        self.send_authenticated::<serde_json::Value, _>(
            Method::PUT,
            &format!("{USERS}/perfil"),
            Some(update),
            "Error al actualizar el perfil",
        )
        .await
        .map(|_| ())
    }
}
