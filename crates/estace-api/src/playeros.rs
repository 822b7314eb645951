//! Playero (attendant) endpoints.

use estace_core::{Playero, PlayeroRequest};
use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ApiError;

const PLAYEROS: &str = "api/playeros";

impl ApiClient {
    /// Attendants across all of the owner's facilities.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the authenticated request.
    pub async fn list_playeros(&self) -> Result<Vec<Playero>, ApiError> {
        self.send_authenticated(
            Method::GET,
            PLAYEROS,
            None::<&()>,
            "Error al obtener playeros",
        )
        .await
    }

    /// # Errors
    ///
    /// Propagates [`ApiError`] from the authenticated request.
    pub async fn get_playero(&self, legajo: i64) -> Result<Playero, ApiError> {
        self.send_authenticated(
            Method::GET,
            &format!("{PLAYEROS}/{legajo}"),
            None::<&()>,
            "Error al obtener el playero",
        )
        .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Server`] with the backend's text (e.g. a duplicate
    /// DNI) on rejection.
    pub async fn create_playero(&self, request: &PlayeroRequest) -> Result<Playero, ApiError> {
        tracing::info!(dni = request.dni, "creating playero");
        self.send_authenticated(
            Method::POST,
            PLAYEROS,
            Some(request),
            "Error al crear playero",
        )
        .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Server`] with the backend's text on rejection.
    pub async fn update_playero(
        &self,
        legajo: i64,
        request: &PlayeroRequest,
    ) -> Result<Playero, ApiError> {
        tracing::info!(legajo, "updating playero");
        self.send_authenticated(
            Method::PUT,
            &format!("{PLAYEROS}/{legajo}"),
            Some(request),
            "Error al editar playero",
        )
        .await
    }
}
