//! Facility (`estacionamiento`) endpoints.

use estace_core::{Facility, FacilityRequest};
use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ApiError;

const FACILITIES: &str = "api/estacionamientos";

impl ApiClient {
    /// Facilities owned by the logged-in user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotAuthenticated`] or [`ApiError::SessionExpired`]
    /// when the user must log in again, and [`ApiError::Server`] otherwise.
    pub async fn list_my_facilities(&self) -> Result<Vec<Facility>, ApiError> {
        self.send_authenticated(
            Method::GET,
            &format!("{FACILITIES}/mis-estacionamientos"),
            None::<&()>,
            "Error al obtener los estacionamientos",
        )
        .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Server`] with the server's message when the
    /// facility does not exist or is not visible to the user.
    pub async fn get_facility(&self, id: i64) -> Result<Facility, ApiError> {
        self.send_authenticated(
            Method::GET,
            &format!("{FACILITIES}/{id}"),
            None::<&()>,
            "No se pudo obtener el estacionamiento",
        )
        .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Server`] carrying the server's validation message
    /// on rejection.
    pub async fn create_facility(&self, request: &FacilityRequest) -> Result<Facility, ApiError> {
        tracing::info!(nombre = %request.nombre, "creating facility");
        self.send_authenticated(
            Method::POST,
            FACILITIES,
            Some(request),
            "Error al crear el estacionamiento",
        )
        .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Server`] carrying the server's validation message
    /// on rejection.
    pub async fn update_facility(
        &self,
        id: i64,
        request: &FacilityRequest,
    ) -> Result<Facility, ApiError> {
        tracing::info!(id, nombre = %request.nombre, "updating facility");
        self.send_authenticated(
            Method::PUT,
            &format!("{FACILITIES}/{id}"),
            Some(request),
            "Error al editar el estacionamiento",
        )
        .await
    }
}
